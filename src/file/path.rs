//! パス処理
//!
//! 保存・読み込みプロンプトで入力されたパスの展開と検証

use crate::error::{LinedError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// プロンプト入力からパスを解決する
///
/// `~` とホームディレクトリ、`$VAR` 形式の環境変数を展開する
pub fn expand_path(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LinedError::Path("パスが空です".to_string()));
    }

    let home_expanded = expand_home(trimmed)?;
    expand_env(&home_expanded)
}

fn expand_home(input: &str) -> Result<PathBuf> {
    if input.starts_with('~') {
        let home_dir = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| LinedError::Path("ホームディレクトリが取得できません".to_string()))?;

        let expanded = if input == "~" {
            home_dir
        } else if let Some(rest) = input.strip_prefix("~/") {
            format!("{}/{}", home_dir, rest)
        } else {
            // ~user形式は未サポート
            return Err(LinedError::Path(
                "~user形式のパス展開は未サポートです".to_string(),
            ));
        };

        Ok(PathBuf::from(expanded))
    } else {
        Ok(PathBuf::from(input))
    }
}

fn expand_env(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy().to_string();

    match shellexpand::env(&path_str) {
        Ok(expanded) => Ok(PathBuf::from(expanded.as_ref())),
        Err(e) => Err(LinedError::Path(format!("環境変数展開エラー: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_passes_through() {
        let path = expand_path("notes/today.txt").unwrap();
        assert_eq!(path, PathBuf::from("notes/today.txt"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let path = expand_path("  file.txt \n").unwrap();
        assert_eq!(path, PathBuf::from("file.txt"));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(expand_path("   ").is_err());
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = env::var("HOME").or_else(|_| env::var("USERPROFILE"));
        if let Ok(home) = home {
            let path = expand_path("~/file.txt").unwrap();
            assert_eq!(path, PathBuf::from(format!("{}/file.txt", home)));
        }
    }

    #[test]
    fn tilde_user_form_is_rejected() {
        assert!(expand_path("~someone/file.txt").is_err());
    }

    #[test]
    fn env_var_expansion() {
        env::set_var("LINED_TEST_DIR", "/tmp/lined");
        let path = expand_path("$LINED_TEST_DIR/file.txt").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/lined/file.txt"));
    }
}
