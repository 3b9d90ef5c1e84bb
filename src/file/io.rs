//! ファイルI/O操作
//!
//! UTF-8テキストファイルの読み込みと保存機能

use crate::error::{FileError, LinedError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// ファイル操作のトレイト
pub trait FileOperations {
    /// ファイルからテキストを読み込み
    fn read_file<P: AsRef<Path>>(path: P) -> Result<String>;

    /// テキストをファイルに書き込み
    fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()>;

    /// ファイルが存在するかチェック
    fn file_exists<P: AsRef<Path>>(path: P) -> bool;
}

/// ファイル操作の実装
pub struct DefaultFileOperations;

impl FileOperations for DefaultFileOperations {
    fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();

        // ファイル存在チェック
        if !path.exists() {
            return Err(LinedError::File(FileError::NotFound {
                path: path.display().to_string(),
            }));
        }

        // ディレクトリではないことを確認
        if path.is_dir() {
            return Err(LinedError::File(FileError::InvalidPath {
                path: path.display().to_string(),
            }));
        }

        let content = fs::read_to_string(path).map_err(|e| classify_io_error(e, path))?;

        // CRLF入力は警告のみ（内容はそのまま保持する）
        if content.contains('\r') {
            log::warn!("Carriage return found in {}", path.display());
        }

        Ok(content)
    }

    fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();

        if path.is_dir() {
            return Err(LinedError::File(FileError::InvalidPath {
                path: path.display().to_string(),
            }));
        }

        // 一時ファイルに書き込んでからアトミックに移動
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content).map_err(|e| classify_io_error(e, path))?;
        fs::rename(&temp_path, path).map_err(|e| classify_io_error(e, path))?;

        Ok(())
    }

    fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        let path = path.as_ref();
        path.exists() && path.is_file()
    }
}

fn classify_io_error(err: std::io::Error, path: &Path) -> LinedError {
    let file_error = match err.kind() {
        ErrorKind::NotFound => FileError::NotFound {
            path: path.display().to_string(),
        },
        ErrorKind::PermissionDenied => FileError::PermissionDenied {
            path: path.display().to_string(),
        },
        _ => FileError::Io {
            message: err.to_string(),
        },
    };
    LinedError::File(file_error)
}

/// ファイル読み込みの便利関数
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    DefaultFileOperations::read_file(path)
}

/// ファイル書き込みの便利関数
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    DefaultFileOperations::write_file(path, content)
}
