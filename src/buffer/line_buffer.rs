//! 行バッファ実装
//!
//! 改行を含まない行の順序付き列。挿入順 = 表示順 = ファイル順。
//! すべての操作は失敗時にバッファを変更しない（呼び出し単位の原子性）。

use crate::error::{BufferError, Result};

/// 行バッファ構造体
///
/// 不変条件:
/// * 常に1行以上を保持する（内容が空でもよい）
/// * どの行も改行文字を含まない（改行は永続化形式の区切りのみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    /// 行の列（インデックス 0..N-1）
    lines: Vec<String>,
}

impl LineBuffer {
    /// 空行1行だけを持つ新しいバッファを作成
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// 行数を取得
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// 指定インデックスの行内容を取得
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|s| s.as_str())
    }

    /// 全行の読み取り専用ビュー（表示用スナップショット）
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 末尾への追記
    ///
    /// 最終行の内容を `text` で延長する。空の最終行はそのまま埋まり、
    /// 明示的な改行コマンドなしの連続追記は同一行に蓄積される。
    /// 行数は変化しない（行数は改行コマンドの回数 + 1）。
    pub fn append_to_end(&mut self, text: &str) -> Result<()> {
        Self::reject_embedded_newline(text)?;

        // 不変条件により常に最終行が存在する
        let last = self
            .lines
            .last_mut()
            .expect("LineBuffer must hold at least one line");
        last.push_str(text);
        Ok(())
    }

    /// 新しい空行を末尾に追加
    ///
    /// 最終行が空かどうかに関わらず無条件で追加し、新しい挿入位置を
    /// 確立する。
    pub fn start_new_line(&mut self) {
        self.lines.push(String::new());
    }

    /// 指定位置へのテキスト挿入
    ///
    /// `char_offset` はバイト位置。行末ちょうど（`len`）への挿入は有効。
    /// 範囲外・文字境界以外の位置・改行入りテキストは検証エラーとなり、
    /// バッファは変更されない。
    pub fn insert_at(&mut self, line_index: usize, char_offset: usize, text: &str) -> Result<()> {
        Self::reject_embedded_newline(text)?;

        let line_count = self.lines.len();
        let line = self
            .lines
            .get_mut(line_index)
            .ok_or(BufferError::LineOutOfRange {
                index: line_index,
                line_count,
            })?;

        if char_offset > line.len() {
            return Err(BufferError::OffsetOutOfRange {
                offset: char_offset,
                line_len: line.len(),
            }
            .into());
        }
        if !line.is_char_boundary(char_offset) {
            return Err(BufferError::NotCharBoundary {
                offset: char_offset,
            }
            .into());
        }

        line.insert_str(char_offset, text);
        Ok(())
    }

    /// 保存形式への直列化
    ///
    /// 全行を単一の改行で連結する。最終行の後ろに改行は付かない。
    pub fn serialize(&self) -> String {
        self.lines.join("\n")
    }

    /// 直列化された内容からバッファを構築
    ///
    /// 改行で分割し、各セグメント（末尾の空セグメントを含む）が1行と
    /// なる。任意の内容が有効な入力であり、形式エラーは存在しない。
    pub fn from_serialized(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(|s| s.to_string()).collect(),
        }
    }

    /// バッファ全体を直列化済み内容で置き換える
    ///
    /// 読み込みが完全に成功した後にのみ呼び出すこと。置き換えは
    /// 全面的で、以前の内容は破棄される。
    pub fn replace_from_serialized(&mut self, content: &str) {
        *self = Self::from_serialized(content);
    }

    fn reject_embedded_newline(text: &str) -> Result<()> {
        if text.contains('\n') {
            return Err(BufferError::EmbeddedNewline.into());
        }
        Ok(())
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinedError;

    #[test]
    fn new_buffer_has_one_empty_line() {
        let buffer = LineBuffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some(""));
    }

    #[test]
    fn appends_accumulate_on_one_line() {
        let mut buffer = LineBuffer::new();
        buffer.append_to_end("a").unwrap();
        buffer.append_to_end("b").unwrap();
        assert_eq!(buffer.lines(), &["ab".to_string()]);
    }

    #[test]
    fn append_after_new_line_starts_fresh_line() {
        let mut buffer = LineBuffer::new();
        buffer.append_to_end("a").unwrap();
        buffer.start_new_line();
        buffer.append_to_end("b").unwrap();
        assert_eq!(buffer.lines(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn append_never_changes_line_count() {
        let mut buffer = LineBuffer::new();
        buffer.append_to_end("first").unwrap();
        buffer.start_new_line();
        buffer.append_to_end("second").unwrap();
        buffer.append_to_end("third").unwrap();
        assert_eq!(
            buffer.lines(),
            &["first".to_string(), "secondthird".to_string()]
        );
    }

    #[test]
    fn append_empty_text_is_content_no_op() {
        let mut buffer = LineBuffer::new();
        buffer.append_to_end("a").unwrap();
        buffer.append_to_end("").unwrap();
        assert_eq!(buffer.lines(), &["a".to_string()]);
    }

    #[test]
    fn start_new_line_is_unconditional() {
        let mut buffer = LineBuffer::new();
        buffer.start_new_line();
        buffer.start_new_line();
        assert_eq!(buffer.line_count(), 3);
    }

    #[test]
    fn insert_at_start_of_line() {
        let mut buffer = LineBuffer::new();
        buffer.append_to_end("hello").unwrap();
        buffer.insert_at(0, 0, "X").unwrap();
        assert_eq!(buffer.line(0), Some("Xhello"));
    }

    #[test]
    fn insert_at_exact_end_is_valid() {
        let mut buffer = LineBuffer::new();
        buffer.append_to_end("hello").unwrap();
        buffer.insert_at(0, 5, "X").unwrap();
        assert_eq!(buffer.line(0), Some("helloX"));
    }

    #[test]
    fn insert_past_end_fails_and_leaves_buffer_unchanged() {
        let mut buffer = LineBuffer::new();
        buffer.append_to_end("hello").unwrap();
        let err = buffer.insert_at(0, 6, "X").unwrap_err();
        assert!(matches!(
            err,
            LinedError::Buffer(BufferError::OffsetOutOfRange { offset: 6, .. })
        ));
        assert_eq!(buffer.line(0), Some("hello"));
    }

    #[test]
    fn insert_into_missing_line_fails() {
        let mut buffer = LineBuffer::new();
        let err = buffer.insert_at(99, 0, "X").unwrap_err();
        assert!(matches!(
            err,
            LinedError::Buffer(BufferError::LineOutOfRange { index: 99, .. })
        ));
    }

    #[test]
    fn insert_inside_multibyte_char_fails() {
        let mut buffer = LineBuffer::new();
        buffer.append_to_end("héllo").unwrap();
        // 'é' は2バイトであり、オフセット2は文字境界ではない
        let err = buffer.insert_at(0, 2, "X").unwrap_err();
        assert!(matches!(
            err,
            LinedError::Buffer(BufferError::NotCharBoundary { offset: 2 })
        ));
        assert_eq!(buffer.line(0), Some("héllo"));
    }

    #[test]
    fn embedded_newline_is_rejected() {
        let mut buffer = LineBuffer::new();
        let err = buffer.append_to_end("a\nb").unwrap_err();
        assert!(matches!(
            err,
            LinedError::Buffer(BufferError::EmbeddedNewline)
        ));
        assert_eq!(buffer.line_count(), 1);

        let err = buffer.insert_at(0, 0, "a\nb").unwrap_err();
        assert!(matches!(
            err,
            LinedError::Buffer(BufferError::EmbeddedNewline)
        ));
    }

    #[test]
    fn serialize_joins_lines_without_trailing_newline() {
        let mut buffer = LineBuffer::new();
        buffer.append_to_end("a").unwrap();
        buffer.start_new_line();
        buffer.append_to_end("b").unwrap();
        buffer.start_new_line();
        buffer.append_to_end("c").unwrap();
        assert_eq!(buffer.serialize(), "a\nb\nc");
    }

    #[test]
    fn round_trip_preserves_lines() {
        let mut buffer = LineBuffer::new();
        buffer.append_to_end("a").unwrap();
        buffer.start_new_line();
        buffer.append_to_end("b").unwrap();
        buffer.start_new_line();
        buffer.append_to_end("c").unwrap();

        let restored = LineBuffer::from_serialized(&buffer.serialize());
        assert_eq!(restored.lines(), buffer.lines());
    }

    #[test]
    fn trailing_newline_yields_trailing_empty_line() {
        let buffer = LineBuffer::from_serialized("a\nb\n");
        assert_eq!(
            buffer.lines(),
            &["a".to_string(), "b".to_string(), String::new()]
        );
    }

    #[test]
    fn empty_content_yields_single_empty_line() {
        let buffer = LineBuffer::from_serialized("");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some(""));
    }

    #[test]
    fn replace_discards_previous_content() {
        let mut buffer = LineBuffer::new();
        buffer.append_to_end("stale").unwrap();
        buffer.replace_from_serialized("x\ny");
        assert_eq!(buffer.lines(), &["x".to_string(), "y".to_string()]);
    }
}
