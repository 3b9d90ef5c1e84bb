//! エラーハンドリングシステム
//!
//! lined 全体で使用される統一されたエラー型を定義
//! すべてのエラーは呼び出し元へ値として返され、プロセスを停止させない

use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum LinedError {
    /// バッファ操作エラー
    #[error("Buffer operation failed")]
    Buffer(#[from] BufferError),

    /// ファイル操作エラー
    #[error("File operation failed")]
    File(#[from] FileError),

    /// パスエラー
    #[error("Path error: {0}")]
    Path(String),

    /// アプリケーション論理エラー
    #[error("Application error: {0}")]
    Application(String),
}

/// バッファ操作固有のエラー
///
/// 挿入位置の検証失敗はすべてここに分類される
#[derive(Error, Debug, Clone)]
pub enum BufferError {
    #[error("Line index {index} out of range (buffer has {line_count} lines)")]
    LineOutOfRange { index: usize, line_count: usize },

    #[error("Offset {offset} out of range (line is {line_len} bytes)")]
    OffsetOutOfRange { offset: usize, line_len: usize },

    #[error("Offset {offset} is not a character boundary")]
    NotCharBoundary { offset: usize },

    #[error("Text contains an embedded newline")]
    EmbeddedNewline,
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for LinedError {
    fn from(err: std::io::Error) -> Self {
        LinedError::File(FileError::Io {
            message: err.to_string(),
        })
    }
}

impl LinedError {
    /// ユーザー向けのエラーメッセージを生成
    pub fn user_message(&self) -> String {
        match self {
            LinedError::Buffer(e) => match e {
                BufferError::LineOutOfRange { .. }
                | BufferError::OffsetOutOfRange { .. }
                | BufferError::NotCharBoundary { .. } => {
                    format!("Invalid index provided: {}", e)
                }
                BufferError::EmbeddedNewline => {
                    "Text must not contain a newline".to_string()
                }
            },
            LinedError::File(e) => format!("File error: {}", e),
            LinedError::Path(msg) => format!("Path error: {}", msg),
            LinedError::Application(msg) => msg.clone(),
        }
    }
}

/// アプリケーション全体の結果型
pub type Result<T> = std::result::Result<T, LinedError>;
