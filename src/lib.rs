//! lined - メニュー駆動の行指向テキストバッファエディタ
//!
//! 行バッファのコア操作（追記・挿入・検索・保存/読み込み）とメニューループ

// コアモジュール
pub mod error;
pub mod logging;
pub mod app;

// データ層
pub mod buffer;
pub mod file;

// ロジック層
pub mod editor;
pub mod search;

// 表示層
pub mod ui;

// 公開API
pub use app::App;
pub use buffer::LineBuffer;
pub use editor::{Command, CommandOutcome, EditorSession};
pub use error::{BufferError, FileError, LinedError, Result};
pub use search::SearchMatch;
