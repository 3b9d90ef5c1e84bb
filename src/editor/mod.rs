//! エディタモジュール
//!
//! コマンド面と編集セッションの統合モジュール

pub mod session;

// 公開API
pub use session::{Command, CommandOutcome, EditorSession};
