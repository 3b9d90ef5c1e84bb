//! 検索モジュール
//!
//! バッファ全行に対するリテラル部分文字列検索

pub mod matcher;
pub mod types;

// 公開API
pub use matcher::{search_buffer, search_buffer_with, LineMatcher, LiteralMatcher};
pub use types::SearchMatch;
