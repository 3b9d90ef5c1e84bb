//! バッファ管理モジュール
//!
//! 行単位のテキストデータの管理と編集操作を提供

pub mod line_buffer;

// 公開API
pub use line_buffer::LineBuffer;
