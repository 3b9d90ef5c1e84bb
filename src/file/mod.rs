//! ファイルモジュール
//!
//! 永続化形式の読み書きとプロンプトパスの解決

pub mod io;
pub mod path;

// 公開API
pub use io::{read_file, write_file, DefaultFileOperations, FileOperations};
pub use path::expand_path;
