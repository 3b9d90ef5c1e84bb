//! 検索機能の共有型定義

/// 検索マッチ
///
/// マッチ発生行のインデックス、行内のバイト位置、およびマッチ時点の
/// 行内容スナップショットを保持する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// マッチした行のインデックス（0始まり）
    pub line: usize,
    /// 行内のマッチ開始位置（バイト単位）
    pub offset: usize,
    /// マッチ時点の行内容
    pub line_content: String,
}
