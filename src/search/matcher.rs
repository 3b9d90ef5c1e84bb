//! 検索用マッチャー

use super::types::SearchMatch;
use crate::buffer::LineBuffer;

/// 行内マッチング戦略
pub trait LineMatcher {
    /// 1行内のすべての非重複マッチの開始位置を返す
    fn find_in_line(&self, line: &str, query: &str) -> Vec<usize>;
}

/// 単純なリテラルマッチャー
#[derive(Debug, Default, Clone)]
pub struct LiteralMatcher;

impl LiteralMatcher {
    /// インスタンスを作成
    pub fn new() -> Self {
        Self
    }
}

impl LineMatcher for LiteralMatcher {
    fn find_in_line(&self, line: &str, query: &str) -> Vec<usize> {
        // 空クエリはゼロマッチ（長さ0のマッチは走査位置が進まないため）
        if query.is_empty() {
            return Vec::new();
        }

        let mut offsets = Vec::new();
        let mut scan = 0usize;

        // 左から右へ走査し、マッチ後はマッチ全体の直後から再開する
        while let Some(found) = line[scan..].find(query) {
            let offset = scan + found;
            offsets.push(offset);
            scan = offset + query.len();
        }

        offsets
    }
}

/// バッファ全行に対する検索
///
/// 行をインデックス順に走査し、各行内は非重複・左から右の順でマッチを
/// 収集する。マッチなしは空列であり、エラーではない。
pub fn search_buffer(buffer: &LineBuffer, query: &str) -> Vec<SearchMatch> {
    search_buffer_with(&LiteralMatcher::new(), buffer, query)
}

/// マッチャーを指定したバッファ検索
pub fn search_buffer_with<M: LineMatcher>(
    matcher: &M,
    buffer: &LineBuffer,
    query: &str,
) -> Vec<SearchMatch> {
    let mut matches = Vec::new();

    for (line_index, line) in buffer.lines().iter().enumerate() {
        for offset in matcher.find_in_line(line, query) {
            matches.push(SearchMatch {
                line: line_index,
                offset,
                line_content: line.clone(),
            });
        }
    }

    matches
}
