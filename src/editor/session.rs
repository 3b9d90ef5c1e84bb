//! 編集セッション
//!
//! ディスパッチャから受け取ったコマンドを単一の行バッファへ適用する。
//! バッファはセッションが排他的に所有し、プロセス生存期間中は
//! 単一スレッドから逐次的に操作される。

use crate::buffer::LineBuffer;
use crate::error::Result;
use crate::file;
use crate::search::{self, SearchMatch};
use std::path::PathBuf;

/// ディスパッチャから発行されるコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 末尾への追記
    Append(String),
    /// 新しい行の開始
    NewLine,
    /// ファイルへ保存
    Save(PathBuf),
    /// ファイルから読み込み
    Load(PathBuf),
    /// バッファ内容の取得
    Render,
    /// 指定位置への挿入
    Insert {
        line: usize,
        offset: usize,
        text: String,
    },
    /// 部分文字列検索
    Search(String),
}

/// コマンド実行の成功結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// 値を伴わない成功
    Done,
    /// バッファ内容（表示用スナップショット）
    Lines(Vec<String>),
    /// 検索結果（空列 = マッチなし）
    Matches(Vec<SearchMatch>),
}

/// 編集セッション
///
/// 失敗したコマンドはバッファを変更しない（呼び出し単位の原子性）
#[derive(Debug, Default)]
pub struct EditorSession {
    buffer: LineBuffer,
}

impl EditorSession {
    /// 空バッファを持つ新しいセッションを作成
    pub fn new() -> Self {
        Self {
            buffer: LineBuffer::new(),
        }
    }

    /// 既存バッファからセッションを作成
    pub fn with_buffer(buffer: LineBuffer) -> Self {
        Self { buffer }
    }

    /// 保持しているバッファへの参照
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// コマンドを実行する
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::Append(text) => {
                self.buffer.append_to_end(&text)?;
                Ok(CommandOutcome::Done)
            }
            Command::NewLine => {
                self.buffer.start_new_line();
                Ok(CommandOutcome::Done)
            }
            Command::Save(path) => {
                file::write_file(&path, &self.buffer.serialize())?;
                Ok(CommandOutcome::Done)
            }
            Command::Load(path) => {
                // 全体の読み込みが成功してから初めてバッファを置き換える。
                // 読み込み失敗時は既存内容を保持する。
                let content = file::read_file(&path)?;
                self.buffer.replace_from_serialized(&content);
                Ok(CommandOutcome::Done)
            }
            Command::Render => Ok(CommandOutcome::Lines(self.buffer.lines().to_vec())),
            Command::Insert { line, offset, text } => {
                self.buffer.insert_at(line, offset, &text)?;
                Ok(CommandOutcome::Done)
            }
            Command::Search(query) => {
                Ok(CommandOutcome::Matches(search::search_buffer(
                    &self.buffer,
                    &query,
                )))
            }
        }
    }
}
