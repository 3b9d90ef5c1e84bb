//! メインアプリケーション構造体
//!
//! メニューループと行バッファ操作のディスパッチを実装

use crate::editor::{Command, CommandOutcome, EditorSession};
use crate::error::Result;
use crate::file;
use crate::logging::Logger;
use crate::ui;
use std::io::{self, BufRead};

/// メインアプリケーション構造体
///
/// 単一の編集セッションを所有し、メニュー選択をコマンドへ変換する。
/// 操作の失敗はメッセージとして報告され、ループは継続する。
pub struct App {
    /// 編集セッション（行バッファの唯一の所有者）
    session: EditorSession,
    /// 開発者向けロガー
    logger: Logger,
    /// アプリケーション実行状態
    running: bool,
}

impl App {
    /// 新しいアプリケーションインスタンスを作成
    pub fn new() -> Result<Self> {
        Ok(App {
            session: EditorSession::new(),
            logger: Logger::default(),
            running: true,
        })
    }

    /// アプリケーションが実行中かどうかを確認
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// アプリケーションを終了状態にする
    pub fn shutdown(&mut self) {
        self.running = false;
    }

    /// メインイベントループを実行
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        self.run_loop(&mut input)
    }

    /// 入力ソースを指定してメニューループを実行（テスト向けの継ぎ目）
    pub fn run_loop<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        ui::clear_console();
        ui::display_menu();

        while self.running {
            let choice = match read_trimmed_line(input)? {
                Some(line) => line,
                None => break, // EOF
            };

            match choice.as_str() {
                "1" => self.append_at_end(input)?,
                "2" => self.start_new_line(),
                "3" => self.save_to_file(input)?,
                "4" => self.load_from_file(input)?,
                "5" => self.print_to_console(),
                "6" => self.insert_by_position(input)?,
                "7" => self.search_text(input)?,
                "8" => {
                    ui::clear_console();
                    ui::display_menu();
                    continue;
                }
                "9" => self.shutdown(),
                other => {
                    if !other.is_empty() {
                        println!("Unknown command: {}", other);
                    }
                }
            }

            if self.running {
                ui::prompt("Your choice: ");
            }
        }

        Ok(())
    }

    fn append_at_end<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        ui::prompt("Append to the end: ");
        let text = match read_trimmed_line(input)? {
            Some(text) => text,
            None => return Ok(()),
        };
        let result = self.session.execute(Command::Append(text));
        self.report(result);
        Ok(())
    }

    fn start_new_line(&mut self) {
        println!("New line started");
        let result = self.session.execute(Command::NewLine);
        self.report(result);
    }

    fn save_to_file<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        ui::prompt("Enter the file name for saving: ");
        let raw = match read_trimmed_line(input)? {
            Some(raw) => raw,
            None => return Ok(()),
        };

        match file::expand_path(&raw).and_then(|path| self.session.execute(Command::Save(path))) {
            Ok(_) => println!("Text has been saved successfully"),
            Err(e) => {
                self.logger.log_error(format!("save failed: {}", e));
                println!("Error: Could not save to file! ({})", e.user_message());
            }
        }
        Ok(())
    }

    fn load_from_file<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        ui::prompt("Enter the file name for loading: ");
        let raw = match read_trimmed_line(input)? {
            Some(raw) => raw,
            None => return Ok(()),
        };

        match file::expand_path(&raw).and_then(|path| self.session.execute(Command::Load(path))) {
            Ok(_) => println!("Text has been loaded successfully"),
            Err(e) => {
                self.logger.log_error(format!("load failed: {}", e));
                println!("Error: Could not load from file! ({})", e.user_message());
            }
        }
        Ok(())
    }

    fn print_to_console(&mut self) {
        if let Ok(CommandOutcome::Lines(lines)) = self.session.execute(Command::Render) {
            for line in lines {
                println!("{}", line);
            }
        }
    }

    fn insert_by_position<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        ui::prompt("Enter line and index (e.g., 0 6): ");
        let position = match read_trimmed_line(input)? {
            Some(raw) => parse_line_and_offset(&raw),
            None => return Ok(()),
        };

        let (line, offset) = match position {
            Some(pair) => pair,
            None => {
                println!("Invalid index provided!");
                return Ok(());
            }
        };

        ui::prompt("Enter text to insert: ");
        let text = match read_trimmed_line(input)? {
            Some(text) => text,
            None => return Ok(()),
        };

        let result = self.session.execute(Command::Insert { line, offset, text });
        self.report(result);
        Ok(())
    }

    fn search_text<R: BufRead>(&mut self, input: &mut R) -> Result<()> {
        ui::prompt("Enter text to search: ");
        let query = match read_trimmed_line(input)? {
            Some(query) => query,
            None => return Ok(()),
        };

        match self.session.execute(Command::Search(query)) {
            Ok(CommandOutcome::Matches(matches)) if !matches.is_empty() => {
                for m in &matches {
                    println!(
                        "Found on line {} at position {}: {}",
                        m.line, m.offset, m.line_content
                    );
                }
            }
            _ => println!("Text not found!"),
        }
        Ok(())
    }

    fn report(&self, result: Result<CommandOutcome>) {
        if let Err(e) = result {
            self.logger.log_warning(format!("command failed: {}", e));
            println!("{}", e.user_message());
        }
    }

    /// 現在のバッファ内容を取得（テスト向け）
    pub fn buffer_lines(&self) -> Vec<String> {
        self.session.buffer().lines().to_vec()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().expect("アプリケーションの初期化に失敗しました")
    }
}

/// 1行読み込み、末尾の改行を取り除く。EOFでは `None` を返す
fn read_trimmed_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// "行 オフセット" 形式の入力を解析する
fn parse_line_and_offset(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let line = parts.next()?.parse().ok()?;
    let offset = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((line, offset))
}
