//! UIモジュール
//!
//! メニュー表示とコンソール制御

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// メニュー本文
const MENU_TEXT: &str = "\
Please select an option from the menu below:
 1 - Append at the end
 2 - Start a new line
 3 - Save to file
 4 - Load from file
 5 - Print to console
 6 - Insert text by line and index
 7 - Search
 8 - Clear console and display menu
 9 - Exit";

/// メニューを表示する
pub fn display_menu() {
    println!("{}", MENU_TEXT);
    print!("Your choice: ");
    let _ = io::stdout().flush();
}

/// コンソールをクリアしてカーソルを先頭へ戻す
///
/// 端末制御が使えない環境（パイプ入力など）では何もしない
pub fn clear_console() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, Clear(ClearType::All), MoveTo(0, 0));
}

/// プロンプトを表示して即時フラッシュする
pub fn prompt(message: &str) {
    print!("{}", message);
    let _ = io::stdout().flush();
}
