use anyhow::Result;
use lined::App;

fn main() -> Result<()> {
    println!("lined - menu-driven line editor");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = App::new()?;
    app.run()?;

    Ok(())
}
