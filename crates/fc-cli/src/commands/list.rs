use colored::Colorize;
use fc_core::FortuneConfig;

pub fn run(config: &FortuneConfig) -> Result<(), String> {
    let book = super::load_book(config)?;
    let index = book.index();

    if index.is_empty() {
        println!("  No fortunes loaded.");
        return Ok(());
    }

    println!("  {}", "Categories".bold());
    for category in index.list_categories() {
        println!("  - {category}");
    }

    Ok(())
}
