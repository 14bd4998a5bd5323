use comfy_table::{ContentArrangement, Table};
use fc_core::FortuneConfig;

pub fn run(config: &FortuneConfig) -> Result<(), String> {
    let book = super::load_book(config)?;
    let index = book.index();

    if index.is_empty() {
        println!("  No fortunes loaded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Category", "Fortunes"]);

    for entry in index.count_by_category() {
        table.add_row(vec![entry.category.to_string(), entry.count.to_string()]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} fortune{} in {} categor{}",
        index.total(),
        if index.total() == 1 { "" } else { "s" },
        index.len(),
        if index.len() == 1 { "y" } else { "ies" },
    );

    Ok(())
}
