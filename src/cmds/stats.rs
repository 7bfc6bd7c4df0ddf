use super::utils::field_or_unknown;
use crate::catalog::view::TuneView;
use anyhow::Result;
use comfy_table::Table;

/// Catalog totals plus a preview of the first rows.
pub fn show_statistics(view: &TuneView) -> Result<()> {
    println!("total tunes: {}", view.len());
    println!("books: {}", view.book_count());
    if view.is_empty() {
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["book", "title", "rhythm", "key"]);
    for tune in view.tunes().iter().take(5) {
        table.add_row(vec![
            tune.book_id.to_string(),
            field_or_unknown(&tune.title),
            field_or_unknown(&tune.rhythm),
            field_or_unknown(&tune.key_sig),
        ]);
    }
    println!("{}", table);
    Ok(())
}
