use crate::catalog::view::TuneView;
use anyhow::Result;
use comfy_table::Table;

/// The ten most common key signatures across the catalog.
pub fn show_key_distribution(view: &TuneView) -> Result<()> {
    if view.is_empty() {
        println!("no tunes in the catalog");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["key", "tunes"]);
    for (key, count) in view.key_distribution().iter().take(10) {
        table.add_row(vec![key.to_string(), count.to_string()]);
    }
    println!("{}", table);
    Ok(())
}
