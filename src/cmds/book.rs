use super::utils::field_or_unknown;
use crate::catalog::view::TuneView;
use anyhow::Result;
use comfy_table::Table;

#[derive(Debug, clap::Parser)]
pub struct BookArgs {
    #[arg(long)]
    id: i64,
}

pub fn list_book_tunes(view: &TuneView, args: &BookArgs) -> Result<()> {
    let book = view.by_book(args.id);
    println!("book {}: {} tunes", args.id, book.len());

    let mut table = Table::new();
    table.set_header(vec!["reference", "title", "rhythm", "key"]);
    for tune in book.tunes().iter() {
        table.add_row(vec![
            tune.reference_number.to_string(),
            field_or_unknown(&tune.title),
            field_or_unknown(&tune.rhythm),
            field_or_unknown(&tune.key_sig),
        ]);
    }
    println!("{}", table);
    Ok(())
}
