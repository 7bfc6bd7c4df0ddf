use super::utils::field_or_unknown;
use crate::catalog::view::TuneView;
use anyhow::Result;
use comfy_table::Table;

#[derive(Debug, clap::Parser)]
pub struct RhythmArgs {
    #[arg(long)]
    term: String,
}

pub fn list_tunes_by_rhythm(view: &TuneView, args: &RhythmArgs) -> Result<()> {
    let hits = view.rhythm_contains(&args.term);
    println!("found {} matches", hits.len());

    let mut table = Table::new();
    table.set_header(vec!["title", "book", "rhythm", "key"]);
    for tune in hits.tunes().iter() {
        table.add_row(vec![
            field_or_unknown(&tune.title),
            tune.book_id.to_string(),
            field_or_unknown(&tune.rhythm),
            field_or_unknown(&tune.key_sig),
        ]);
    }
    println!("{}", table);
    Ok(())
}
