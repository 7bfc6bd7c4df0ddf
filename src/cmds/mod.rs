use self::{
    book::{list_book_tunes, BookArgs},
    export::{export_catalog, ExportArgs},
    keys::show_key_distribution,
    rhythm::{list_tunes_by_rhythm, RhythmArgs},
    scan::{scan_books, ScanArgs},
    search::{search_titles, SearchArgs},
    stats::show_statistics,
};
use crate::catalog::{repo::AsRepo, tune::Tune, view::TuneView};
use anyhow::Result;
use clap::Parser;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub mod book;
pub mod export;
pub mod keys;
pub mod rhythm;
pub mod scan;
pub mod search;
pub mod stats;
pub mod utils;

#[derive(Debug, clap::Parser)]
enum TunebookCli {
    Scan(ScanArgs),
    Stats,
    Search(SearchArgs),
    Book(BookArgs),
    Keys,
    Rhythm(RhythmArgs),
    Export(ExportArgs),
}

/// Opens the catalog and takes a snapshot of it. The connection is dropped on
/// return, so later writers do not show up until the next load.
fn load_view(db_path: &Path) -> Result<TuneView> {
    let conn = Connection::open(db_path)?;
    Tune::repo(&conn).ensure_schema()?;
    TuneView::load(&conn)
}

pub fn handle_commands() -> Result<()> {
    let args = TunebookCli::try_parse()?;

    let db_path = std::env::var("TUNEBOOK_DB_PATH").unwrap_or("tunes.db".to_string());
    let db_path = PathBuf::from(db_path);

    match args {
        TunebookCli::Scan(args) => scan_books(&db_path, &args),
        TunebookCli::Stats => show_statistics(&load_view(&db_path)?),
        TunebookCli::Search(args) => search_titles(&load_view(&db_path)?, &args),
        TunebookCli::Book(args) => list_book_tunes(&load_view(&db_path)?, &args),
        TunebookCli::Keys => show_key_distribution(&load_view(&db_path)?),
        TunebookCli::Rhythm(args) => list_tunes_by_rhythm(&load_view(&db_path)?, &args),
        TunebookCli::Export(args) => export_catalog(&load_view(&db_path)?, &args),
    }
}
