use crate::abc::parser;
use crate::catalog::{repo::AsRepo, tune::Tune};
use anyhow::Result;
use kdam::BarExt;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, clap::Parser)]
pub struct ScanArgs {
    #[arg(short, long, default_value = "abc_books")]
    directory: PathBuf,
}

/// Book id of a notation file, read from the name of its parent folder.
/// Files sitting under a folder that is not a plain number belong to no book.
fn book_id_for(path: &Path) -> Option<i64> {
    path.parent()
        .and_then(|dir| dir.file_name())
        .and_then(|name| name.to_str())
        .and_then(|name| name.parse().ok())
}

fn collect_abc_files(directory: &Path) -> Vec<PathBuf> {
    WalkDir::new(directory)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "abc"))
        .collect()
}

/// Rebuilds the catalog from every `.abc` file under the book directory.
/// The old database file is thrown away first, so ids start over from 1.
pub fn scan_books(db_path: &Path, args: &ScanArgs) -> Result<()> {
    if db_path.exists() {
        std::fs::remove_file(db_path)?;
    }
    let conn = Connection::open(db_path)?;
    let repo = Tune::repo(&conn);
    repo.ensure_schema()?;

    let files = collect_abc_files(&args.directory);
    let mut total = 0;
    let mut pb = kdam::tqdm!(total = files.len());
    for path in files.iter() {
        let Some(book_id) = book_id_for(path) else {
            log::warn!(
                "skipping {}: parent folder is not a book number",
                path.display()
            );
            pb.update(1)?;
            continue;
        };
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("error reading {}: {}", path.display(), e);
                pb.update(1)?;
                continue;
            }
        };
        let tunes = parser::parse(&text, book_id);
        for tune in tunes.iter() {
            repo.insert(tune)?;
        }
        log::debug!(
            "processed book {}: {} ({} tunes)",
            book_id,
            path.display(),
            tunes.len()
        );
        total += tunes.len();
        pb.update(1)?;
    }
    println!("{} tunes imported", total);
    Ok(())
}
