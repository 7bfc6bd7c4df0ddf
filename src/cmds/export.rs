use crate::catalog::view::TuneView;
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
pub struct ExportArgs {
    #[arg(long)]
    out: PathBuf,
}

pub fn export_catalog(view: &TuneView, args: &ExportArgs) -> Result<()> {
    let mut writer = csv::Writer::from_path(&args.out)?;
    for tune in view.tunes().iter() {
        writer.serialize(tune)?;
    }
    writer.flush()?;
    println!("{} tunes written to {}", view.len(), args.out.display());
    Ok(())
}
