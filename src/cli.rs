use anyhow::Result;
use clap::Parser;

use crate::migrate::paths::MigratePaths;

/// Convert the legacy artists.txt catalog into the current master
/// format and renumber the thumbnails into the images directory.
///
/// All paths are fixed relative to the working directory; run this
/// from the gallery project root.
#[derive(Debug, Parser)]
#[command(name = "gallery-migrate", version)]
struct Cli {}

pub fn run() -> Result<()> {
    let _cli = Cli::parse();

    let report = crate::commands::migrate::run(&MigratePaths::default())?;
    for line in &report.details {
        println!("{line}");
    }
    Ok(())
}
