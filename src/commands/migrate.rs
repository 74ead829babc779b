use anyhow::{Context, Result};
use std::fs;

use crate::commands::CommandReport;
use crate::migrate::convert::{self, ThumbCopy};
use crate::migrate::master;
use crate::migrate::parse::parse_legacy;
use crate::migrate::paths::MigratePaths;

/// Run the whole migration: parse the legacy master, renumber and copy
/// thumbnails record by record, then overwrite the destination master.
/// Missing thumbnail files are warnings; everything else is fatal.
pub fn run(paths: &MigratePaths) -> Result<CommandReport> {
    let mut report = CommandReport::new();

    // Both output locations must exist before any copy or write.
    if let Some(parent) = paths.dst_master.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::create_dir_all(&paths.new_images_dir)
        .with_context(|| format!("failed to create {}", paths.new_images_dir.display()))?;

    let raw = fs::read_to_string(&paths.src_master)
        .with_context(|| format!("failed to read {}", paths.src_master.display()))?;
    let legacy = parse_legacy(&raw);

    println!("converting {} records", legacy.len());

    let mut migrated = Vec::with_capacity(legacy.len());
    for (idx, record) in legacy.iter().enumerate() {
        let id = idx + 1;
        match convert::copy_thumb(paths, id, record)? {
            ThumbCopy::Copied {
                id,
                old_file,
                new_file,
            } => println!("  {id}: {old_file} -> {new_file}"),
            ThumbCopy::Missing { id, old_path } => {
                eprintln!("  {id}: warning: missing {}", old_path.display());
            }
        }
        migrated.push(convert::to_migrated(id, record));
    }

    master::write_master(&paths.dst_master, &migrated)?;

    report.detail(format!(
        "done: {} records -> {}",
        migrated.len(),
        paths.dst_master.display()
    ));
    report.detail(format!("thumbnails -> {}", paths.new_images_dir.display()));
    Ok(report)
}
