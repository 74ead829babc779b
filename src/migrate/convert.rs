use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::error::MigrateError;
use crate::migrate::parse::LegacyRecord;
use crate::migrate::paths::MigratePaths;

/// One record in the current master format. IDs are assigned by parse
/// order, 1-based and contiguous, and the thumbnail filename is derived
/// from the ID alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedRecord {
    pub id: usize,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub thumb_filename: String,
}

/// Outcome of relocating one record's thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbCopy {
    Copied {
        id: usize,
        old_file: String,
        new_file: String,
    },
    /// The legacy file was not on disk. Non-fatal: the record still gets
    /// a full entry in the new master, pointing at a file that was never
    /// copied.
    Missing { id: usize, old_path: PathBuf },
}

pub fn thumb_filename(id: usize) -> String {
    format!("{id}.jpg")
}

pub fn to_migrated(id: usize, legacy: &LegacyRecord) -> MigratedRecord {
    MigratedRecord {
        id,
        name: legacy.name.clone(),
        description: legacy.description.clone(),
        image_url: legacy.image_url.clone(),
        thumb_filename: thumb_filename(id),
    }
}

/// Copy one legacy thumbnail to its renumbered location, overwriting any
/// existing target. A record without a thumbnail key errors out, which
/// aborts the whole run.
pub fn copy_thumb(paths: &MigratePaths, id: usize, legacy: &LegacyRecord) -> Result<ThumbCopy> {
    let key = legacy
        .thumb_key
        .as_deref()
        .ok_or_else(|| MigrateError::MissingThumbKey {
            id,
            name: legacy.name.clone(),
        })?;

    let old_file = format!("{key}.jpg");
    let new_file = thumb_filename(id);
    let old_path = paths.old_images_dir.join(&old_file);
    let new_path = paths.new_images_dir.join(&new_file);

    if !old_path.exists() {
        return Ok(ThumbCopy::Missing { id, old_path });
    }

    fs::copy(&old_path, &new_path).with_context(|| {
        format!(
            "failed to copy {} to {}",
            old_path.display(),
            new_path.display()
        )
    })?;

    Ok(ThumbCopy::Copied {
        id,
        old_file,
        new_file,
    })
}
