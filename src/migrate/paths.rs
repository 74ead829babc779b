use std::path::PathBuf;

/// The four locations the migration touches. The production run uses
/// fixed paths relative to the gallery project root; tests build this
/// struct against a temp tree instead.
#[derive(Debug, Clone)]
pub struct MigratePaths {
    /// Legacy master file, still sitting in the old project checkout.
    pub src_master: PathBuf,
    /// Destination master file consumed by the gallery app.
    pub dst_master: PathBuf,
    /// Directory holding the legacy `<thumb_key>.jpg` files.
    pub old_images_dir: PathBuf,
    /// Directory receiving the renumbered `<id>.jpg` files.
    pub new_images_dir: PathBuf,
}

impl Default for MigratePaths {
    fn default() -> Self {
        Self {
            src_master: PathBuf::from("../art/artists.txt"),
            dst_master: PathBuf::from("data/artists_master.txt"),
            old_images_dir: PathBuf::from("old_images"),
            new_images_dir: PathBuf::from("images"),
        }
    }
}
