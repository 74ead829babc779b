use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    /// The legacy thumbnail key (`h:`) is dereferenced unconditionally
    /// when building the old image path, so a record without one aborts
    /// the whole run before anything is written.
    #[error("record {id} ({name:?}) has no thumbnail key (h:)")]
    MissingThumbKey { id: usize, name: String },
}
