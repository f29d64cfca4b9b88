//! Errors raised by the CMS collaborator.
//!
//! Only genuine upstream failures live here. A stale preview id or a missing
//! relation is not an error anywhere in this workspace; callers degrade to
//! omission instead.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures talking to (or loading) the content store.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreError {
    /// The snapshot file could not be read.
    #[error("failed to read content snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot did not match the entry schema.
    #[error("invalid content snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// The backing CMS could not answer.
    #[error("content store unavailable: {0}")]
    Unavailable(String),
}
