use entries::StoreError;
use thiserror::Error;

pub type TransformResult<T> = Result<T, TransformError>;

/// Why a projection could not produce a record.
///
/// Missing optional data is never an error; only explicit gating and
/// upstream store failures are.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransformError {
    /// The entry exists but must not be shown through this endpoint.
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TransformError {
    pub fn not_found(message: impl Into<String>) -> Self {
        TransformError::NotFound(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TransformError::NotFound(_))
    }
}
