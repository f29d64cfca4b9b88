//! Workspace umbrella crate for the content API.
//!
//! This crate ties the CMS model ([`entries`]), image URL signing
//! ([`images`]) and the per-type projections ([`transform`]) together behind
//! the endpoint table, so callers can render any route with a single
//! [`ContentApi::handle`] call.

pub mod config;
pub mod endpoints;
pub mod envelope;

pub use entries::{
    ContentStore, Entry, EntryStatus, Locale, MemoryStore, PreviewRequest, Snapshot, StoreError,
};
pub use images::{ImageUrlBuilder, ImgixConfig};
pub use transform::{TransformContext, TransformError, Translator};

pub use crate::config::{ConfigLoadError, SiteConfig};
pub use crate::endpoints::{DEFAULT_PER_PAGE, Endpoint, EndpointSpec, ROUTES};
pub use crate::envelope::{Collection, Item, Meta, Pagination};

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by an endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No entry matched, or the entry must not be served.
    #[error("{0}")]
    NotFound(String),

    #[error("transform failure: {0}")]
    Transform(TransformError),

    #[error("content store failure: {0}")]
    Store(#[from] StoreError),

    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<TransformError> for ApiError {
    fn from(value: TransformError) -> Self {
        match value {
            TransformError::NotFound(message) => ApiError::NotFound(message),
            TransformError::Store(err) => ApiError::Store(err),
            other => ApiError::Transform(other),
        }
    }
}

/// Read-only collaborators shared by every request.
pub struct ContentApi {
    store: Arc<dyn ContentStore>,
    images: ImageUrlBuilder,
    translator: Translator,
}

impl ContentApi {
    pub fn new(
        store: Arc<dyn ContentStore>,
        images: ImageUrlBuilder,
        translator: Translator,
    ) -> Self {
        Self {
            store,
            images,
            translator,
        }
    }

    pub fn store(&self) -> &dyn ContentStore {
        self.store.as_ref()
    }

    pub fn images(&self) -> &ImageUrlBuilder {
        &self.images
    }

    /// Render `endpoint` into its response envelope.
    pub fn handle(
        &self,
        endpoint: &Endpoint,
        preview: &PreviewRequest,
        page: usize,
    ) -> ApiResult<Value> {
        let ctx = TransformContext::new(
            self.store.as_ref(),
            &self.images,
            &self.translator,
            endpoint.locale(),
            preview,
        );
        endpoint.run(&ctx, page)
    }
}

impl std::fmt::Debug for ContentApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentApi")
            .field("images", &self.images)
            .field("translations", &self.translator.len())
            .finish_non_exhaustive()
    }
}
