use crate::config::ServerConfig;
use crate::error::ServerResult;
use content_api::{ContentApi, ImageUrlBuilder, MemoryStore, SiteConfig, Translator};
use entries::ContentStore;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Endpoint renderer over the content store (shared across requests)
    pub api: Arc<ContentApi>,

    /// Entries in the loaded snapshot, when known
    pub snapshot_entries: Option<usize>,

    /// Prometheus handle when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Load the snapshot and site configuration named in `config`.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let store = MemoryStore::load(&config.snapshot_path)?;
        let entries = store.entry_count();

        let translator = match &config.site_config_path {
            Some(path) => SiteConfig::from_file(path)?.translator(),
            None => Translator::new(),
        };
        let images = ImageUrlBuilder::new(config.imgix());

        tracing::info!(
            snapshot = %config.snapshot_path.display(),
            entries,
            translations = translator.len(),
            image_signing = images.is_signing(),
            "state_initialised"
        );

        let mut state = Self::with_store(config, Arc::new(store), images, translator);
        state.snapshot_entries = Some(entries);
        Ok(state)
    }

    /// State over an already-built store.
    pub fn with_store(
        config: ServerConfig,
        store: Arc<dyn ContentStore>,
        images: ImageUrlBuilder,
        translator: Translator,
    ) -> Self {
        Self {
            config: Arc::new(config),
            api: Arc::new(ContentApi::new(store, images, translator)),
            snapshot_entries: None,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_snapshot_and_site_config() {
        let entry = serde_json::json!({
            "id": 1,
            "site": "en",
            "section": "about",
            "slug": "about",
            "title": "About",
            "status": "live",
            "dateCreated": "2019-01-01T00:00:00Z",
            "dateUpdated": "2019-01-01T00:00:00Z"
        });
        let mut snapshot = tempfile::NamedTempFile::new().unwrap();
        write!(snapshot, "{}", serde_json::json!({ "entries": [entry] })).unwrap();

        let mut site = tempfile::NamedTempFile::new().unwrap();
        write!(site, "version: \"1.0\"\ntranslations:\n  cy:\n    Charity: Elusen\n").unwrap();

        let config = ServerConfig {
            snapshot_path: snapshot.path().to_path_buf(),
            site_config_path: Some(site.path().to_path_buf()),
            ..Default::default()
        };

        let state = ServerState::new(config).unwrap();
        assert_eq!(state.snapshot_entries, Some(1));
        assert!(state.metrics.is_none());
    }

    #[test]
    fn missing_snapshot_fails() {
        let config = ServerConfig {
            snapshot_path: "/nonexistent/content.json".into(),
            ..Default::default()
        };
        assert!(ServerState::new(config).is_err());
    }
}
