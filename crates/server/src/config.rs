use content_api::ImgixConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Process configuration for the content server.
///
/// Every field has a default, so an empty environment still yields a server
/// that reads `content.json` from the working directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,

    /// Per-request deadline; exceeding it answers 408
    pub timeout_secs: u64,

    /// `tracing-subscriber` env-filter directive, e.g. `info,entries=debug`
    pub log_level: String,

    /// JSON snapshot of the CMS content
    pub snapshot_path: PathBuf,

    /// YAML site configuration carrying the translation catalogue
    pub site_config_path: Option<PathBuf>,

    /// Image CDN host; falls back to `CUSTOM_IMGIX_DOMAIN`
    pub imgix_domain: Option<String>,

    /// Image CDN signing key; falls back to `CUSTOM_IMGIX_SIGN_KEY`
    #[serde(skip_serializing)]
    pub imgix_sign_key: Option<String>,

    /// Install the Prometheus recorder and serve `/metrics`
    pub metrics_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            timeout_secs: 30,
            log_level: "info".to_string(),
            snapshot_path: PathBuf::from("content.json"),
            site_config_path: None,
            imgix_domain: None,
            imgix_sign_key: None,
            metrics_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `server` config file and
    /// `CONTENT_API__*` environment variables, in increasing precedence.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "dotenv_loaded");
        }

        let settings = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .add_source(config::Environment::with_prefix("CONTENT_API").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr: SocketAddr = format!("{}:{}", self.bind_addr, self.port).parse()?;
        Ok(addr)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// CDN settings from this config, else from the legacy environment
    /// variables. `None` leaves image URLs untouched.
    pub fn imgix(&self) -> Option<ImgixConfig> {
        ImgixConfig::from_parts(self.imgix_domain.as_deref(), self.imgix_sign_key.as_deref())
            .or_else(ImgixConfig::from_env)
    }
}
