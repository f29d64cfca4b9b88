//! Content Server - HTTP API over the CMS content snapshot
//!
//! This crate serves the content API endpoint table over HTTP. It supports:
//!
//! - **Content endpoints**: v1 and v2 JSON-API style routes per locale
//! - **Previews**: `?draft=` and `?version=` swap in stored revisions
//! - **Health & Metrics**: Liveness/readiness probes and Prometheus metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Operational
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//!
//! ## Content (`{locale}` is `en` or `cy`)
//!
//! - `GET /api/v1/list-routes`
//! - `GET /api/v1/{locale}/homepage`
//! - `GET /api/v1/{locale}/promoted-news`
//! - `GET /api/v1/{locale}/funding-programmes`
//! - `GET /api/v1/{locale}/funding-programme/{slug}`
//! - `GET /api/v1/{locale}/listing?path=`
//! - `GET /api/v1/{locale}/case-studies`
//! - `GET /api/v1/{locale}/profiles/{section}`
//! - `GET /api/v1/{locale}/surveys?all=`
//! - `GET /api/v2/{locale}/funding-programmes[/{slug}]`
//! - `GET /api/v2/{locale}/our-people`
//! - `GET /api/v2/{locale}/research[/{slug}]`
//! - `GET /api/v2/{locale}/updates/{type}[/{slug}]`
//!
//! Every `/api/*` response carries `access-control-allow-origin: *` and
//! `cache-control: public, max-age=0`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
