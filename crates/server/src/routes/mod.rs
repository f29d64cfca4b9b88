//! API route handlers
//!
//! Routes are organized by API version:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `v1`: The original content endpoints
//! - `v2`: Programme, people, research and update endpoints

pub mod health;
pub mod v1;
pub mod v2;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use content_api::{Endpoint, Locale, PreviewRequest, ROUTES};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::state::ServerState;

/// API version and base info
///
/// Returns server information including version and available endpoints.
///
/// # Response
///
/// ```json
/// {
///   "name": "Content API",
///   "version": "0.1.0",
///   "api_versions": ["v1", "v2"],
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    let endpoints: Vec<String> = ROUTES
        .iter()
        .map(|route| format!("/{route}"))
        .chain(["/health", "/ready", "/metrics"].map(String::from))
        .collect();

    Ok(Json(json!({
        "name": "Content API",
        "version": env!("CARGO_PKG_VERSION"),
        "api_versions": ["v1", "v2"],
        "endpoints": endpoints,
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::not_found()
}

/// Query parameters shared by the content endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ContentQuery {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub draft: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Listing page path
    #[serde(default)]
    pub path: Option<String>,
    /// Include closed surveys
    #[serde(default)]
    pub all: Option<String>,
}

impl ContentQuery {
    pub fn preview(&self) -> PreviewRequest {
        PreviewRequest::new(self.draft.clone(), self.version.clone())
    }

    pub fn page(&self) -> ServerResult<usize> {
        match self.page.as_deref().map(str::trim) {
            None | Some("") => Ok(1),
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|page| *page >= 1)
                .ok_or_else(|| {
                    ServerError::BadRequest(format!("page must be a positive integer, got {raw:?}"))
                }),
        }
    }

    /// Flag parameters are set unless empty, `0` or `false`.
    pub fn show_all(&self) -> bool {
        self.all
            .as_deref()
            .is_some_and(|v| !matches!(v.trim(), "" | "0" | "false"))
    }
}

/// Locales outside the site list are unknown routes.
pub(crate) fn parse_locale(raw: &str) -> ServerResult<Locale> {
    raw.parse().map_err(|_| ServerError::not_found())
}

/// Render an endpoint and record its outcome.
pub(crate) fn render(
    state: &ServerState,
    endpoint: Endpoint,
    query: &ContentQuery,
) -> ServerResult<Json<Value>> {
    let page = query.page()?;
    let result = state.api.handle(&endpoint, &query.preview(), page);

    let outcome = match &result {
        Ok(_) => "ok",
        Err(err) if err.is_not_found() => "not_found",
        Err(_) => "error",
    };
    metrics::counter!(
        "content_api_endpoint_total",
        "endpoint" => endpoint.name(),
        "outcome" => outcome
    )
    .increment(1);

    match result {
        Ok(body) => Ok(Json(body)),
        Err(err) if err.is_not_found() => {
            tracing::debug!(endpoint = endpoint.name(), reason = %err, "endpoint_not_found");
            Err(err.into())
        }
        Err(err) => {
            tracing::warn!(endpoint = endpoint.name(), error = %err, "endpoint_failed");
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_all_flag_values() {
        let query = |all: Option<&str>| ContentQuery {
            all: all.map(String::from),
            ..Default::default()
        };
        assert!(!query(None).show_all());
        assert!(!query(Some("")).show_all());
        assert!(!query(Some("false")).show_all());
        assert!(query(Some("true")).show_all());
        assert!(query(Some("1")).show_all());
    }

    #[test]
    fn unknown_locale_is_not_found() {
        assert!(parse_locale("fr").is_err());
        assert_eq!(parse_locale("cy").unwrap(), Locale::Cy);
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(ContentQuery::default().page().unwrap(), 1);
    }

    #[test]
    fn malformed_page_is_bad_request() {
        let query = |page: &str| ContentQuery {
            page: Some(page.to_string()),
            ..Default::default()
        };
        assert_eq!(query("3").page().unwrap(), 3);
        assert!(matches!(query("0").page(), Err(ServerError::BadRequest(_))));
        assert!(matches!(query("two").page(), Err(ServerError::BadRequest(_))));
    }
}
