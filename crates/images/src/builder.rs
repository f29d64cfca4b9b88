//! Signed CDN URL construction.

use md5::{Digest, Md5};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;
use url::Url;

use crate::asset::Asset;
use crate::config::ImgixConfig;
use crate::spec::TransformSpec;

/// Everything except RFC 3986 unreserved characters gets escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Base used to resolve site-relative asset URLs.
const RELATIVE_BASE: &str = "http://localhost/";

/// Rewrites raw asset URLs into signed CDN URLs, or passes them through when
/// no CDN is configured.
///
/// The builder is cheap to clone and holds no mutable state; construct it once
/// at start-up and share it.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    config: Option<ImgixConfig>,
    defaults: TransformSpec,
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self::passthrough()
    }
}

impl ImageUrlBuilder {
    pub fn new(config: Option<ImgixConfig>) -> Self {
        Self {
            config,
            defaults: TransformSpec::defaults(),
        }
    }

    /// A builder that never rewrites anything.
    pub fn passthrough() -> Self {
        Self::new(None)
    }

    /// Whether URLs are being rewritten to the CDN.
    pub fn is_signing(&self) -> bool {
        self.config.is_some()
    }

    /// Build the CDN URL for `raw_url` with `spec` layered over the defaults.
    ///
    /// Without CDN configuration `raw_url` is returned unchanged.
    pub fn build(&self, raw_url: &str, spec: &TransformSpec) -> String {
        let Some(config) = &self.config else {
            return raw_url.to_string();
        };

        let path = asset_path(raw_url);
        let params = spec.merged_over(&self.defaults).params();
        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&");

        let signature = sign(&config.sign_key, &path, &query);
        if query.is_empty() {
            format!("https://{}{}?s={}", config.domain, path, signature)
        } else {
            format!("https://{}{}?{}&s={}", config.domain, path, query, signature)
        }
    }

    /// [`build`](Self::build) for an optional asset. No asset, no URL.
    pub fn build_asset(&self, asset: Option<&Asset>, spec: &TransformSpec) -> Option<String> {
        asset.map(|asset| self.build(&asset.url, spec))
    }
}

/// Path component of an absolute or site-relative URL, always starting with `/`.
fn asset_path(raw_url: &str) -> String {
    let parsed = Url::parse(raw_url).or_else(|err| match err {
        url::ParseError::RelativeUrlWithoutBase => {
            Url::parse(RELATIVE_BASE).and_then(|base| base.join(raw_url))
        }
        other => Err(other),
    });

    match parsed {
        Ok(url) => url.path().to_string(),
        Err(err) => {
            debug!(raw_url, error = %err, "asset_url_unparsable");
            let bare = raw_url
                .split(['?', '#'])
                .next()
                .unwrap_or_default()
                .trim_start_matches('/');
            format!("/{bare}")
        }
    }
}

/// Request signature: md5 over key, path and query, hex encoded.
fn sign(sign_key: &str, path: &str, query: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(sign_key.as_bytes());
    hasher.update(path.as_bytes());
    if !query.is_empty() {
        hasher.update(b"?");
        hasher.update(query.as_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signing_builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new(Some(ImgixConfig::new("media.example.org", "test-key")))
    }

    #[test]
    fn passthrough_returns_input() {
        let builder = ImageUrlBuilder::passthrough();
        let raw = "https://origin.example.org/uploads/photo.jpg?v=2";
        assert_eq!(builder.build(raw, &TransformSpec::new().width(100)), raw);
        assert!(!builder.is_signing());
    }

    #[test]
    fn signed_url_uses_cdn_host_and_params() {
        let url = signing_builder().build(
            "http://origin.example.org/uploads/photo.jpg",
            &TransformSpec::new().width(100).height(100),
        );

        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.scheme(), "https");
        assert_eq!(parsed.host_str(), Some("media.example.org"));
        assert_eq!(parsed.path(), "/uploads/photo.jpg");

        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("w".into(), "100".into())));
        assert!(pairs.contains(&("h".into(), "100".into())));
        assert!(pairs.contains(&("auto".into(), "compress,format".into())));
        assert!(pairs.iter().all(|(k, _)| k != "ixlib"));
    }

    #[test]
    fn signature_covers_path_and_query() {
        let url = signing_builder().build(
            "https://origin.example.org/a/b.png",
            &TransformSpec::new().width(644).fit("fill"),
        );

        let expected_query = "auto=compress%2Cformat&crop=entropy&fit=fill&w=644";
        let mut hasher = Md5::new();
        hasher.update(format!("test-key/a/b.png?{expected_query}").as_bytes());
        let expected_sig = hex::encode(hasher.finalize());

        assert_eq!(
            url,
            format!("https://media.example.org/a/b.png?{expected_query}&s={expected_sig}")
        );
    }

    #[test]
    fn relative_urls_are_resolved_to_paths() {
        assert_eq!(asset_path("uploads/x.jpg"), "/uploads/x.jpg");
        assert_eq!(asset_path("/uploads/x.jpg?foo=1"), "/uploads/x.jpg");
        assert_eq!(asset_path("https://cdn.example.org/p/q.jpg"), "/p/q.jpg");
    }

    #[test]
    fn missing_asset_yields_none() {
        let builder = signing_builder();
        assert_eq!(builder.build_asset(None, &TransformSpec::new()), None);

        let asset = Asset::new("https://origin.example.org/x.jpg");
        let url = builder.build_asset(Some(&asset), &TransformSpec::new()).unwrap();
        assert!(url.starts_with("https://media.example.org/x.jpg?"));
    }
}
