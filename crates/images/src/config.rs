//! CDN configuration.
//!
//! Signing is only switched on when *both* the domain and the key are known.
//! A half-configured environment behaves exactly like an unconfigured one.

use serde::{Deserialize, Serialize};

/// Environment variable holding the CDN domain.
pub const IMGIX_DOMAIN_ENV: &str = "CUSTOM_IMGIX_DOMAIN";
/// Environment variable holding the CDN signing key.
pub const IMGIX_SIGN_KEY_ENV: &str = "CUSTOM_IMGIX_SIGN_KEY";

/// Domain and signing key for the image CDN.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImgixConfig {
    pub domain: String,
    pub sign_key: String,
}

impl ImgixConfig {
    pub fn new(domain: impl Into<String>, sign_key: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            sign_key: sign_key.into(),
        }
    }

    /// Build a config from optional parts. Blank values count as missing.
    pub fn from_parts(domain: Option<&str>, sign_key: Option<&str>) -> Option<Self> {
        let domain = domain.map(str::trim).filter(|d| !d.is_empty())?;
        let sign_key = sign_key.map(str::trim).filter(|k| !k.is_empty())?;
        Some(Self::new(domain, sign_key))
    }

    /// Read [`IMGIX_DOMAIN_ENV`] and [`IMGIX_SIGN_KEY_ENV`] from the process environment.
    pub fn from_env() -> Option<Self> {
        let domain = std::env::var(IMGIX_DOMAIN_ENV).ok();
        let sign_key = std::env::var(IMGIX_SIGN_KEY_ENV).ok();
        Self::from_parts(domain.as_deref(), sign_key.as_deref())
    }
}

// The signing key must never end up in logs.
impl std::fmt::Debug for ImgixConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImgixConfig")
            .field("domain", &self.domain)
            .field("sign_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_parts_required() {
        assert!(ImgixConfig::from_parts(Some("media.example.org"), None).is_none());
        assert!(ImgixConfig::from_parts(None, Some("key")).is_none());
        assert!(ImgixConfig::from_parts(Some(" "), Some("key")).is_none());

        let cfg = ImgixConfig::from_parts(Some("media.example.org"), Some("key")).unwrap();
        assert_eq!(cfg.domain, "media.example.org");
        assert_eq!(cfg.sign_key, "key");
    }

    #[test]
    fn debug_redacts_key() {
        let cfg = ImgixConfig::new("media.example.org", "super-secret");
        let rendered = format!("{cfg:?}");
        assert!(rendered.contains("media.example.org"));
        assert!(!rendered.contains("super-secret"));
    }
}
