//! YAML site configuration.
//!
//! The site file carries the translation catalogue used for editor-chosen
//! labels (programme areas, organisation types) that the CMS stores in
//! English only.
//!
//! ## Example
//!
//! ```yaml
//! version: "1.0"
//! name: "production"
//! translations:
//!   cy:
//!     England: "Lloegr"
//!     Charity: "Elusen"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use entries::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use transform::Translator;

/// Errors that can occur when loading the site configuration
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    /// Per-locale message catalogue: source label to translation.
    #[serde(default)]
    pub translations: HashMap<Locale, HashMap<String, String>>,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SiteConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        for (locale, catalogue) in &self.translations {
            if let Some((message, _)) = catalogue.iter().find(|(message, translation)| {
                message.trim().is_empty() || translation.trim().is_empty()
            }) {
                return Err(ConfigLoadError::Validation(format!(
                    "translations.{locale}: empty message or translation for {message:?}"
                )));
            }
        }

        Ok(())
    }

    pub fn translator(&self) -> Translator {
        Translator::from_catalogs(self.translations.clone())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            translations: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
translations:
  cy:
    England: "Lloegr"
"#;

        let config = SiteConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("test config".to_string()));
        let translator = config.translator();
        assert_eq!(translator.translate(Locale::Cy, "England"), "Lloegr");
        assert_eq!(translator.translate(Locale::En, "England"), "England");
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert!(config.translator().is_empty());
    }

    #[test]
    fn test_unsupported_version() {
        let result = SiteConfig::from_yaml("version: \"2\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2"));
    }

    #[test]
    fn test_empty_translation_rejected() {
        let yaml = r#"
version: "1.0"
translations:
  cy:
    England: ""
"#;

        let result = SiteConfig::from_yaml(yaml);
        assert!(result.unwrap_err().to_string().contains("translations.cy"));
    }

    #[test]
    fn test_unknown_locale_rejected() {
        let yaml = r#"
version: "1.0"
translations:
  fr:
    England: "Angleterre"
"#;

        assert!(matches!(
            SiteConfig::from_yaml(yaml),
            Err(ConfigLoadError::YamlParse(_))
        ));
    }
}
