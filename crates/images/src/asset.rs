use serde::{Deserialize, Serialize};

/// A file asset attached to a CMS field.
///
/// Only `url` is guaranteed; the remaining attributes depend on what the
/// asset volume recorded at upload time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// File extension without the dot, e.g. `pdf`.
    #[serde(default)]
    pub extension: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
}

impl Asset {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}
