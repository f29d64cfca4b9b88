//! Image transform options.
//!
//! A [`TransformSpec`] is the typed form of the CDN's URL parameters. Call
//! sites only set what they care about and the builder merges the result
//! over [`TransformSpec::defaults`], with the call site winning key by key.

use std::collections::BTreeMap;

/// CDN transform parameters. `None` means "not set at this level".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformSpec {
    /// `w`
    pub width: Option<u32>,
    /// `h`
    pub height: Option<u32>,
    /// `max-w`
    pub max_width: Option<u32>,
    pub crop: Option<String>,
    pub fit: Option<String>,
    /// `fm`
    pub format: Option<String>,
    pub auto: Option<String>,
}

impl TransformSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// House defaults: compressed, auto-format, entropy crop.
    pub fn defaults() -> Self {
        Self {
            auto: Some("compress,format".to_string()),
            crop: Some("entropy".to_string()),
            fit: Some("crop".to_string()),
            ..Self::default()
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn crop(mut self, crop: impl Into<String>) -> Self {
        self.crop = Some(crop.into());
        self
    }

    pub fn fit(mut self, fit: impl Into<String>) -> Self {
        self.fit = Some(fit.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Layer `self` over `base`: every key set on `self` wins.
    pub fn merged_over(&self, base: &TransformSpec) -> TransformSpec {
        TransformSpec {
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            max_width: self.max_width.or(base.max_width),
            crop: self.crop.clone().or_else(|| base.crop.clone()),
            fit: self.fit.clone().or_else(|| base.fit.clone()),
            format: self.format.clone().or_else(|| base.format.clone()),
            auto: self.auto.clone().or_else(|| base.auto.clone()),
        }
    }

    /// CDN parameter names mapped to values, sorted by name.
    pub fn params(&self) -> BTreeMap<&'static str, String> {
        let mut params = BTreeMap::new();
        if let Some(auto) = &self.auto {
            params.insert("auto", auto.clone());
        }
        if let Some(crop) = &self.crop {
            params.insert("crop", crop.clone());
        }
        if let Some(fit) = &self.fit {
            params.insert("fit", fit.clone());
        }
        if let Some(format) = &self.format {
            params.insert("fm", format.clone());
        }
        if let Some(height) = self.height {
            params.insert("h", height.to_string());
        }
        if let Some(max_width) = self.max_width {
            params.insert("max-w", max_width.to_string());
        }
        if let Some(width) = self.width {
            params.insert("w", width.to_string());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_site_keys_win_over_defaults() {
        let merged = TransformSpec::new()
            .width(100)
            .crop("faces")
            .merged_over(&TransformSpec::defaults());

        assert_eq!(merged.width, Some(100));
        assert_eq!(merged.crop.as_deref(), Some("faces"));
        assert_eq!(merged.fit.as_deref(), Some("crop"));
        assert_eq!(merged.auto.as_deref(), Some("compress,format"));
    }

    #[test]
    fn params_are_sorted_by_name() {
        let spec = TransformSpec::defaults().width(644).height(10).max_width(1200);
        let keys: Vec<_> = spec.params().keys().copied().collect();
        assert_eq!(keys, vec!["auto", "crop", "fit", "h", "max-w", "w"]);
    }

    #[test]
    fn empty_spec_has_no_params() {
        assert!(TransformSpec::new().params().is_empty());
    }
}
