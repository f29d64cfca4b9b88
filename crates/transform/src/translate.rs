//! Static translation catalogue for CMS option labels.

use std::collections::HashMap;

use entries::Locale;

/// Label translations keyed by locale. Unknown labels pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translator {
    catalogs: HashMap<Locale, HashMap<String, String>>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_catalogs(catalogs: HashMap<Locale, HashMap<String, String>>) -> Self {
        Self { catalogs }
    }

    pub fn insert(
        &mut self,
        locale: Locale,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) {
        self.catalogs
            .entry(locale)
            .or_default()
            .insert(message.into(), translation.into());
    }

    pub fn with(
        mut self,
        locale: Locale,
        message: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.insert(locale, message, translation);
        self
    }

    pub fn translate(&self, locale: Locale, message: &str) -> String {
        self.catalogs
            .get(&locale)
            .and_then(|catalog| catalog.get(message))
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }

    pub fn len(&self) -> usize {
        self.catalogs.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_message() {
        let translator = Translator::new().with(Locale::Cy, "Charity", "Elusen");
        assert_eq!(translator.translate(Locale::Cy, "Charity"), "Elusen");
        assert_eq!(translator.translate(Locale::En, "Charity"), "Charity");
        assert_eq!(translator.translate(Locale::Cy, "School"), "School");
        assert_eq!(translator.len(), 1);
    }
}
