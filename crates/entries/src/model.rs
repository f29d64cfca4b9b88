//! Entry model shared by every content type.
//!
//! Attributes every CMS entry carries live on [`Entry`]; anything specific to
//! one content type lives in the matching [`EntryFields`] variant.

use chrono::{DateTime, Utc};
use images::{Asset, HeroImage};
use serde::{Deserialize, Serialize};

use crate::fields::EntryFields;
use crate::locale::Locale;
use crate::status::EntryStatus;

pub type EntryId = u64;

/// CMS section an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    About,
    FundingProgrammes,
    FundingGuidance,
    BuildingBetterOpportunities,
    Homepage,
    News,
    CaseStudies,
    ProjectStories,
    SeniorManagementTeam,
    BoardMembers,
    Surveys,
    People,
    Research,
    Updates,
}

impl Section {
    /// Parse the camelCase handle used in URLs and configuration.
    pub fn from_handle(handle: &str) -> Option<Section> {
        serde_json::from_value(serde_json::Value::String(handle.to_string())).ok()
    }
}

/// Entry type within a section, e.g. `linkItem` or `press_releases`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryType {
    pub handle: String,
    #[serde(default)]
    pub name: String,
}

/// A dropdown/radio option value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub label: String,
    pub value: String,
}

/// A category from one of the CMS category groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub parent: Option<Box<Category>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: u64,
    pub title: String,
    pub slug: String,
}

/// The newer hero field: an optional image plus a free-text credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    #[serde(default)]
    pub image: Option<HeroImage>,
    #[serde(default)]
    pub credit: Option<String>,
}

/// A CMS entry in one site (locale).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub site: Locale,
    pub section: Section,
    #[serde(default)]
    pub entry_type: EntryType,
    pub slug: String,
    /// Canonical path without leading slash. `None` on revisions.
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub title: String,
    pub status: EntryStatus,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    #[serde(default)]
    pub post_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub parent_id: Option<EntryId>,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub theme_colour: Option<Choice>,
    #[serde(default)]
    pub trail_text: Option<String>,
    #[serde(default)]
    pub trail_photo: Vec<Asset>,
    /// Legacy hero field.
    #[serde(default)]
    pub hero_image: Option<HeroImage>,
    #[serde(default)]
    pub hero: Option<HeroBlock>,
    #[serde(default)]
    pub fields: EntryFields,
}

fn default_level() -> u32 {
    1
}

impl Entry {
    /// Minimal live entry, mostly useful for fixtures.
    pub fn new(id: EntryId, site: Locale, section: Section, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let now = Utc::now();
        Self {
            id,
            site,
            section,
            entry_type: EntryType::default(),
            title: slug.clone(),
            uri: Some(slug.clone()),
            url: None,
            slug,
            status: EntryStatus::Live,
            date_created: now,
            date_updated: now,
            post_date: None,
            parent_id: None,
            level: 1,
            theme_colour: None,
            trail_text: None,
            trail_photo: Vec::new(),
            hero_image: None,
            hero: None,
            fields: EntryFields::Plain,
        }
    }

    pub fn uri(&self) -> &str {
        self.uri.as_deref().unwrap_or_default()
    }

    pub fn type_handle(&self) -> &str {
        &self.entry_type.handle
    }

    /// Image of the new-style hero field, if any.
    pub fn hero_block_image(&self) -> Option<&HeroImage> {
        self.hero.as_ref().and_then(|hero| hero.image.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_handles_parse() {
        assert_eq!(Section::from_handle("boardMembers"), Some(Section::BoardMembers));
        assert_eq!(
            Section::from_handle("seniorManagementTeam"),
            Some(Section::SeniorManagementTeam)
        );
        assert_eq!(Section::from_handle("secretSection"), None);
    }

    #[test]
    fn entry_deserializes_with_defaults() {
        let json = serde_json::json!({
            "id": 7,
            "site": "cy",
            "section": "about",
            "slug": "contact-us",
            "uri": "about/contact-us",
            "title": "Cysylltu",
            "status": "live",
            "dateCreated": "2019-01-01T00:00:00Z",
            "dateUpdated": "2019-02-01T00:00:00Z"
        });

        let entry: Entry = serde_json::from_value(json).unwrap();
        assert_eq!(entry.site, Locale::Cy);
        assert_eq!(entry.level, 1);
        assert_eq!(entry.uri(), "about/contact-us");
        assert_eq!(entry.fields, EntryFields::Plain);
        assert!(entry.trail_photo.is_empty());
    }
}
