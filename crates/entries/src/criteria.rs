//! Query criteria understood by a [`ContentStore`](crate::ContentStore).
//!
//! This is the small subset of the CMS's element query language that the
//! endpoints actually use. Every field narrows the result; unset fields don't
//! filter.

use crate::locale::Locale;
use crate::model::{EntryId, Section};
use crate::status::EntryStatus;

/// Which publication states a query admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
    Any,
    Only(Vec<EntryStatus>),
}

impl Default for StatusFilter {
    /// Same as the CMS: live entries only.
    fn default() -> Self {
        StatusFilter::Only(vec![EntryStatus::Live])
    }
}

impl StatusFilter {
    pub fn admits(&self, status: EntryStatus) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::Only(statuses) => statuses.contains(&status),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Structure/authoring order as stored.
    #[default]
    Structure,
    /// Alphabetical by uri.
    Uri,
    /// Newest `postDate` first.
    PostDateDesc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Empty means any section.
    pub sections: Vec<Section>,
    /// `None` means the primary site.
    pub site: Option<Locale>,
    pub status: StatusFilter,
    /// Empty means any id.
    pub ids: Vec<EntryId>,
    pub slug: Option<String>,
    pub uri: Option<String>,
    pub level: Option<u32>,
    pub type_handle: Option<String>,
    /// News articles flagged for promotion.
    pub promoted: Option<bool>,
    pub order: Order,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn sections(mut self, sections: impl IntoIterator<Item = Section>) -> Self {
        self.sections.extend(sections);
        self
    }

    pub fn site(mut self, site: Locale) -> Self {
        self.site = Some(site);
        self
    }

    pub fn statuses(mut self, statuses: impl IntoIterator<Item = EntryStatus>) -> Self {
        self.status = StatusFilter::Only(statuses.into_iter().collect());
        self
    }

    pub fn any_status(mut self) -> Self {
        self.status = StatusFilter::Any;
        self
    }

    pub fn id(mut self, id: EntryId) -> Self {
        self.ids.push(id);
        self
    }

    pub fn ids(mut self, ids: impl IntoIterator<Item = EntryId>) -> Self {
        self.ids.extend(ids);
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn type_handle(mut self, handle: impl Into<String>) -> Self {
        self.type_handle = Some(handle.into());
        self
    }

    pub fn promoted(mut self, promoted: bool) -> Self {
        self.promoted = Some(promoted);
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Site the query runs against.
    pub fn effective_site(&self) -> Locale {
        self.site.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_live_only() {
        let criteria = Criteria::new();
        assert!(criteria.status.admits(EntryStatus::Live));
        assert!(!criteria.status.admits(EntryStatus::Expired));
        assert_eq!(criteria.effective_site(), Locale::En);
    }

    #[test]
    fn any_status_admits_everything() {
        let criteria = Criteria::new().statuses([EntryStatus::Live]).any_status();
        assert!(criteria.status.admits(EntryStatus::Disabled));
    }
}
