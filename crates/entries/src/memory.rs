//! In-memory [`ContentStore`] over a JSON snapshot of the CMS.
//!
//! The snapshot is the boundary where CMS data gets validated against the
//! typed schema: a document that doesn't fit [`Snapshot`] is rejected at load
//! time rather than surfacing as a missing field mid-request.

use std::cmp::Reverse;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::criteria::{Criteria, Order, StatusFilter};
use crate::error::{StoreError, StoreResult};
use crate::fields::EntryFields;
use crate::locale::Locale;
use crate::model::{Entry, EntryId};
use crate::status::{Revision, RevisionKind, RevisionRef};
use crate::store::ContentStore;

/// Exported CMS content: every entry in every site, plus stored revisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub entries: Vec<Entry>,
    pub drafts: Vec<Revision>,
    pub versions: Vec<Revision>,
}

/// Read-only store answering queries from a [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Snapshot,
}

impl MemoryStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json(json: &str) -> StoreResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self::new(snapshot))
    }

    /// Load and validate a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            entries = store.snapshot.entries.len(),
            drafts = store.snapshot.drafts.len(),
            versions = store.snapshot.versions.len(),
            "snapshot_loaded"
        );
        Ok(store)
    }

    pub fn entry_count(&self) -> usize {
        self.snapshot.entries.len()
    }

    fn revision_list(&self, kind: RevisionKind) -> &[Revision] {
        match kind {
            RevisionKind::Draft => &self.snapshot.drafts,
            RevisionKind::Version => &self.snapshot.versions,
        }
    }

    fn entry_in_site(&self, id: EntryId, site: Locale) -> Option<&Entry> {
        self.snapshot
            .entries
            .iter()
            .find(|entry| entry.id == id && entry.site == site)
    }
}

fn matches(entry: &Entry, criteria: &Criteria) -> bool {
    if entry.site != criteria.effective_site() {
        return false;
    }
    if !criteria.sections.is_empty() && !criteria.sections.contains(&entry.section) {
        return false;
    }
    if !criteria.status.admits(entry.status) {
        return false;
    }
    if !criteria.ids.is_empty() && !criteria.ids.contains(&entry.id) {
        return false;
    }
    if let Some(slug) = &criteria.slug {
        if &entry.slug != slug {
            return false;
        }
    }
    if let Some(uri) = &criteria.uri {
        if entry.uri.as_ref() != Some(uri) {
            return false;
        }
    }
    if let Some(level) = criteria.level {
        if entry.level != level {
            return false;
        }
    }
    if let Some(handle) = &criteria.type_handle {
        if &entry.entry_type.handle != handle {
            return false;
        }
    }
    if let Some(promoted) = criteria.promoted {
        let entry_promoted = match &entry.fields {
            EntryFields::News(fields) => fields.article_promoted,
            EntryFields::Update(fields) => fields.article_promoted,
            _ => false,
        };
        if entry_promoted != promoted {
            return false;
        }
    }
    true
}

impl ContentStore for MemoryStore {
    fn query(&self, criteria: &Criteria) -> StoreResult<Vec<Entry>> {
        let mut found: Vec<Entry> = self
            .snapshot
            .entries
            .iter()
            .filter(|entry| matches(entry, criteria))
            .cloned()
            .collect();

        match criteria.order {
            Order::Structure => {}
            Order::Uri => found.sort_by(|a, b| a.uri().cmp(b.uri())),
            Order::PostDateDesc => found.sort_by_key(|entry| Reverse(entry.post_date)),
        }
        Ok(found)
    }

    fn parent(&self, entry: &Entry) -> StoreResult<Option<Entry>> {
        Ok(entry
            .parent_id
            .and_then(|parent_id| self.entry_in_site(parent_id, entry.site))
            .cloned())
    }

    fn children(&self, entry: &Entry) -> StoreResult<Vec<Entry>> {
        let live = StatusFilter::default();
        Ok(self
            .snapshot
            .entries
            .iter()
            .filter(|child| {
                child.parent_id == Some(entry.id)
                    && child.site == entry.site
                    && live.admits(child.status)
            })
            .cloned()
            .collect())
    }

    fn ancestors(&self, entry: &Entry) -> StoreResult<Vec<Entry>> {
        let live = StatusFilter::default();
        let mut chain = Vec::new();
        let mut next = entry.parent_id;
        while let Some(parent_id) = next {
            let Some(parent) = self.entry_in_site(parent_id, entry.site) else {
                break;
            };
            // Guard against cycles in hand-edited snapshots.
            if parent.id == entry.id || chain.iter().any(|e: &Entry| e.id == parent.id) {
                break;
            }
            next = parent.parent_id;
            if live.admits(parent.status) {
                chain.push(parent.clone());
            }
        }
        chain.reverse();
        Ok(chain)
    }

    fn revisions(
        &self,
        kind: RevisionKind,
        entry_id: EntryId,
        site: Locale,
    ) -> StoreResult<Vec<RevisionRef>> {
        Ok(self
            .revision_list(kind)
            .iter()
            .filter(|revision| revision.entry_id == entry_id && revision.site == site)
            .map(Revision::to_ref)
            .collect())
    }

    fn revision(&self, wanted: &RevisionRef) -> StoreResult<Option<Entry>> {
        Ok(self
            .revision_list(wanted.kind)
            .iter()
            .find(|revision| revision.to_ref() == *wanted)
            .map(|revision| revision.entry.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::NewsFields;
    use crate::model::Section;
    use crate::status::EntryStatus;

    fn page(id: EntryId, site: Locale, uri: &str, parent: Option<EntryId>) -> Entry {
        let mut entry = Entry::new(id, site, Section::About, uri.rsplit('/').next().unwrap());
        entry.uri = Some(uri.to_string());
        entry.parent_id = parent;
        entry.level = uri.split('/').count() as u32;
        entry
    }

    fn store() -> MemoryStore {
        let mut expired = page(4, Locale::En, "about/old", Some(1));
        expired.status = EntryStatus::Expired;

        let mut news = Entry::new(10, Locale::En, Section::News, "promoted");
        news.fields = EntryFields::News(NewsFields {
            article_promoted: true,
            ..Default::default()
        });

        MemoryStore::new(Snapshot {
            entries: vec![
                page(1, Locale::En, "about", None),
                page(2, Locale::En, "about/contact-us", Some(1)),
                page(3, Locale::En, "about/jobs", Some(1)),
                expired,
                page(5, Locale::En, "about/jobs/apply", Some(3)),
                page(1, Locale::Cy, "about", None),
                news,
                Entry::new(11, Locale::En, Section::News, "not-promoted"),
            ],
            ..Default::default()
        })
    }

    #[test]
    fn query_filters_site_status_and_level() {
        let store = store();
        let top = store.query(&Criteria::new().level(1)).unwrap();
        let ids: Vec<_> = top.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 10, 11]);

        let cy = store.query(&Criteria::new().site(Locale::Cy)).unwrap();
        assert_eq!(cy.len(), 1);

        let with_expired = store
            .query(&Criteria::new().statuses([EntryStatus::Live, EntryStatus::Expired]).level(2))
            .unwrap();
        assert_eq!(with_expired.len(), 3);
    }

    #[test]
    fn query_by_uri_and_promotion() {
        let store = store();
        let found = store.query(&Criteria::new().uri("about/jobs")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);

        let promoted = store
            .query(&Criteria::new().section(Section::News).promoted(true))
            .unwrap();
        assert_eq!(promoted.len(), 1);
        assert_eq!(promoted[0].id, 10);
    }

    #[test]
    fn uri_order_sorts_alphabetically() {
        let store = store();
        let found = store
            .query(&Criteria::new().section(Section::About).order(Order::Uri))
            .unwrap();
        let uris: Vec<_> = found.iter().map(|e| e.uri().to_string()).collect();
        assert_eq!(uris, vec!["about", "about/contact-us", "about/jobs", "about/jobs/apply"]);
    }

    #[test]
    fn tree_traversal() {
        let store = store();
        let apply = store.find(5, Locale::En).unwrap().unwrap();

        let ancestors: Vec<_> = store.ancestors(&apply).unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ancestors, vec![1, 3]);

        let root = store.find(1, Locale::En).unwrap().unwrap();
        let children: Vec<_> = store.children(&root).unwrap().iter().map(|e| e.id).collect();
        assert_eq!(children, vec![2, 3]);

        assert!(store.parent(&root).unwrap().is_none());
        assert_eq!(store.parent(&apply).unwrap().unwrap().id, 3);
    }

    #[test]
    fn related_keeps_requested_order_and_skips_missing() {
        let store = store();
        let related = store
            .related(&[3, 99, 2], Locale::En, StatusFilter::default())
            .unwrap();
        let ids: Vec<_> = related.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn load_reports_bad_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");

        assert!(matches!(MemoryStore::load(&path), Err(StoreError::Io { .. })));

        fs::write(&path, r#"{"entries": [{"id": "nope"}]}"#).unwrap();
        assert!(matches!(MemoryStore::load(&path), Err(StoreError::Snapshot(_))));

        fs::write(&path, r#"{"entries": []}"#).unwrap();
        assert_eq!(MemoryStore::load(&path).unwrap().entry_count(), 0);
    }
}
