//! The read-only contract held against the CMS.

use crate::criteria::{Criteria, StatusFilter};
use crate::error::StoreResult;
use crate::locale::Locale;
use crate::model::{Entry, EntryId};
use crate::status::{RevisionKind, RevisionRef};

/// Queries the transformers need from the CMS.
///
/// Implementations are synchronous and read-only. Errors are genuine upstream
/// failures; "nothing found" is always an empty result, never an error.
pub trait ContentStore: Send + Sync {
    /// Entries matching `criteria`, in the order it asks for.
    fn query(&self, criteria: &Criteria) -> StoreResult<Vec<Entry>>;

    /// Parent of `entry` in its structure, in the same site.
    fn parent(&self, entry: &Entry) -> StoreResult<Option<Entry>>;

    /// Direct children of `entry`, in structure order.
    fn children(&self, entry: &Entry) -> StoreResult<Vec<Entry>>;

    /// Ancestor chain of `entry`, root first.
    fn ancestors(&self, entry: &Entry) -> StoreResult<Vec<Entry>>;

    /// Revisions of one kind stored for an entry in one site.
    fn revisions(
        &self,
        kind: RevisionKind,
        entry_id: EntryId,
        site: Locale,
    ) -> StoreResult<Vec<RevisionRef>>;

    /// Full revision entry for a listed revision. Revision ids are only unique
    /// per entry and site, so the lookup matches on all of `revision`. The
    /// returned entry's `uri` is whatever the CMS stored, usually `None`.
    fn revision(&self, revision: &RevisionRef) -> StoreResult<Option<Entry>>;

    /// Live entry with `id` in `site`.
    fn find(&self, id: EntryId, site: Locale) -> StoreResult<Option<Entry>> {
        let criteria = Criteria::new().id(id).site(site);
        Ok(self.query(&criteria)?.into_iter().next())
    }

    /// Related entries by id, keeping the order of `ids` and skipping any that
    /// don't resolve.
    fn related(
        &self,
        ids: &[EntryId],
        site: Locale,
        status: StatusFilter,
    ) -> StoreResult<Vec<Entry>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut criteria = Criteria::new().ids(ids.iter().copied()).site(site);
        criteria.status = status;
        let found = self.query(&criteria)?;
        Ok(ids
            .iter()
            .filter_map(|id| found.iter().find(|entry| entry.id == *id).cloned())
            .collect())
    }
}
