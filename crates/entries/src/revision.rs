//! Draft/version substitution for content previews.
//!
//! Authors preview unpublished work by adding `?draft=<id>` or
//! `?version=<id>` to a page request. Resolution never fails because of the
//! preview id itself: anything that doesn't match a stored revision of the
//! requested entry quietly falls back to the live entry.

use tracing::debug;

use crate::error::StoreResult;
use crate::model::Entry;
use crate::status::{EntryStatus, RevisionKind};
use crate::store::ContentStore;

/// Preview parameters of the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewRequest {
    pub draft: Option<String>,
    pub version: Option<String>,
}

impl PreviewRequest {
    /// Build from raw query values. Blank values count as absent.
    pub fn new(draft: Option<String>, version: Option<String>) -> Self {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            draft: present(draft),
            version: present(version),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn draft(id: impl Into<String>) -> Self {
        Self::new(Some(id.into()), None)
    }

    pub fn version(id: impl Into<String>) -> Self {
        Self::new(None, Some(id.into()))
    }

    /// Whether the request asks for a draft or a version.
    pub fn is_preview(&self) -> bool {
        self.draft.is_some() || self.version.is_some()
    }

    /// Requested revision. `draft` wins when both are given.
    pub fn requested(&self) -> Option<(RevisionKind, &str)> {
        if let Some(draft) = &self.draft {
            Some((RevisionKind::Draft, draft.as_str()))
        } else {
            self.version
                .as_deref()
                .map(|version| (RevisionKind::Version, version))
        }
    }
}

/// The entry to render and the status to report for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub entry: Entry,
    pub status: EntryStatus,
}

impl Resolved {
    fn canonical(entry: Entry) -> Self {
        let status = entry.status;
        Self { entry, status }
    }
}

/// Statuses visible to listings: live and expired, plus disabled while
/// previewing so brand-new or switched-off pages can be previewed.
pub fn visible_statuses(preview: &PreviewRequest) -> Vec<EntryStatus> {
    let mut statuses = vec![EntryStatus::Live, EntryStatus::Expired];
    if preview.is_preview() {
        statuses.push(EntryStatus::Disabled);
    }
    statuses
}

/// Substitute the requested draft or version for `entry`, if there is one.
///
/// The returned revision carries the canonical entry's uri, since the CMS
/// stores none on revisions. Store failures propagate.
pub fn resolve_revision(
    store: &dyn ContentStore,
    entry: Entry,
    preview: &PreviewRequest,
) -> StoreResult<Resolved> {
    let Some((kind, requested)) = preview.requested() else {
        return Ok(Resolved::canonical(entry));
    };

    let Ok(revision_id) = requested.trim().parse::<u64>() else {
        debug!(entry_id = entry.id, requested, "revision_id_unparsable");
        return Ok(Resolved::canonical(entry));
    };

    let listed = store
        .revisions(kind, entry.id, entry.site)?
        .into_iter()
        .find(|revision| revision.revision_id == revision_id);
    let Some(listed) = listed else {
        debug!(entry_id = entry.id, revision_id, kind = ?kind, "revision_not_found");
        return Ok(Resolved::canonical(entry));
    };

    match store.revision(&listed)? {
        Some(mut revision) => {
            revision.uri = entry.uri.clone();
            Ok(Resolved {
                entry: revision,
                status: kind.status(),
            })
        }
        None => {
            debug!(entry_id = entry.id, revision_id, kind = ?kind, "revision_unfetchable");
            Ok(Resolved::canonical(entry))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_absent() {
        let preview = PreviewRequest::new(Some("  ".into()), Some(String::new()));
        assert!(!preview.is_preview());
        assert_eq!(preview.requested(), None);
    }

    #[test]
    fn draft_takes_precedence() {
        let preview = PreviewRequest::new(Some("3".into()), Some("9".into()));
        assert_eq!(preview.requested(), Some((RevisionKind::Draft, "3")));
    }

    #[test]
    fn previews_can_see_disabled_entries() {
        assert_eq!(
            visible_statuses(&PreviewRequest::none()),
            vec![EntryStatus::Live, EntryStatus::Expired]
        );
        assert!(visible_statuses(&PreviewRequest::version("1")).contains(&EntryStatus::Disabled));
    }
}
