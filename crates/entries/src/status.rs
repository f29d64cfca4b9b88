use std::fmt;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::model::{Entry, EntryId};

/// Publication state of an entry as reported to the front-end.
///
/// `Draft` and `Version` never come from the CMS for a canonical entry; they
/// are the display status of a substituted revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Live,
    Pending,
    Expired,
    Disabled,
    Draft,
    Version,
}

impl EntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryStatus::Live => "live",
            EntryStatus::Pending => "pending",
            EntryStatus::Expired => "expired",
            EntryStatus::Disabled => "disabled",
            EntryStatus::Draft => "draft",
            EntryStatus::Version => "version",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevisionKind {
    Draft,
    Version,
}

impl RevisionKind {
    /// Status shown for an entry substituted by this kind of revision.
    pub fn status(self) -> EntryStatus {
        match self {
            RevisionKind::Draft => EntryStatus::Draft,
            RevisionKind::Version => EntryStatus::Version,
        }
    }
}

/// Lightweight listing row for a revision, as returned when enumerating the
/// revisions of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionRef {
    pub revision_id: u64,
    pub entry_id: EntryId,
    pub site: Locale,
    pub kind: RevisionKind,
}

/// A stored draft or version snapshot of an entry.
///
/// The CMS does not populate `entry.uri` on revisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    pub revision_id: u64,
    pub entry_id: EntryId,
    pub site: Locale,
    pub kind: RevisionKind,
    pub entry: Entry,
}

impl Revision {
    pub fn to_ref(&self) -> RevisionRef {
        RevisionRef {
            revision_id: self.revision_id,
            entry_id: self.entry_id,
            site: self.site,
            kind: self.kind,
        }
    }
}
