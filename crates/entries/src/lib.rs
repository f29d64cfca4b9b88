//! CMS entry model and the read-only contract we hold against the CMS.
//!
//! Everything downstream (transformers, endpoints, the HTTP server) works on
//! the types in this crate rather than on whatever the CMS hands back, so
//! "does this field exist" is answered by the type system instead of a
//! runtime guess.
//!
//! ## Pieces
//!
//! - [`Entry`] + [`EntryFields`] - one typed field set per content type
//! - [`ContentStore`] - the queries we need from the CMS (criteria, tree
//!   traversal, revisions); [`MemoryStore`] implements it over a JSON snapshot
//! - [`resolve_revision`] - draft/version substitution for previews
//! - [`available_locales`] - which language versions of an entry exist
//!
//! ## Example
//!
//! ```
//! use entries::{available_locales, Locale, MemoryStore, Snapshot};
//!
//! let store = MemoryStore::new(Snapshot::default());
//! let locales = available_locales(&store, 42, Locale::Cy).unwrap();
//! assert_eq!(locales, vec![Locale::Cy]);
//! ```

mod criteria;
mod error;
mod fields;
mod locale;
mod locales;
mod memory;
mod model;
mod revision;
mod status;
mod store;

pub use crate::criteria::{Criteria, Order, StatusFilter};
pub use crate::error::{StoreError, StoreResult};
pub use crate::fields::{
    CaseStudyFields, DocumentFile, DocumentGroup, EntryFields, FlexibleBlock,
    FundingProgrammeFields, HomepageFields, ListingFields, NewsFields, PeopleFields, Person,
    ProfileFields, ProgrammeBlock, ProgrammeRegion, ResearchFields, Segment, SurveyChoice,
    SurveyFields, UpdateFields,
};
pub use crate::locale::{Locale, LocaleParseError};
pub use crate::locales::available_locales;
pub use crate::memory::{MemoryStore, Snapshot};
pub use crate::model::{Category, Choice, Entry, EntryId, EntryType, HeroBlock, Section, Tag};
pub use crate::revision::{resolve_revision, visible_statuses, PreviewRequest, Resolved};
pub use crate::status::{EntryStatus, Revision, RevisionKind, RevisionRef};
pub use crate::store::ContentStore;

pub use images::{Asset, HeroImage};
