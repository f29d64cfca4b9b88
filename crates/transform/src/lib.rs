//! Field projections from CMS entries to front-end records.
//!
//! Every transformer here is a plain function of an [`Entry`](entries::Entry)
//! and a [`TransformContext`]. The context carries everything a transformer
//! may consult: the store (for relations, revisions and locale lookups), the
//! image URL builder, the translation catalogue, the request locale and the
//! preview parameters. Nothing is read from ambient state.
//!
//! Output records are typed `Serialize` structs. Optional fields are omitted
//! from the JSON when their source is empty; they are never emitted as `null`.
//!
//! ## Transformers
//!
//! | Content | Function |
//! |---------|----------|
//! | route table row | [`route_summary`] |
//! | homepage | [`transform_homepage`] |
//! | news article | [`news_summary`] |
//! | funding programme (matrix) | [`funding_programme_list_item`], [`funding_programme_detail`] |
//! | funding programme | [`transform_programme`] |
//! | listing page | [`transform_listing`] |
//! | case study | [`case_study_summary`] |
//! | staff profile | [`profile_summary`] |
//! | survey | [`transform_survey`] |
//! | people page | [`transform_people`] |
//! | research document | [`transform_research_document`] |
//! | editorial update | [`transform_update`] |

mod common;
mod content;
mod context;
mod error;
mod homepage;
mod listing;
mod people;
mod programmes;
mod relations;
mod research;
mod summaries;
mod surveys;
mod translate;
mod updates;

pub use crate::common::{common_fields, detail_fields, CommonFields, DetailFields, HeroNew};
pub use crate::content::{
    category_summary, document_groups, flexible_content, format_bytes, nested_category_summary,
    tag_summaries, CategorySummary, ContentBlock, DocumentGroupSummary, FileSummary,
    NestedCategorySummary, TagSummary,
};
pub use crate::context::TransformContext;
pub use crate::error::{TransformError, TransformResult};
pub use crate::homepage::{transform_homepage, HomepageHeroes, HomepageRecord};
pub use crate::listing::{transform_listing, ListingRecord, SegmentSummary};
pub use crate::people::{transform_people, PeopleRecord, PersonImage, PersonSummary};
pub use crate::programmes::{
    funding_programme_detail, funding_programme_list_item, programme_summary,
    transform_programme, ChoiceSummary, FundingProgrammeDetail, FundingProgrammeListItem,
    FundingRange, FundingSize, ProgrammeDetailFields, ProgrammeRecord, ProgrammeSummary,
    RegionSummary,
};
pub use crate::relations::{related_entries, RelatedEntry, Relation};
pub use crate::research::{
    transform_research_document, DocumentSummary, LinkSummary, ResearchRecord,
};
pub use crate::summaries::{
    case_study_summary, news_summary, profile_summary, route_summary, CaseStudySummary,
    NewsSummary, ProfileSummary, RouteSummary,
};
pub use crate::surveys::{transform_survey, SurveyChoiceSummary, SurveyRecord};
pub use crate::translate::Translator;
pub use crate::updates::{transform_update, PressReleaseFields, UpdateRecord, UpdateType};
