use entries::{Entry, ListingFields};
use serde::Serialize;

use crate::common::{common_fields, non_blank, CommonFields};
use crate::content::{flexible_content, ContentBlock};
use crate::context::TransformContext;
use crate::error::TransformResult;
use crate::relations::{related_entries, RelatedEntry, Relation};
use crate::summaries::{case_study_summaries, CaseStudySummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentSummary {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// A generic content page with its place in the page tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<SegmentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outro: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ancestors: Vec<RelatedEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RelatedEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub siblings: Vec<RelatedEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub case_studies: Vec<CaseStudySummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flexible_content: Vec<ContentBlock>,
}

pub fn transform_listing(
    ctx: &TransformContext<'_>,
    entry: Entry,
) -> TransformResult<ListingRecord> {
    let resolved = ctx.resolve(entry)?;
    let common = common_fields(ctx, &resolved, true)?;
    let entry = &resolved.entry;

    let empty = ListingFields::default();
    let fields = entry.listing_fields().unwrap_or(&empty);

    let ancestors = related_entries(ctx, entry, Relation::Ancestors)?;
    let children = related_entries(ctx, entry, Relation::Children)?;
    let siblings = related_entries(ctx, entry, Relation::Siblings)?;

    // The child page list block renders the children computed above.
    let flexible_content = flexible_content(ctx, &fields.flexible_content, &children);

    Ok(ListingRecord {
        theme_colour: entry.theme_colour.as_ref().map(|c| c.value.clone()),
        trail_text: non_blank(entry.trail_text.as_ref()),
        introduction: non_blank(fields.introduction_text.as_ref()),
        segments: fields
            .content_segment
            .iter()
            .map(|segment| SegmentSummary {
                title: segment.segment_title.clone(),
                content: segment.segment_content.clone(),
                photo: segment.segment_image.as_ref().map(|image| image.url.clone()),
            })
            .collect(),
        outro: non_blank(fields.outro_text.as_ref()),
        related_content: non_blank(fields.related_content.as_ref()),
        ancestors,
        children,
        siblings,
        case_studies: case_study_summaries(ctx, &fields.related_case_studies)?,
        flexible_content,
        common,
    })
}
