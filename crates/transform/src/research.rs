use entries::{Entry, EntryStatus, ResearchFields, StatusFilter};
use serde::Serialize;

use crate::common::{common_fields, CommonFields};
use crate::content::{
    category_summary, format_bytes, nested_category_summary, tag_summaries, CategorySummary,
    NestedCategorySummary, TagSummary,
};
use crate::context::TransformContext;
use crate::error::TransformResult;

/// A titled link to another entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummary {
    pub title: String,
    pub link_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesize: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub related_funding_programmes: Vec<LinkSummary>,
    pub portfolio: Vec<NestedCategorySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnership_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<CategorySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub tags: Vec<TagSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_insights_page: Option<LinkSummary>,
}

/// External URLs win over the entry's own page.
fn link_summary(ctx: &TransformContext<'_>, entry: &Entry) -> LinkSummary {
    LinkSummary {
        title: entry.title.clone(),
        link_url: entry
            .external_url()
            .map(str::to_string)
            .unwrap_or_else(|| ctx.link_for(entry.uri())),
    }
}

pub fn transform_research_document(
    ctx: &TransformContext<'_>,
    entry: Entry,
) -> TransformResult<ResearchRecord> {
    let resolved = ctx.resolve(entry)?;
    let common = common_fields(ctx, &resolved, false)?;

    let empty = ResearchFields::default();
    let fields = resolved.entry.research_fields().unwrap_or(&empty);

    let programmes = ctx.related(
        &fields.programme,
        StatusFilter::Only(vec![EntryStatus::Live, EntryStatus::Expired]),
    )?;

    let related_insights_page = match fields.related_insights_page {
        Some(id) => ctx
            .related(&[id], StatusFilter::default())?
            .first()
            .map(|page| link_summary(ctx, page)),
        None => None,
    };

    Ok(ResearchRecord {
        common,
        summary: fields.summary.clone(),
        related_funding_programmes: programmes
            .iter()
            .map(|programme| link_summary(ctx, programme))
            .collect(),
        portfolio: nested_category_summary(ctx, &fields.portfolio),
        partnership_name: fields.partnership_name.clone(),
        document_type: fields
            .document_type
            .first()
            .map(|category| category_summary(ctx, category)),
        document: fields.document.as_ref().map(|asset| DocumentSummary {
            url: asset.url.clone(),
            filetype: asset.extension.clone(),
            filesize: asset.size.map(|size| format_bytes(size, 0)),
        }),
        publisher: fields.publisher.clone(),
        tags: tag_summaries(&fields.document_tags),
        related_insights_page,
    })
}
