use entries::{Entry, UpdateFields};
use serde::Serialize;

use crate::common::{detail_fields, DetailFields};
use crate::content::{
    category_summary, document_groups, flexible_content, tag_summaries, CategorySummary,
    ContentBlock, DocumentGroupSummary, TagSummary,
};
use crate::context::TransformContext;
use crate::error::TransformResult;

const PRESS_RELEASE: &str = "press_releases";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateType {
    pub name: String,
    pub slug: String,
}

impl UpdateType {
    /// URL slugs use dashes where entry type handles use underscores.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            name: entry.entry_type.name.clone(),
            slug: entry.type_handle().replace('_', "-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PressReleaseFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_to_editors: Option<String>,
    pub document_groups: Vec<DocumentGroupSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecord {
    #[serde(flatten)]
    pub detail: DetailFields,
    pub promoted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummary>,
    pub authors: Vec<TagSummary>,
    pub tags: Vec<TagSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub content: Vec<ContentBlock>,
    pub update_type: UpdateType,
    #[serde(flatten)]
    pub press_release: Option<PressReleaseFields>,
}

pub fn transform_update(ctx: &TransformContext<'_>, entry: Entry) -> TransformResult<UpdateRecord> {
    let resolved = ctx.resolve(entry)?;
    let detail = detail_fields(ctx, &resolved)?;
    let entry = &resolved.entry;

    let empty = UpdateFields::default();
    let fields = entry.update_fields().unwrap_or(&empty);

    let press_release = (entry.type_handle() == PRESS_RELEASE).then(|| PressReleaseFields {
        contacts: fields.press_release_contacts.clone(),
        notes_to_editors: fields.press_release_notes_to_editors.clone(),
        document_groups: document_groups(&fields.document_groups),
    });

    Ok(UpdateRecord {
        promoted: fields.article_promoted,
        trail_photo: entry.trail_photo.first().map(|photo| photo.url.clone()),
        // The primary category is the last one selected.
        category: fields
            .category
            .last()
            .map(|category| category_summary(ctx, category)),
        authors: tag_summaries(&fields.authors),
        tags: tag_summaries(&fields.tags),
        summary: fields.article_summary.clone(),
        content: flexible_content(ctx, &fields.flexible_content, &[]),
        update_type: UpdateType::from_entry(entry),
        press_release,
        detail,
    })
}
