//! Structure relations of listing pages: children, siblings and ancestors.

use chrono::{DateTime, Utc};
use entries::{Entry, EntryId};
use images::TransformSpec;
use serde::Serialize;

use crate::context::TransformContext;
use crate::error::TransformResult;

/// Entry type of sub-pages that only exist to link elsewhere.
const LINK_ITEM: &str = "linkItem";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Direct children, minus those excluded from child lists.
    Children,
    /// The parent's children, the entry itself included.
    Siblings,
    /// The full ancestor chain, root first.
    Ancestors,
}

/// Summary of a page related to the one being rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    pub date_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_image: Option<String>,
    pub is_current: bool,
}

/// Related pages of `entry`. A missing parent yields no siblings.
pub fn related_entries(
    ctx: &TransformContext<'_>,
    entry: &Entry,
    relation: Relation,
) -> TransformResult<Vec<RelatedEntry>> {
    let candidates = match relation {
        Relation::Ancestors => ctx.store.ancestors(entry)?,
        Relation::Children => ctx
            .store
            .children(entry)?
            .into_iter()
            .filter(|child| !excluded_from_child_lists(child))
            .collect(),
        Relation::Siblings => match ctx.store.parent(entry)? {
            Some(parent) => ctx.store.children(&parent)?,
            None => Vec::new(),
        },
    };

    candidates
        .into_iter()
        .map(|candidate| {
            let resolved = ctx.resolve(candidate)?;
            Ok(related_entry(ctx, &resolved.entry, entry))
        })
        .collect()
}

fn excluded_from_child_lists(entry: &Entry) -> bool {
    entry
        .listing_fields()
        .is_some_and(|fields| fields.exclude_this_page_from_child_lists)
}

/// Link-only sub-pages point at their document or external site instead.
fn custom_link(entry: &Entry) -> Option<String> {
    if entry.type_handle() != LINK_ITEM {
        return None;
    }
    let fields = entry.listing_fields()?;
    fields
        .document_link
        .as_ref()
        .map(|asset| asset.url.clone())
        .or_else(|| entry.external_url().map(str::to_string))
}

fn related_entry(ctx: &TransformContext<'_>, related: &Entry, current: &Entry) -> RelatedEntry {
    let trail_image = ctx.images.build_asset(
        related
            .hero_block_image()
            .and_then(|image| image.image_small.as_ref()),
        &TransformSpec::new().width(500).height(333).crop("faces"),
    );

    RelatedEntry {
        id: related.id,
        title: related.title.clone(),
        path: related.uri.clone(),
        url: related.url.clone(),
        link_url: custom_link(related)
            .or_else(|| related.uri.as_deref().map(|uri| ctx.link_for(uri))),
        date_updated: related.date_updated,
        theme_colour: related.theme_colour.as_ref().map(|c| c.value.clone()),
        trail_text: related.trail_text.clone().filter(|t| !t.is_empty()),
        photo: related.trail_photo.first().map(|photo| photo.url.clone()),
        trail_image,
        is_current: current.uri.is_some() && current.uri == related.uri,
    }
}
