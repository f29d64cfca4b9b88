//! Building blocks shared by several transformers: flexible content, document
//! groups, categories and tags.

use entries::{Category, DocumentGroup, FlexibleBlock, Tag};
use images::TransformSpec;
use serde::Serialize;

use crate::context::TransformContext;
use crate::relations::RelatedEntry;

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// One block of a flexible-content field, in editor order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    ContentArea {
        content: String,
    },
    Inset {
        content: String,
    },
    #[serde(rename_all = "camelCase")]
    Quote {
        quote_text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        attribution: Option<String>,
    },
    Image {
        photo: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    ChildPageList {
        children: Vec<RelatedEntry>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filesize: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentGroupSummary {
    pub title: String,
    pub files: Vec<FileSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestedCategorySummary {
    #[serde(flatten)]
    pub category: CategorySummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<CategorySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSummary {
    pub id: u64,
    pub title: String,
    pub slug: String,
}

/// Project flexible content blocks. A child page list is rendered from
/// `children`, and dropped when there are none.
pub fn flexible_content(
    ctx: &TransformContext<'_>,
    blocks: &[FlexibleBlock],
    children: &[RelatedEntry],
) -> Vec<ContentBlock> {
    blocks
        .iter()
        .filter_map(|block| match block {
            FlexibleBlock::ContentArea { content } => Some(ContentBlock::ContentArea {
                content: content.clone(),
            }),
            FlexibleBlock::Inset { content } => Some(ContentBlock::Inset {
                content: content.clone(),
            }),
            FlexibleBlock::Quote {
                quote_text,
                attribution,
            } => Some(ContentBlock::Quote {
                quote_text: quote_text.clone(),
                attribution: attribution.clone(),
            }),
            FlexibleBlock::Image { image, caption } => Some(ContentBlock::Image {
                photo: ctx.images.build(&image.url, &TransformSpec::new().width(1000)),
                caption: caption.clone(),
            }),
            FlexibleBlock::ChildPageList => {
                (!children.is_empty()).then(|| ContentBlock::ChildPageList {
                    children: children.to_vec(),
                })
            }
        })
        .collect()
}

pub fn document_groups(groups: &[DocumentGroup]) -> Vec<DocumentGroupSummary> {
    groups
        .iter()
        .map(|group| DocumentGroupSummary {
            title: group.title.clone(),
            files: group
                .files
                .iter()
                .map(|file| FileSummary {
                    label: file.label.clone(),
                    href: file.file.url.clone(),
                    filetype: file.file.extension.clone(),
                    filesize: file.file.size.map(|size| format_bytes(size, 0)),
                })
                .collect(),
            extra_content: group.extra_content.clone().filter(|c| !c.is_empty()),
        })
        .collect()
}

pub fn category_summary(ctx: &TransformContext<'_>, category: &Category) -> CategorySummary {
    CategorySummary {
        title: category.title.clone(),
        slug: category.slug.clone(),
        link: category.uri.as_deref().map(|uri| ctx.link_for(uri)),
    }
}

pub fn nested_category_summary(
    ctx: &TransformContext<'_>,
    categories: &[Category],
) -> Vec<NestedCategorySummary> {
    categories
        .iter()
        .map(|category| NestedCategorySummary {
            category: category_summary(ctx, category),
            parent: category
                .parent
                .as_deref()
                .map(|parent| category_summary(ctx, parent)),
        })
        .collect()
}

pub fn tag_summaries(tags: &[Tag]) -> Vec<TagSummary> {
    tags.iter()
        .map(|tag| TagSummary {
            id: tag.id,
            title: tag.title.clone(),
            slug: tag.slug.clone(),
        })
        .collect()
}

/// Human-readable file size using 1024-based units.
///
/// `precision` is the number of decimals kept; trailing zeros are trimmed.
pub fn format_bytes(size: u64, precision: usize) -> String {
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    let mut text = format!("{rounded:.precision$}");
    if text.contains('.') {
        text = text.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    format!("{text} {}", BYTE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bytes_across_units() {
        assert_eq!(format_bytes(0, 0), "0 B");
        assert_eq!(format_bytes(512, 2), "512 B");
        assert_eq!(format_bytes(1536, 1), "1.5 KB");
        assert_eq!(format_bytes(1536, 0), "2 KB");
        assert_eq!(format_bytes(1024 * 1024, 2), "1 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024, 0), "5 GB");
    }

    #[test]
    fn tags_keep_order() {
        let tags = vec![
            Tag {
                id: 2,
                title: "Youth".into(),
                slug: "youth".into(),
            },
            Tag {
                id: 1,
                title: "Arts".into(),
                slug: "arts".into(),
            },
        ];
        let summaries = tag_summaries(&tags);
        assert_eq!(summaries[0].slug, "youth");
        assert_eq!(summaries[1].id, 1);
    }

    #[test]
    fn quote_block_serializes_camel_case() {
        let block = ContentBlock::Quote {
            quote_text: "Hello".into(),
            attribution: None,
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json, serde_json::json!({"type": "quote", "quoteText": "Hello"}));
    }
}
