//! The envelope of fields every page-like record starts with.

use chrono::{DateTime, Utc};
use entries::{Entry, EntryId, EntryStatus, HeroBlock, Locale, Resolved};
use images::{build_hero_image, HeroImageUrls};
use serde::Serialize;

use crate::context::TransformContext;
use crate::error::TransformResult;

/// New-style hero: rendered image plus credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroNew {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<HeroImageUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonFields {
    pub id: EntryId,
    pub slug: String,
    pub status: EntryStatus,
    pub available_languages: Vec<Locale>,
    pub date_updated: DateTime<Utc>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroImageUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_new: Option<HeroNew>,
}

/// Common fields plus the publication date, for article-like content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailFields {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_date: Option<DateTime<Utc>>,
}

/// Build the shared envelope for an already revision-resolved entry.
pub fn common_fields(
    ctx: &TransformContext<'_>,
    resolved: &Resolved,
    include_heroes: bool,
) -> TransformResult<CommonFields> {
    let entry = &resolved.entry;

    let (hero, hero_new) = if include_heroes {
        (legacy_hero(ctx, entry), entry.hero.as_ref().map(|h| hero_new(ctx, h)))
    } else {
        (None, None)
    };

    Ok(CommonFields {
        id: entry.id,
        slug: entry.slug.clone(),
        status: resolved.status,
        available_languages: ctx.available_locales(entry.id)?,
        date_updated: entry.date_updated,
        title: entry.title.clone(),
        url: entry.url.clone(),
        path: entry.uri.clone(),
        link_url: entry.uri.as_deref().map(|uri| ctx.link_for(uri)),
        hero,
        hero_new,
    })
}

/// Common fields with heroes, plus the post date.
pub fn detail_fields(
    ctx: &TransformContext<'_>,
    resolved: &Resolved,
) -> TransformResult<DetailFields> {
    Ok(DetailFields {
        common: common_fields(ctx, resolved, true)?,
        post_date: resolved.entry.post_date,
    })
}

pub(crate) fn legacy_hero(ctx: &TransformContext<'_>, entry: &Entry) -> Option<HeroImageUrls> {
    entry
        .hero_image
        .as_ref()
        .map(|hero| build_hero_image(ctx.images, hero))
}

pub(crate) fn hero_new(ctx: &TransformContext<'_>, hero: &HeroBlock) -> HeroNew {
    HeroNew {
        image: hero
            .image
            .as_ref()
            .map(|image| build_hero_image(ctx.images, image)),
        credit: hero.credit.clone(),
    }
}

/// Treat blank CMS text as absent.
pub(crate) fn non_blank(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}
