use entries::{Criteria, Entry, EntryId, Section};
use images::{build_hero_image, HeroImageUrls};
use serde::Serialize;

use crate::context::TransformContext;
use crate::error::TransformResult;
use crate::summaries::{news_summary, NewsSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomepageHeroes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<HeroImageUrls>,
    pub candidates: Vec<HeroImageUrls>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageRecord {
    pub id: EntryId,
    pub hero_images: HomepageHeroes,
    pub news_articles: Vec<NewsSummary>,
}

/// Homepage heroes plus the promoted news of the request locale.
pub fn transform_homepage(
    ctx: &TransformContext<'_>,
    entry: &Entry,
) -> TransformResult<HomepageRecord> {
    let candidates: Vec<HeroImageUrls> = entry
        .homepage_fields()
        .map(|fields| {
            fields
                .hero_images
                .iter()
                .map(|hero| build_hero_image(ctx.images, hero))
                .collect()
        })
        .unwrap_or_default();

    let news = ctx.store.query(
        &Criteria::new()
            .section(Section::News)
            .site(ctx.locale)
            .promoted(true),
    )?;

    Ok(HomepageRecord {
        id: entry.id,
        hero_images: HomepageHeroes {
            default: candidates.first().cloned(),
            candidates,
        },
        news_articles: news.iter().map(news_summary).collect(),
    })
}
