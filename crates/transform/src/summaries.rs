//! Compact projections used in lists and as embedded relations.

use entries::{Entry, EntryId, EntryStatus, StatusFilter};
use images::{HeroImageUrls, TransformSpec};
use serde::Serialize;

use crate::common::{hero_new, legacy_hero, non_blank, HeroNew};
use crate::content::{flexible_content, ContentBlock};
use crate::context::TransformContext;
use crate::error::TransformResult;

/// One row of the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub id: EntryId,
    pub title: String,
    pub path: String,
    pub live: bool,
    pub is_from_cms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudySummary {
    pub id: EntryId,
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_text_more: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroImageUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_credit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_new: Option<HeroNew>,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub id: EntryId,
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

pub fn route_summary(entry: &Entry) -> RouteSummary {
    RouteSummary {
        id: entry.id,
        title: entry.title.clone(),
        path: format!("/{}", entry.uri()),
        live: entry.status == EntryStatus::Live,
        is_from_cms: true,
    }
}

pub fn news_summary(entry: &Entry) -> NewsSummary {
    let fields = entry.news_fields();
    NewsSummary {
        title: fields.and_then(|f| f.article_title.clone()),
        summary: fields.and_then(|f| f.article_summary.clone()),
        link: fields.and_then(|f| f.article_link.clone()),
    }
}

pub fn case_study_summary(ctx: &TransformContext<'_>, entry: &Entry) -> CaseStudySummary {
    let fields = entry.case_study_fields();
    let thumbnail_url = ctx.images.build_asset(
        fields.and_then(|f| f.case_study_thumbnail_image.as_ref()),
        &TransformSpec::new().width(600).height(400),
    );

    CaseStudySummary {
        id: entry.id,
        slug: entry.slug.clone(),
        title: entry.title.clone(),
        link_url: fields.and_then(|f| f.case_study_link_url.clone()),
        trail_text: fields.and_then(|f| f.case_study_trail_text.clone()),
        trail_text_more: fields.and_then(|f| f.case_study_trail_text_more.clone()),
        grant_amount: fields.and_then(|f| f.case_study_grant_amount.clone()),
        grant_id: fields.and_then(|f| non_blank(f.case_study_grant_id.as_ref())),
        thumbnail_url,
        hero: legacy_hero(ctx, entry),
        hero_credit: fields.and_then(|f| f.hero_image_credit.clone()),
        hero_new: entry.hero.as_ref().map(|hero| hero_new(ctx, hero)),
        content: fields
            .map(|f| flexible_content(ctx, &f.flexible_content, &[]))
            .unwrap_or_default(),
    }
}

/// Summaries of the related case studies, in editor order. Missing or
/// unpublished entries are skipped.
pub(crate) fn case_study_summaries(
    ctx: &TransformContext<'_>,
    ids: &[EntryId],
) -> TransformResult<Vec<CaseStudySummary>> {
    Ok(ctx
        .related(ids, StatusFilter::default())?
        .iter()
        .map(|entry| case_study_summary(ctx, entry))
        .collect())
}

pub fn profile_summary(entry: &Entry) -> ProfileSummary {
    let fields = entry.profile_fields();
    ProfileSummary {
        id: entry.id,
        slug: entry.slug.clone(),
        title: entry.title.clone(),
        role: fields.and_then(|f| f.profile_role.clone()),
        image: fields.and_then(|f| f.profile_photo.as_ref().map(|photo| photo.url.clone())),
        bio: fields.and_then(|f| f.profile_bio.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entries::{EntryFields, Locale, NewsFields, Section};

    #[test]
    fn route_summary_prefixes_path() {
        let mut entry = Entry::new(3, Locale::En, Section::About, "contact-us");
        entry.uri = Some("about/contact-us".into());
        entry.status = EntryStatus::Pending;

        let row = route_summary(&entry);
        assert_eq!(row.path, "/about/contact-us");
        assert!(!row.live);
        assert!(row.is_from_cms);
    }

    #[test]
    fn news_summary_omits_missing_fields() {
        let mut entry = Entry::new(4, Locale::En, Section::News, "story");
        entry.fields = EntryFields::News(NewsFields {
            article_title: Some("Big news".into()),
            ..Default::default()
        });

        let json = serde_json::to_value(news_summary(&entry)).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Big news"}));
    }
}
