//! Funding programme projections.
//!
//! The v1 endpoints render the programme from its last `fundingProgrammeBlock`
//! (the "matrix" view). The v2 endpoints use the flat programme fields.

use chrono::{DateTime, Utc};
use entries::{
    Choice, Entry, EntryId, EntryStatus, FundingProgrammeFields, HeroImage, Locale, ProgrammeBlock,
};
use images::{HeroImageUrls, TransformSpec};
use serde::Serialize;
use tracing::debug;

use crate::common::{common_fields, legacy_hero, CommonFields};
use crate::context::TransformContext;
use crate::error::{TransformError, TransformResult};
use crate::summaries::{case_study_summaries, CaseStudySummary};

/// A translated dropdown value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceSummary {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FundingRange {
    pub minimum: u64,
    pub maximum: u64,
}

/// v1 programme summary, built from the last programme block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<ChoiceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_size: Option<FundingRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_size_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_available: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingProgrammeListItem {
    pub id: EntryId,
    pub status: EntryStatus,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ProgrammeSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// v1 programme detail page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingProgrammeDetail {
    pub id: EntryId,
    pub available_languages: Vec<Locale>,
    pub status: EntryStatus,
    pub date_updated: DateTime<Utc>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroImageUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProgrammeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    pub content_sections: Vec<RegionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_studies: Option<Vec<CaseStudySummary>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingSize {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_available: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Extra fields of the single-programme view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeDetailFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    pub content_sections: Vec<RegionSummary>,
    pub project_stories: Vec<CaseStudySummary>,
}

/// v2 programme record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammeRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    pub is_archived: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_new: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_image_new: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<ChoiceSummary>,
    pub funding_size: FundingSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_path: Option<String>,
    #[serde(flatten)]
    pub detail: Option<ProgrammeDetailFields>,
}

fn thumbnail_spec() -> TransformSpec {
    TransformSpec::new().width(100).height(100).crop("faces")
}

/// 5:2 trail image.
fn trail_spec() -> TransformSpec {
    TransformSpec::new().width(360).height(144).crop("faces")
}

fn translated_choice(ctx: &TransformContext<'_>, choice: &Choice) -> ChoiceSummary {
    ChoiceSummary {
        label: ctx.translate(&choice.label),
        value: choice.value.clone(),
    }
}

fn medium_image(
    ctx: &TransformContext<'_>,
    hero: Option<&HeroImage>,
    spec: &TransformSpec,
) -> Option<String> {
    ctx.images
        .build_asset(hero.and_then(|h| h.image_medium.as_ref()), spec)
}

fn region_summaries(fields: &FundingProgrammeFields) -> Vec<RegionSummary> {
    fields
        .programme_regions
        .iter()
        .map(|region| RegionSummary {
            title: region.title.clone(),
            body: region.body.clone(),
        })
        .collect()
}

/// Summary of the programme's last programme block, or `None` without one.
///
/// `linkUrl` points at the CMS page when the entry uses the new content
/// model, otherwise at the editor-supplied link.
pub fn programme_summary(
    ctx: &TransformContext<'_>,
    entry: &Entry,
    use_new_content: bool,
) -> Option<ProgrammeSummary> {
    let block: &ProgrammeBlock = entry.programme_fields()?.funding_programme.last()?;

    let link_url = if use_new_content {
        Some(ctx.link_for(entry.uri()))
    } else {
        block.link_url.clone()
    };

    let photo = match block.photo.as_ref() {
        Some(photo) => Some(ctx.images.build(&photo.url, &thumbnail_spec())),
        None => medium_image(ctx, entry.hero_image.as_ref(), &thumbnail_spec()),
    };

    let organisation_types: Vec<String> = block
        .organisation_type
        .iter()
        .map(|choice| ctx.translate(&choice.label))
        .collect();

    let funding_size = match (block.minimum_funding_size, block.maximum_funding_size) {
        (Some(minimum), Some(maximum)) if minimum > 0 && maximum > 0 => {
            Some(FundingRange { minimum, maximum })
        }
        _ => None,
    };

    Some(ProgrammeSummary {
        title: block.programme_title.clone(),
        link_url,
        photo,
        organisation_types: (!organisation_types.is_empty()).then_some(organisation_types),
        description: block.description.clone().filter(|d| !d.is_empty()),
        area: block.area.as_ref().map(|area| translated_choice(ctx, area)),
        funding_size,
        funding_size_description: block.funding_size_description.clone().filter(|d| !d.is_empty()),
        total_available: block.total_available.clone().filter(|t| !t.is_empty()),
        application_deadline: block.application_deadline.clone().filter(|d| !d.is_empty()),
    })
}

pub fn funding_programme_list_item(
    ctx: &TransformContext<'_>,
    entry: &Entry,
) -> FundingProgrammeListItem {
    let use_new_content = entry
        .programme_fields()
        .is_some_and(|fields| fields.use_new_content);

    FundingProgrammeListItem {
        id: entry.id,
        status: entry.status,
        title: entry.title.clone(),
        url: entry.url.clone(),
        url_path: entry.uri.clone(),
        content: programme_summary(ctx, entry, use_new_content),
    }
}

/// v1 programme detail. Programmes still on the old content model are not
/// served and yield [`TransformError::NotFound`].
pub fn funding_programme_detail(
    ctx: &TransformContext<'_>,
    entry: Entry,
) -> TransformResult<FundingProgrammeDetail> {
    let resolved = ctx.resolve(entry)?;
    let entry = &resolved.entry;

    let fields = match entry.programme_fields() {
        Some(fields) if fields.use_new_content => fields,
        _ => {
            debug!(entry_id = entry.id, "programme_uses_old_content");
            return Err(TransformError::not_found("Programme not found"));
        }
    };

    let case_studies = if fields.related_case_studies.is_empty() {
        None
    } else {
        Some(case_study_summaries(ctx, &fields.related_case_studies)?).filter(|s| !s.is_empty())
    };

    Ok(FundingProgrammeDetail {
        id: entry.id,
        available_languages: ctx.available_locales(entry.id)?,
        status: resolved.status,
        date_updated: entry.date_updated,
        title: entry.title.clone(),
        url: entry.url.clone(),
        path: entry.uri.clone(),
        hero: legacy_hero(ctx, entry),
        summary: programme_summary(ctx, entry, true),
        intro: fields.programme_intro.clone(),
        content_sections: region_summaries(fields),
        case_studies,
    })
}

/// v2 programme record. `is_single` adds heroes and the page content.
pub fn transform_programme(
    ctx: &TransformContext<'_>,
    entry: Entry,
    is_single: bool,
) -> TransformResult<ProgrammeRecord> {
    let resolved = ctx.resolve(entry)?;
    let common = common_fields(ctx, &resolved, is_single)?;
    let entry = &resolved.entry;

    let empty = FundingProgrammeFields::default();
    let fields = entry.programme_fields().unwrap_or(&empty);

    let detail = if is_single {
        Some(ProgrammeDetailFields {
            footer: fields.outro_text.clone(),
            content_sections: region_summaries(fields),
            project_stories: case_study_summaries(ctx, &fields.related_project_stories)?,
        })
    } else {
        None
    };

    Ok(ProgrammeRecord {
        is_archived: resolved.status == EntryStatus::Expired && fields.legacy_path.is_some(),
        description: fields.programme_intro.clone(),
        thumbnail: medium_image(ctx, entry.hero_image.as_ref(), &thumbnail_spec()),
        thumbnail_new: medium_image(ctx, entry.hero_block_image(), &thumbnail_spec()),
        trail_image: medium_image(ctx, entry.hero_image.as_ref(), &trail_spec()),
        trail_image_new: medium_image(ctx, entry.hero_block_image(), &trail_spec()),
        area: fields
            .programme_area
            .as_ref()
            .map(|area| translated_choice(ctx, area)),
        funding_size: FundingSize {
            minimum: fields.minimum_funding_size.filter(|v| *v > 0),
            maximum: fields.maximum_funding_size.filter(|v| *v > 0),
            total_available: fields.total_funding_available.clone(),
            description: fields.funding_size_description.clone(),
        },
        application_deadline: fields.application_deadline.clone(),
        organisation_type: fields.organisation_type.clone(),
        legacy_path: fields.legacy_path.clone(),
        detail,
        common,
    })
}
