//! Content-type specific field sets.
//!
//! Each CMS entry type has its own struct. Optional CMS fields are `Option`s
//! and multi-value fields default to empty, so a snapshot only needs to spell
//! out what an editor actually filled in.

use images::{Asset, HeroImage};
use serde::{Deserialize, Serialize};

use crate::model::{Category, Choice, Entry, EntryId, Tag};

/// Typed custom fields, tagged by content type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contentType", rename_all = "camelCase")]
pub enum EntryFields {
    /// No custom fields beyond the shared entry attributes.
    #[default]
    Plain,
    Homepage(HomepageFields),
    News(NewsFields),
    FundingProgramme(FundingProgrammeFields),
    Listing(ListingFields),
    CaseStudy(CaseStudyFields),
    Profile(ProfileFields),
    Survey(SurveyFields),
    People(PeopleFields),
    Research(ResearchFields),
    Update(UpdateFields),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomepageFields {
    pub hero_images: Vec<HeroImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsFields {
    pub article_title: Option<String>,
    pub article_summary: Option<String>,
    pub article_link: Option<String>,
    pub article_promoted: bool,
}

/// One `fundingProgrammeBlock` of the legacy programme matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgrammeBlock {
    pub programme_title: Option<String>,
    pub link_url: Option<String>,
    pub photo: Option<Asset>,
    pub organisation_type: Vec<Choice>,
    pub description: Option<String>,
    pub area: Option<Choice>,
    pub minimum_funding_size: Option<u64>,
    pub maximum_funding_size: Option<u64>,
    pub funding_size_description: Option<String>,
    pub total_available: Option<String>,
    pub application_deadline: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgrammeRegion {
    pub title: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundingProgrammeFields {
    /// Migration switch: the programme has been rebuilt on the new templates.
    pub use_new_content: bool,
    pub funding_programme: Vec<ProgrammeBlock>,
    pub programme_regions: Vec<ProgrammeRegion>,
    pub programme_intro: Option<String>,
    pub related_case_studies: Vec<EntryId>,
    pub related_project_stories: Vec<EntryId>,
    pub legacy_path: Option<String>,
    pub external_url: Option<String>,
    pub programme_area: Option<Choice>,
    pub minimum_funding_size: Option<u64>,
    pub maximum_funding_size: Option<u64>,
    pub total_funding_available: Option<String>,
    pub funding_size_description: Option<String>,
    pub application_deadline: Option<String>,
    pub organisation_type: Option<String>,
    pub outro_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Segment {
    pub segment_title: String,
    pub segment_content: Option<String>,
    pub segment_image: Option<Asset>,
}

/// A block of the flexible content builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FlexibleBlock {
    #[serde(rename_all = "camelCase")]
    ContentArea { content: String },
    #[serde(rename_all = "camelCase")]
    Inset { content: String },
    #[serde(rename_all = "camelCase")]
    Quote {
        quote_text: String,
        #[serde(default)]
        attribution: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        image: Asset,
        #[serde(default)]
        caption: Option<String>,
    },
    /// Placeholder for the page's own child list.
    ChildPageList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingFields {
    pub introduction_text: Option<String>,
    pub outro_text: Option<String>,
    pub content_segment: Vec<Segment>,
    pub related_content: Option<String>,
    pub related_case_studies: Vec<EntryId>,
    pub flexible_content: Vec<FlexibleBlock>,
    pub exclude_this_page_from_child_lists: bool,
    /// `linkItem` entries point at a document...
    pub document_link: Option<Asset>,
    /// ...or at an external site.
    pub external_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseStudyFields {
    pub case_study_link_url: Option<String>,
    pub case_study_trail_text: Option<String>,
    pub case_study_trail_text_more: Option<String>,
    pub case_study_grant_amount: Option<String>,
    pub case_study_grant_id: Option<String>,
    pub case_study_thumbnail_image: Option<Asset>,
    pub hero_image_credit: Option<String>,
    pub flexible_content: Vec<FlexibleBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileFields {
    pub profile_role: Option<String>,
    pub profile_photo: Option<Asset>,
    pub profile_bio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyChoice {
    pub id: u64,
    pub choice_title: String,
    pub allow_message: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyFields {
    /// Site path the survey is attached to.
    pub path: Option<String>,
    pub question: Option<String>,
    pub choices: Vec<SurveyChoice>,
    pub global: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub person_name: String,
    pub person_role: Option<String>,
    pub person_photo: Option<Asset>,
    pub person_bio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentFile {
    pub label: String,
    pub file: Asset,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentGroup {
    pub title: String,
    pub files: Vec<DocumentFile>,
    pub extra_content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeopleFields {
    pub people: Vec<Person>,
    pub document_groups: Vec<DocumentGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResearchFields {
    pub summary: Option<String>,
    /// Related funding programmes.
    pub programme: Vec<EntryId>,
    pub portfolio: Vec<Category>,
    pub partnership_name: Option<String>,
    pub document_type: Vec<Category>,
    pub document: Option<Asset>,
    pub publisher: Option<String>,
    pub document_tags: Vec<Tag>,
    pub related_insights_page: Option<EntryId>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateFields {
    pub article_promoted: bool,
    pub article_summary: Option<String>,
    /// Categories in authoring order; the last one is the primary category.
    pub category: Vec<Category>,
    pub authors: Vec<Tag>,
    pub tags: Vec<Tag>,
    pub flexible_content: Vec<FlexibleBlock>,
    pub press_release_contacts: Option<String>,
    pub press_release_notes_to_editors: Option<String>,
    pub document_groups: Vec<DocumentGroup>,
}

impl Entry {
    pub fn homepage_fields(&self) -> Option<&HomepageFields> {
        match &self.fields {
            EntryFields::Homepage(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn news_fields(&self) -> Option<&NewsFields> {
        match &self.fields {
            EntryFields::News(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn programme_fields(&self) -> Option<&FundingProgrammeFields> {
        match &self.fields {
            EntryFields::FundingProgramme(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn listing_fields(&self) -> Option<&ListingFields> {
        match &self.fields {
            EntryFields::Listing(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn case_study_fields(&self) -> Option<&CaseStudyFields> {
        match &self.fields {
            EntryFields::CaseStudy(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn profile_fields(&self) -> Option<&ProfileFields> {
        match &self.fields {
            EntryFields::Profile(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn survey_fields(&self) -> Option<&SurveyFields> {
        match &self.fields {
            EntryFields::Survey(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn people_fields(&self) -> Option<&PeopleFields> {
        match &self.fields {
            EntryFields::People(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn research_fields(&self) -> Option<&ResearchFields> {
        match &self.fields {
            EntryFields::Research(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn update_fields(&self) -> Option<&UpdateFields> {
        match &self.fields {
            EntryFields::Update(fields) => Some(fields),
            _ => None,
        }
    }

    /// Editor-supplied outbound link, for entry types that have one.
    pub fn external_url(&self) -> Option<&str> {
        let url = match &self.fields {
            EntryFields::FundingProgramme(fields) => fields.external_url.as_deref(),
            EntryFields::Listing(fields) => fields.external_url.as_deref(),
            _ => None,
        };
        url.filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_tagged_by_content_type() {
        let json = serde_json::json!({
            "contentType": "fundingProgramme",
            "useNewContent": true,
            "programmeIntro": "<p>Intro</p>",
            "programmeRegions": [{ "title": "England", "body": "<p>Body</p>" }]
        });

        let fields: EntryFields = serde_json::from_value(json).unwrap();
        let EntryFields::FundingProgramme(programme) = fields else {
            panic!("expected funding programme fields");
        };
        assert!(programme.use_new_content);
        assert_eq!(programme.programme_regions.len(), 1);
        assert!(programme.related_case_studies.is_empty());
    }

    #[test]
    fn flexible_blocks_deserialize() {
        let json = serde_json::json!([
            { "type": "contentArea", "content": "<p>Hi</p>" },
            { "type": "quote", "quoteText": "Brilliant" },
            { "type": "childPageList" }
        ]);

        let blocks: Vec<FlexibleBlock> = serde_json::from_value(json).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[2], FlexibleBlock::ChildPageList);
        assert!(matches!(
            &blocks[1],
            FlexibleBlock::Quote { attribution: None, .. }
        ));
    }
}
