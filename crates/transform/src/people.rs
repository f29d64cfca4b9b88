use entries::{Entry, PeopleFields};
use images::TransformSpec;
use serde::Serialize;

use crate::common::{common_fields, CommonFields};
use crate::content::{document_groups, DocumentGroupSummary};
use crate::context::TransformContext;
use crate::error::TransformResult;

/// Source images wider than this get the large layout.
const LARGE_IMAGE_WIDTH: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonImage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PersonImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleRecord {
    #[serde(flatten)]
    pub common: CommonFields,
    pub people: Vec<PersonSummary>,
    pub document_groups: Vec<DocumentGroupSummary>,
}

pub fn transform_people(ctx: &TransformContext<'_>, entry: Entry) -> TransformResult<PeopleRecord> {
    let resolved = ctx.resolve(entry)?;
    let common = common_fields(ctx, &resolved, false)?;

    let empty = PeopleFields::default();
    let fields = resolved.entry.people_fields().unwrap_or(&empty);
    let spec = TransformSpec::new().fit("crop").crop("entropy").max_width(1200);

    let people = fields
        .people
        .iter()
        .map(|person| PersonSummary {
            name: person.person_name.clone(),
            role: person.person_role.clone(),
            image: person.person_photo.as_ref().map(|photo| PersonImage {
                kind: if photo.width.unwrap_or_default() > LARGE_IMAGE_WIDTH {
                    "large"
                } else {
                    "small"
                },
                url: ctx.images.build(&photo.url, &spec),
            }),
            bio: person.person_bio.clone(),
        })
        .collect();

    Ok(PeopleRecord {
        common,
        people,
        document_groups: document_groups(&fields.document_groups),
    })
}
