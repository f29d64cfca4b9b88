use chrono::{DateTime, Utc};
use entries::{Entry, EntryId, EntryStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyChoiceSummary {
    pub id: u64,
    pub title: String,
    pub allow_message: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRecord {
    pub id: EntryId,
    pub status: EntryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survey_path: Option<String>,
    pub date_created: DateTime<Utc>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub choices: Vec<SurveyChoiceSummary>,
    pub global: bool,
}

pub fn transform_survey(entry: &Entry) -> SurveyRecord {
    let fields = entry.survey_fields();
    SurveyRecord {
        id: entry.id,
        status: entry.status,
        survey_path: fields.and_then(|f| f.path.clone()),
        date_created: entry.date_created,
        title: entry.title.clone(),
        question: fields.and_then(|f| f.question.clone()),
        choices: fields
            .map(|f| {
                f.choices
                    .iter()
                    .map(|choice| SurveyChoiceSummary {
                        id: choice.id,
                        title: choice.choice_title.clone(),
                        allow_message: choice.allow_message,
                    })
                    .collect()
            })
            .unwrap_or_default(),
        global: fields.is_some_and(|f| f.global),
    }
}
