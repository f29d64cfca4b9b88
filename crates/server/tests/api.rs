//! Router-level tests: routing, headers and error bodies.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use content_api::{EntryStatus, ImageUrlBuilder, Locale, MemoryStore, Snapshot, Translator};
use entries::{
    Entry, EntryFields, FundingProgrammeFields, ListingFields, ProgrammeBlock, Revision,
    RevisionKind, Section,
};
use http_body_util::BodyExt;
use serde_json::Value;
use server::{build_router, ServerConfig, ServerState};
use tower::ServiceExt;

fn entry(id: u64, site: Locale, section: Section, uri: &str) -> Entry {
    let slug = uri.rsplit('/').next().unwrap_or(uri);
    let mut entry = Entry::new(id, site, section, slug);
    entry.uri = Some(uri.into());
    entry.level = uri.split('/').count() as u32;
    entry
}

fn programme(id: u64, slug: &str, use_new_content: bool) -> Entry {
    let mut entry = entry(
        id,
        Locale::En,
        Section::FundingProgrammes,
        &format!("funding/programmes/{slug}"),
    );
    entry.fields = EntryFields::FundingProgramme(FundingProgrammeFields {
        use_new_content,
        funding_programme: vec![ProgrammeBlock {
            programme_title: Some(slug.into()),
            ..Default::default()
        }],
        ..Default::default()
    });
    entry
}

fn app() -> Router {
    let mut contact = entry(2, Locale::En, Section::About, "about/contact-us");
    contact.parent_id = Some(1);
    contact.fields = EntryFields::Listing(ListingFields::default());

    let mut jobs = entry(3, Locale::En, Section::About, "about/jobs");
    jobs.parent_id = Some(1);
    let mut welsh_jobs = entry(3, Locale::Cy, Section::About, "about/jobs");
    welsh_jobs.parent_id = Some(1);

    let mut draft = contact.clone();
    draft.title = "Contact us (draft)".into();
    draft.status = EntryStatus::Disabled;

    let snapshot = Snapshot {
        entries: vec![
            entry(1, Locale::En, Section::About, "about"),
            contact,
            jobs,
            welsh_jobs,
            programme(10, "awards-for-all", true),
            programme(11, "reaching-communities", false),
        ],
        drafts: vec![Revision {
            revision_id: 900,
            entry_id: 2,
            site: Locale::En,
            kind: RevisionKind::Draft,
            entry: draft,
        }],
        versions: Vec::new(),
    };

    let state = ServerState::with_store(
        ServerConfig::default(),
        Arc::new(MemoryStore::new(snapshot)),
        ImageUrlBuilder::passthrough(),
        Translator::new(),
    );
    build_router(Arc::new(state))
}

async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

#[tokio::test]
async fn api_responses_carry_cache_and_cors_headers() {
    let (status, headers, _) = get("/api/v1/en/funding-programmes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["cache-control"], "public, max-age=0");
    assert!(headers.get("expires").is_none());
    assert!(headers.get("pragma").is_none());
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn ops_routes_skip_api_headers() {
    let (status, headers, body) = get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(headers.get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn unknown_locale_is_not_found() {
    let (status, _, body) = get("/api/v1/fr/funding-programmes").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unknown_route_falls_back_to_json_404() {
    let (status, headers, body) = get("/api/v3/en/anything").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(headers["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn old_content_programme_is_not_found() {
    let (status, _, body) = get("/api/v1/en/funding-programme/reaching-communities").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Programme not found");

    let (status, _, body) = get("/api/v1/en/funding-programme/awards-for-all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], "awards-for-all");
}

#[tokio::test]
async fn listing_reports_languages() {
    let (_, _, body) = get("/api/v1/en/listing?path=about/jobs").await;
    assert_eq!(body["data"][0]["availableLanguages"], serde_json::json!(["cy", "en"]));

    let (_, _, body) = get("/api/v1/en/listing?path=about/contact-us").await;
    assert_eq!(body["data"][0]["availableLanguages"], serde_json::json!(["en"]));
}

#[tokio::test]
async fn draft_query_previews_revision() {
    let (status, _, body) = get("/api/v1/en/listing?path=about/contact-us&draft=900").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["title"], "Contact us (draft)");
    assert_eq!(body["data"][0]["path"], "about/contact-us");
}

#[tokio::test]
async fn api_info_lists_routes() {
    let (status, _, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Content API");
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e == "/health"));
}

#[tokio::test]
async fn metrics_without_recorder_reports_uptime() {
    let (status, _, body) = get("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn malformed_page_is_bad_request() {
    let (status, headers, body) = get("/api/v1/en/funding-programmes?page=two").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(headers["cache-control"], "public, max-age=0");
}

#[tokio::test]
async fn profiles_with_unknown_section_are_not_found() {
    let (status, headers, body) = get("/api/v1/en/profiles/news").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        serde_json::json!({"error": {"code": "NOT_FOUND", "message": "Invalid section"}})
    );
    assert_eq!(headers["access-control-allow-origin"], "*");

    let (status, _, body) = get("/api/v1/en/profiles/boardMembers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], serde_json::json!([]));
}
