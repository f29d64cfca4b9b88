use crate::error::ServerResult;
use crate::routes::{parse_locale, render, ContentQuery};
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::Json;
use content_api::Endpoint;
use serde_json::Value;
use std::sync::Arc;

pub async fn funding_programmes(
    State(state): State<Arc<ServerState>>,
    Path(locale): Path<String>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::Programmes { locale }, &query)
}

pub async fn funding_programme(
    State(state): State<Arc<ServerState>>,
    Path((locale, slug)): Path<(String, String)>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::Programme { locale, slug }, &query)
}

pub async fn our_people(
    State(state): State<Arc<ServerState>>,
    Path(locale): Path<String>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::OurPeople { locale }, &query)
}

pub async fn research(
    State(state): State<Arc<ServerState>>,
    Path(locale): Path<String>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::Research { locale }, &query)
}

pub async fn research_document(
    State(state): State<Arc<ServerState>>,
    Path((locale, slug)): Path<(String, String)>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::ResearchDocument { locale, slug }, &query)
}

/// Updates of one type (`blog`, `press-releases`, ...), newest first
pub async fn updates(
    State(state): State<Arc<ServerState>>,
    Path((locale, update_type)): Path<(String, String)>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::Updates { locale, update_type }, &query)
}

pub async fn update(
    State(state): State<Arc<ServerState>>,
    Path((locale, update_type, slug)): Path<(String, String, String)>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(
        &state,
        Endpoint::Update {
            locale,
            update_type,
            slug,
        },
        &query,
    )
}
