use crate::error::ServerResult;
use crate::routes::{parse_locale, render, ContentQuery};
use crate::state::ServerState;
use axum::extract::{Path, Query, State};
use axum::Json;
use content_api::Endpoint;
use serde_json::Value;
use std::sync::Arc;

/// Every canonical CMS route
pub async fn list_routes(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    render(&state, Endpoint::ListRoutes, &query)
}

pub async fn homepage(
    State(state): State<Arc<ServerState>>,
    Path(locale): Path<String>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::Homepage { locale }, &query)
}

pub async fn promoted_news(
    State(state): State<Arc<ServerState>>,
    Path(locale): Path<String>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::PromotedNews { locale }, &query)
}

pub async fn funding_programmes(
    State(state): State<Arc<ServerState>>,
    Path(locale): Path<String>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::FundingProgrammes { locale }, &query)
}

/// Programme detail; 404 for programmes still on the old content model
pub async fn funding_programme(
    State(state): State<Arc<ServerState>>,
    Path((locale, slug)): Path<(String, String)>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::FundingProgramme { locale, slug }, &query)
}

/// Listing page at `?path=`, or all top-level pages
pub async fn listing(
    State(state): State<Arc<ServerState>>,
    Path(locale): Path<String>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    let path = query.path.clone();
    render(&state, Endpoint::Listing { locale, path }, &query)
}

pub async fn case_studies(
    State(state): State<Arc<ServerState>>,
    Path(locale): Path<String>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::CaseStudies { locale }, &query)
}

pub async fn profiles(
    State(state): State<Arc<ServerState>>,
    Path((locale, section)): Path<(String, String)>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    render(&state, Endpoint::Profiles { locale, section }, &query)
}

pub async fn surveys(
    State(state): State<Arc<ServerState>>,
    Path(locale): Path<String>,
    Query(query): Query<ContentQuery>,
) -> ServerResult<Json<Value>> {
    let locale = parse_locale(&locale)?;
    let all = query.show_all();
    render(&state, Endpoint::Surveys { locale, all }, &query)
}
