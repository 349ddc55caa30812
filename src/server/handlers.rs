//! Request handlers.

use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse, Json, Response};

use super::error::ApiError;
use super::AppState;
use crate::scenario::ScenarioError;

/// Prefix of the by-index route; anything under it that the router could not
/// match is a malformed index rather than an unknown page.
const SCENARIO_BY_INDEX_PREFIX: &str = "/api/scenario/";

pub async fn home(State(state): State<AppState>) -> Result<Response, ApiError> {
    let markup = state.page.render().await?;
    Ok(Html(markup).into_response())
}

pub async fn random_scenario(State(state): State<AppState>) -> Result<Response, ApiError> {
    let scenario = state.store.random()?;
    Ok(Json(scenario).into_response())
}

pub async fn list_scenarios(State(state): State<AppState>) -> Response {
    Json(state.store.list()).into_response()
}

pub async fn scenario_by_index(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Result<Response, ApiError> {
    let scenario = state.store.by_index_str(&index)?;
    Ok(Json(scenario).into_response())
}

/// Every other path serves the page, except malformed scenario indices.
pub async fn fallback(state: State<AppState>, uri: Uri) -> Result<Response, ApiError> {
    if let Some(rest) = uri.path().strip_prefix(SCENARIO_BY_INDEX_PREFIX) {
        return Err(ScenarioError::InvalidIndex {
            input: rest.to_string(),
        }
        .into());
    }
    home(state).await
}
