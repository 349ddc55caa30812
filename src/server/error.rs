//! Mapping of request failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use super::page::PageError;
use crate::scenario::ScenarioError;

/// Any failure a handler can surface.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Page(#[from] PageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Scenario(ScenarioError::Empty) => StatusCode::NOT_FOUND,
            Self::Scenario(ScenarioError::InvalidIndex { .. }) => StatusCode::BAD_REQUEST,
            Self::Scenario(ScenarioError::IndexOutOfRange { .. }) => StatusCode::NOT_FOUND,
            Self::Page(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short client-facing message; never includes internal detail.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Scenario(ScenarioError::Empty) => "no scenarios available",
            Self::Scenario(ScenarioError::InvalidIndex { .. }) => "invalid scenario number",
            Self::Scenario(ScenarioError::IndexOutOfRange { .. }) => {
                "scenario number out of range"
            }
            Self::Page(_) => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, self.message()).into_response()
    }
}
