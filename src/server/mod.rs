//! HTTP surface: the page plus the read-only scenario API.
//!
//! | Route | Response |
//! |---|---|
//! | `GET /` | the page |
//! | `GET /api/scenario` | a random scenario |
//! | `GET /api/scenarios` | `{"count": n, "scenarios": [...]}` |
//! | `GET /api/scenario/{n}` | scenario `n`, 1-based |

mod error;
mod handlers;
mod page;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::scenario::ScenarioStore;

pub use error::ApiError;
pub use page::{Page, PageError};

/// Shared, immutable state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ScenarioStore>,
    pub page: Arc<Page>,
}

impl AppState {
    pub fn new(store: ScenarioStore, page: Page) -> Self {
        Self {
            store: Arc::new(store),
            page: Arc::new(page),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/api/scenario", get(handlers::random_scenario))
        .route("/api/scenarios", get(handlers::list_scenarios))
        .route("/api/scenario/:index", get(handlers::scenario_by_index))
        .fallback(handlers::fallback)
        .with_state(state)
        .layer(request_timeout_layer(request_timeout))
        .layer(TraceLayer::new_for_http())
}

/// Requests still running after `timeout` are answered with 408.
fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
