// ABOUTME: HTTP router assembly with CORS, tracing, and timeout layers
// ABOUTME: Holds the shared application state handed to every handler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! Route wiring. Handlers live in [`query`] and [`packages`]; this
//! module owns the shared state, the service banner, the health route,
//! and the middleware stack.

pub mod packages;
pub mod query;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::health::HealthChecker;
use crate::llm::LlmProvider;
use crate::upstream::TravelApi;

/// Whole-request timeout; generous because each request may chain an
/// upstream fetch and a chat completion
const REQUEST_TIMEOUT_SECS: u64 = 90;

/// Shared state available to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Travel data source
    pub api: Arc<dyn TravelApi>,
    /// Chat completion provider
    pub llm: Arc<dyn LlmProvider>,
    /// Uptime tracker for the health route
    pub health: HealthChecker,
}

impl AppState {
    /// Assemble state from the two service seams
    #[must_use]
    pub fn new(api: Arc<dyn TravelApi>, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            api,
            llm,
            health: HealthChecker::new(),
        }
    }
}

/// Build the full application router.
#[must_use]
pub fn router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(query::routes())
        .merge(packages::routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// CORS layer from the configured origin list; `"*"` permits any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().map_or_else(
                |_| {
                    warn!("Ignoring unparseable CORS origin '{origin}'");
                    None
                },
                Some,
            )
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Service banner matching the frontend's expectations
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "TripXplo AI API — POST /query with {'question': 'your query'}"
    }))
}

/// Liveness check
async fn health(State(state): State<AppState>) -> Json<crate::health::HealthResponse> {
    Json(state.health.check())
}
