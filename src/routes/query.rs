// ABOUTME: The conversational endpoint: POST /query runs the orchestrator
// ABOUTME: Failures surface in the response body's error field, mirroring the frontend contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use super::AppState;
use crate::agent::{AgentState, QueryAgent};
use crate::models::{QueryRequest, QueryResponse};

/// Routes owned by this module
pub fn routes() -> Router<AppState> {
    Router::new().route("/query", post(run_query))
}

/// Run one question through the orchestrator.
///
/// The response always carries HTTP 200: processing failures (in
/// practice, upstream auth failures) are reported in the body's `error`
/// field with an empty `response`, which is the contract the frontend
/// consumes.
async fn run_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Json<QueryResponse> {
    info!("Received query ({} chars)", request.question.len());

    let agent = QueryAgent::new(state.api.clone(), state.llm.clone());
    let conversation = AgentState::from_question(request.question);

    match agent.run(conversation).await {
        Ok(finished) => {
            let reply = finished.latest_reply().unwrap_or_default().to_owned();
            Json(QueryResponse::ok(reply))
        }
        Err(e) => {
            error!("Error during query processing: {e}");
            Json(QueryResponse::failed(format!("Error: {e}")))
        }
    }
}
