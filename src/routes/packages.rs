// ABOUTME: REST pass-through routes for packages, pricing, hotels, vehicles, and activities
// ABOUTME: Upstream records are forwarded verbatim; auth failures map to error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use tracing::info;

use super::AppState;
use crate::errors::AppError;
use crate::models::{
    ActivitiesResponse, HotelsResponse, PackagesResponse, PricingQuery, VehiclesResponse,
};

/// Page size for the unpaginated listing route
const LIST_LIMIT: u32 = 100;

/// Routes owned by this module
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/packages", get(list_packages))
        .route("/packages/:id", get(package_details))
        .route("/packages/:id/pricing", get(package_pricing))
        .route("/packages/:id/hotels", get(package_hotels))
        .route("/packages/:id/vehicles", get(package_vehicles))
        .route("/packages/:id/activities", get(package_activities))
}

async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<PackagesResponse>, AppError> {
    let packages = state.api.packages(LIST_LIMIT, 0, None).await?;
    info!("Listed {} packages", packages.len());
    Ok(Json(PackagesResponse { packages }))
}

async fn package_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let details = state.api.package_details(&id).await?;
    Ok(Json(details))
}

async fn package_pricing(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<PricingQuery>,
) -> Result<Json<Value>, AppError> {
    let pricing = state.api.package_pricing(&id, &params).await?;
    Ok(Json(pricing))
}

async fn package_hotels(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HotelsResponse>, AppError> {
    let hotels = state.api.available_hotels(&id).await?;
    Ok(Json(HotelsResponse { hotels }))
}

async fn package_vehicles(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VehiclesResponse>, AppError> {
    let vehicles = state.api.available_vehicles(&id).await?;
    Ok(Json(VehiclesResponse { vehicles }))
}

async fn package_activities(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActivitiesResponse>, AppError> {
    let activities = state.api.available_activities(&id).await?;
    Ok(Json(ActivitiesResponse { activities }))
}
