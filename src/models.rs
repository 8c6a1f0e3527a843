// ABOUTME: Request and response DTOs for the HTTP surface
// ABOUTME: Upstream records stay loosely typed and pass through verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! Shared data transfer objects. Upstream package/hotel/vehicle/activity
//! records are deliberately NOT modeled as structs: the service passes
//! them through verbatim as `serde_json::Value` and reads display fields
//! with `"N/A"` defaults, degrading gracefully instead of rejecting
//! malformed records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Free-text user question
    pub question: String,
}

/// Response of `POST /query`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Assistant reply text; empty when `error` is set
    pub response: String,
    /// Error detail when query processing failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    /// Successful reply
    #[must_use]
    pub fn ok(response: String) -> Self {
        Self {
            response,
            error: None,
        }
    }

    /// Failed reply with an error detail and empty response text
    #[must_use]
    pub fn failed(error: String) -> Self {
        Self {
            response: String::new(),
            error: Some(error),
        }
    }
}

/// Pricing parameters, forwarded verbatim to the upstream pricing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingQuery {
    /// Travel start date, `YYYY-MM-DD`
    #[serde(rename = "startDate")]
    pub start_date: String,
    /// Number of adults
    #[serde(rename = "noAdult")]
    pub no_adult: u32,
    /// Number of children
    #[serde(rename = "noChild")]
    pub no_child: u32,
    /// Number of rooms
    #[serde(rename = "noRoomCount")]
    pub no_room_count: u32,
    /// Number of extra adults (defaults to 0)
    #[serde(rename = "noExtraAdult", default)]
    pub no_extra_adult: u32,
}

/// Response of `GET /packages`
#[derive(Debug, Serialize, Deserialize)]
pub struct PackagesResponse {
    /// Raw package records from the upstream API
    pub packages: Vec<Value>,
}

/// Response of `GET /packages/{id}/hotels`
#[derive(Debug, Serialize, Deserialize)]
pub struct HotelsResponse {
    /// Raw hotel records
    pub hotels: Vec<Value>,
}

/// Response of `GET /packages/{id}/vehicles`
#[derive(Debug, Serialize, Deserialize)]
pub struct VehiclesResponse {
    /// Raw vehicle records
    pub vehicles: Vec<Value>,
}

/// Response of `GET /packages/{id}/activities`
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivitiesResponse {
    /// Raw activity records
    pub activities: Vec<Value>,
}
