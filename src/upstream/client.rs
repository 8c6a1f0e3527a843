// ABOUTME: Authenticated client for the TripXplo admin API data endpoints
// ABOUTME: Absorbs fetch failures into empty results; only auth failures propagate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! Data-fetch operations against the TripXplo admin API.
//!
//! Every operation attaches `Authorization: Bearer <token>` from the
//! embedded [`TokenCache`]. Transport faults and non-2xx responses are
//! logged and absorbed: list operations return an empty `Vec`, detail
//! operations an empty map. Callers therefore cannot distinguish "no
//! matches" from "upstream down" — a documented property of the service,
//! not an accident.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::{debug, error};

use super::token::TokenCache;
use super::shared_client;
use crate::config::UpstreamConfig;
use crate::errors::AppError;
use crate::models::PricingQuery;

/// Data-source seam consumed by the orchestrator and route handlers.
///
/// The production implementation is [`TripXploClient`]; tests substitute
/// scripted stubs.
#[async_trait]
pub trait TravelApi: Send + Sync {
    /// List packages with pagination and optional free-text search.
    async fn packages(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> Result<Vec<Value>, AppError>;

    /// Fetch one package's detail map by id.
    async fn package_details(&self, package_id: &str) -> Result<Value, AppError>;

    /// Compute pricing for a package given date and occupancy parameters.
    async fn package_pricing(
        &self,
        package_id: &str,
        params: &PricingQuery,
    ) -> Result<Value, AppError>;

    /// List hotels available for `filter_term`.
    ///
    /// The upstream path slot is documented as a package id, but callers
    /// on the conversational path pass an extracted destination term —
    /// an inherited mismatch surfaced here by the parameter name.
    async fn available_hotels(&self, filter_term: &str) -> Result<Vec<Value>, AppError>;

    /// List vehicles available for `filter_term` (see [`Self::available_hotels`]).
    async fn available_vehicles(&self, filter_term: &str) -> Result<Vec<Value>, AppError>;

    /// List activities available for `filter_term` (see [`Self::available_hotels`]).
    async fn available_activities(&self, filter_term: &str) -> Result<Vec<Value>, AppError>;

    /// List interest categories.
    async fn interests(&self) -> Result<Vec<Value>, AppError>;

    /// Search destinations by free text.
    async fn search_destinations(&self, search: &str) -> Result<Vec<Value>, AppError>;
}

/// Client for the TripXplo admin API
pub struct TripXploClient {
    http: Client,
    config: UpstreamConfig,
    token: TokenCache,
}

impl TripXploClient {
    /// Build a client around the shared pooled HTTP client.
    #[must_use]
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            http: shared_client().clone(),
            config,
            token: TokenCache::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Acquire a bearer token; auth failure is the one error that escapes
    /// this client.
    async fn bearer(&self) -> Result<String, AppError> {
        self.token.bearer(&self.http, &self.config).await
    }

    /// Send a request and absorb any fetch failure into `None`, logging it.
    async fn absorb(what: &str, request: reqwest::RequestBuilder) -> Option<Value> {
        match request.send().await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    error!("Error fetching {what}: upstream returned {status}");
                    return None;
                }
                match response.json::<Value>().await {
                    Ok(body) => Some(body),
                    Err(e) => {
                        error!("Error fetching {what}: unreadable body: {e}");
                        None
                    }
                }
            }
            Err(e) => {
                error!("Error fetching {what}: {e}");
                None
            }
        }
    }

    /// Authenticated GET returning the parsed body, or `None` when absorbed.
    async fn get_absorbed(
        &self,
        what: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<Value>, AppError> {
        let token = self.bearer().await?;
        let request = self
            .http
            .get(self.endpoint(path))
            .header("Authorization", format!("Bearer {token}"))
            .query(query);
        Ok(Self::absorb(what, request).await)
    }
}

/// Pull `result.docs` out of a paginated listing body.
fn result_docs(body: Option<Value>) -> Vec<Value> {
    body.and_then(|mut v| v.get_mut("result")?.get_mut("docs")?.as_array_mut().map(std::mem::take))
        .unwrap_or_default()
}

/// Pull the `result` array out of a listing body.
fn result_array(body: Option<Value>) -> Vec<Value> {
    body.and_then(|mut v| v.get_mut("result")?.as_array_mut().map(std::mem::take))
        .unwrap_or_default()
}

/// Pull the `result` map out of a detail body, degrading to an empty map.
fn result_object(body: Option<Value>) -> Value {
    body.and_then(|mut v| {
        let result = v.get_mut("result")?;
        result.is_object().then(|| result.take())
    })
    .unwrap_or_else(|| Value::Object(Map::new()))
}

#[async_trait]
impl TravelApi for TripXploClient {
    async fn packages(
        &self,
        limit: u32,
        offset: u32,
        search: Option<&str>,
    ) -> Result<Vec<Value>, AppError> {
        let mut query = vec![
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
        ];
        if let Some(search) = search {
            query.push(("search", search.to_owned()));
        }

        let body = self.get_absorbed("packages", "admin/package", &query).await?;
        let packages = result_docs(body);
        debug!("Fetched {} packages", packages.len());
        Ok(packages)
    }

    async fn package_details(&self, package_id: &str) -> Result<Value, AppError> {
        let body = self
            .get_absorbed(
                "package details",
                &format!("admin/package/{package_id}"),
                &[],
            )
            .await?;
        Ok(result_object(body))
    }

    async fn package_pricing(
        &self,
        package_id: &str,
        params: &PricingQuery,
    ) -> Result<Value, AppError> {
        let token = self.bearer().await?;
        let request = self
            .http
            .post(self.endpoint(&format!("admin/package/{package_id}/pricing")))
            .header("Authorization", format!("Bearer {token}"))
            .json(params);

        let body = Self::absorb("package pricing", request).await;
        Ok(result_object(body))
    }

    async fn available_hotels(&self, filter_term: &str) -> Result<Vec<Value>, AppError> {
        let body = self
            .get_absorbed(
                "hotels",
                &format!("admin/package/{filter_term}/available/get"),
                &[],
            )
            .await?;
        let hotels = result_array(body);
        debug!("Fetched {} hotels for '{filter_term}'", hotels.len());
        Ok(hotels)
    }

    async fn available_vehicles(&self, filter_term: &str) -> Result<Vec<Value>, AppError> {
        let body = self
            .get_absorbed(
                "vehicles",
                &format!("admin/package/{filter_term}/vehicle/get"),
                &[],
            )
            .await?;
        let vehicles = result_array(body);
        debug!("Fetched {} vehicles for '{filter_term}'", vehicles.len());
        Ok(vehicles)
    }

    async fn available_activities(&self, filter_term: &str) -> Result<Vec<Value>, AppError> {
        let body = self
            .get_absorbed(
                "activities",
                &format!("admin/package/{filter_term}/activity/get"),
                &[],
            )
            .await?;
        let activities = result_array(body);
        debug!("Fetched {} activities for '{filter_term}'", activities.len());
        Ok(activities)
    }

    async fn interests(&self) -> Result<Vec<Value>, AppError> {
        let body = self
            .get_absorbed("interests", "admin/package/interest/get", &[])
            .await?;
        Ok(result_array(body))
    }

    async fn search_destinations(&self, search: &str) -> Result<Vec<Value>, AppError> {
        let query = if search.is_empty() {
            Vec::new()
        } else {
            vec![("search", search.to_owned())]
        };
        let body = self
            .get_absorbed("destinations", "admin/package/destination/search", &query)
            .await?;
        Ok(result_array(body))
    }
}
