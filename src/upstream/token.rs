// ABOUTME: Bearer-token cache for the TripXplo admin API
// ABOUTME: One cached credential with a fixed one-hour lifetime, refresh serialized by a mutex
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! Token caching. The upstream issues a JWT on `PUT /admin/auth/login`;
//! the credential is reused until 3600 seconds after issuance, then
//! re-fetched. Refresh happens while holding the cache lock, so
//! concurrent expiries collapse into a single upstream login instead of
//! a login storm.

use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::UpstreamConfig;
use crate::errors::AppError;

/// Token lifetime from issuance; expiry is the only invalidation trigger
const TOKEN_TTL_SECS: i64 = 3600;

/// A cached credential and the instant it stops being valid
#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn new(value: String, issued_at: DateTime<Utc>) -> Self {
        Self {
            value,
            expires_at: issued_at + Duration::seconds(TOKEN_TTL_SECS),
        }
    }

    fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Wire shape of the login response
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
}

/// Single-slot bearer-token cache
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    /// Empty cache; the first [`Self::bearer`] call performs a login
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a valid bearer token, logging in when the cached one is
    /// absent or expired.
    ///
    /// The lock is held across the login call: N concurrent callers with
    /// an expired cache issue exactly one login.
    ///
    /// # Errors
    ///
    /// Returns `ExternalAuthFailed` when the login request fails, returns
    /// non-2xx, or carries no `accessToken` field. Invalid credentials
    /// and transient network faults are indistinguishable here.
    pub async fn bearer(&self, http: &Client, config: &UpstreamConfig) -> Result<String, AppError> {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.is_valid_at(Utc::now()) {
                debug!("Using cached upstream token");
                return Ok(cached.value.clone());
            }
        }

        info!("Fetching new token from TripXplo API");
        let value = login(http, config).await?;
        let cached = CachedToken::new(value.clone(), Utc::now());
        *slot = Some(cached);
        Ok(value)
    }
}

async fn login(http: &Client, config: &UpstreamConfig) -> Result<String, AppError> {
    let response = http
        .put(format!("{}/admin/auth/login", config.base_url))
        .json(&serde_json::json!({
            "email": config.email,
            "password": config.password,
        }))
        .send()
        .await
        .map_err(|e| AppError::auth_failed(format!("login request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::auth_failed(format!(
            "login rejected with status {status}"
        )));
    }

    let body: LoginResponse = response
        .json()
        .await
        .map_err(|e| AppError::auth_failed(format!("login response unreadable: {e}")))?;

    body.access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::auth_failed("login response contained no accessToken"))
}
