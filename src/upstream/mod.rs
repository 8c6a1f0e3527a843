// ABOUTME: TripXplo admin API integration: shared HTTP client, token cache, data client
// ABOUTME: All authenticated calls go through a pooled reqwest client with bounded timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! # Upstream Integration
//!
//! [`TripXploClient`] implements [`TravelApi`], the seam the orchestrator
//! and route handlers depend on. Data-fetch failures are absorbed into
//! empty results (logged, never propagated); only token acquisition
//! failures surface, since no request can succeed without a credential.

mod client;
mod token;

pub use client::{TravelApi, TripXploClient};
pub use token::TokenCache;

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Request timeout for upstream calls
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection timeout for upstream calls
const CONNECT_TIMEOUT_SECS: u64 = 10;

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Pooled HTTP client shared by all upstream calls.
///
/// Constructed lazily on first use; every request carries the bounded
/// request and connect timeouts above so a stalled upstream cannot hang
/// a request indefinitely.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
