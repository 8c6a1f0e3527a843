// ABOUTME: Health check payloads for operational visibility
// ABOUTME: Reports service identity, status, and uptime; there are no stateful components to probe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! Health reporting. The service holds no database or queue, so the
//! check is a liveness signal with identity and uptime only.

use crate::config::APP_NAME;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is up and serving
    Healthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: HealthStatus,
    /// Service identity
    pub service: ServiceInfo,
    /// Seconds since the checker was created (process start)
    pub uptime_seconds: u64,
}

/// Service identity block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,
    /// Crate version
    pub version: String,
}

/// Tracks process start time for uptime reporting
#[derive(Debug, Clone, Copy)]
pub struct HealthChecker {
    start_time: Instant,
}

impl HealthChecker {
    /// Create a checker anchored at the current instant
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Produce the current health payload
    #[must_use]
    pub fn check(&self) -> HealthResponse {
        HealthResponse {
            status: HealthStatus::Healthy,
            service: ServiceInfo {
                name: APP_NAME.to_owned(),
                version: env!("CARGO_PKG_VERSION").to_owned(),
            },
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}
