// ABOUTME: Main library entry point for the TripXplo AI backend service
// ABOUTME: Proxies the TripXplo travel API and formats answers through an LLM chat endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

#![deny(unsafe_code)]

//! # TripXplo AI Server
//!
//! A thin backend service that answers free-text travel questions. Each
//! question is classified into an intent (hotel, vehicle, activity, or
//! package), enriched with matching records fetched from the TripXplo
//! admin API, and handed to a hosted LLM chat endpoint which turns the
//! structured data into a friendly reply.
//!
//! ## Architecture
//!
//! - **Upstream**: bearer-token client for the TripXplo admin API with a
//!   single cached, mutex-guarded login credential
//! - **Intent**: keyword-table classification and destination extraction
//! - **LLM**: OpenRouter chat-completion provider (DeepSeek) plus the
//!   prompt templates fed to it
//! - **Agent**: the single-pass conversation orchestrator
//! - **Routes**: axum HTTP surface consumed by the frontend
//!
//! ## Example
//!
//! ```rust,no_run
//! use tripxplo_ai::config::ServerConfig;
//! use tripxplo_ai::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("listening on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Conversation orchestrator: classify, fetch, prompt, complete
pub mod agent;

/// Environment-based service configuration
pub mod config;

/// Unified error handling with `AppError` and `ErrorCode`
pub mod errors;

/// Health check payloads
pub mod health;

/// Intent classification and destination term extraction
pub mod intent;

/// LLM provider abstraction, OpenRouter implementation, prompt templates
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Request/response DTOs shared by the HTTP surface
pub mod models;

/// HTTP route handlers and router assembly
pub mod routes;

/// TripXplo admin API client and bearer-token cache
pub mod upstream;
