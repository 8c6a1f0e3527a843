// ABOUTME: Environment-based configuration for the TripXplo AI service
// ABOUTME: Validates required credentials at startup and provides a secret-masking summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! Environment-only configuration. There are no config files: every
//! setting comes from the process environment, and startup fails fast
//! when a required credential is absent.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Human-facing service name
pub const APP_NAME: &str = "TripXplo AI";

/// Default port for the HTTP server
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Fixed base of the TripXplo admin API
pub const DEFAULT_API_BASE: &str = "https://api.tripxplo.com/v1/api";

/// OpenRouter's OpenAI-compatible API base
pub const DEFAULT_CHAT_BASE: &str = "https://openrouter.ai/api/v1";

/// Chat model used for response formatting
pub const DEFAULT_CHAT_MODEL: &str = "deepseek/deepseek-chat";

/// Credentials and endpoint for the TripXplo admin API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// API base URL (overridable for tests via `TRIPXPLO_API_BASE`)
    pub base_url: String,
    /// Login email
    pub email: String,
    /// Login password
    pub password: String,
}

/// Endpoint and credential for the chat completion service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Chat API base URL (overridable via `OPENROUTER_BASE_URL`)
    pub base_url: String,
    /// OpenRouter API key
    pub api_key: String,
    /// Model identifier sent with every completion request
    pub model: String,
}

/// Complete server configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Allowed CORS origins; `["*"]` permits any origin
    pub allowed_origins: Vec<String>,
    /// Upstream travel API settings
    pub upstream: UpstreamConfig,
    /// Chat completion settings
    pub chat: ChatConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when `TRIPXPLO_EMAIL`, `TRIPXPLO_PASSWORD`,
    /// or `OPENROUTER_API_KEY` is unset, and `ConfigError` when
    /// `HTTP_PORT` is not a valid port number.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("HTTP_PORT is not a valid port: {raw}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_owned())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| vec!["*".to_owned()]);

        Ok(Self {
            http_port,
            allowed_origins,
            upstream: UpstreamConfig {
                base_url: env::var("TRIPXPLO_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_API_BASE.to_owned()),
                email: required_var("TRIPXPLO_EMAIL")?,
                password: required_var("TRIPXPLO_PASSWORD")?,
            },
            chat: ChatConfig {
                base_url: env::var("OPENROUTER_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_CHAT_BASE.to_owned()),
                api_key: required_var("OPENROUTER_API_KEY")?,
                model: env::var("OPENROUTER_MODEL")
                    .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_owned()),
            },
        })
    }

    /// One-line startup summary with secrets masked
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} upstream={} chat={} model={} api_key={}... origins={:?}",
            self.http_port,
            self.upstream.base_url,
            self.chat.base_url,
            self.chat.model,
            mask(&self.chat.api_key),
            self.allowed_origins,
        )
    }
}

fn required_var(name: &str) -> AppResult<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::config_missing(name))
}

/// First 8 characters of a secret, for log lines
fn mask(secret: &str) -> String {
    secret.chars().take(8).collect()
}
