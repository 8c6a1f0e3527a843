// ABOUTME: OpenRouter LLM provider sending completions to DeepSeek
// ABOUTME: Uses the OpenAI-compatible chat completions API with bounded timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! # OpenRouter Provider
//!
//! Implementation of [`LlmProvider`] for OpenRouter's hosted completion
//! service, used here to reach `deepseek/deepseek-chat`.
//!
//! ## Configuration
//!
//! Set `OPENROUTER_API_KEY` with a key from <https://openrouter.ai/keys>.
//! `OPENROUTER_BASE_URL` and `OPENROUTER_MODEL` are optional overrides.

use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider};
use crate::config::{ChatConfig, DEFAULT_CHAT_BASE, DEFAULT_CHAT_MODEL};
use crate::errors::AppError;

/// Environment variable for the OpenRouter API key
const OPENROUTER_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Service name used in error messages
const SERVICE: &str = "DeepSeek";

/// Request timeout for completion calls
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Connect timeout for completion calls
const CONNECT_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// API Request/Response Types (OpenAI-compatible format)
// ============================================================================

/// OpenRouter request structure
#[derive(Debug, Serialize)]
struct OpenRouterRequest {
    model: String,
    messages: Vec<OpenRouterMessage>,
}

/// Message structure for the OpenRouter API
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenRouterMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for OpenRouterMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// OpenRouter response structure
#[derive(Debug, Deserialize)]
struct OpenRouterResponse {
    choices: Vec<OpenRouterChoice>,
    #[serde(default)]
    model: Option<String>,
}

/// Choice in an OpenRouter response
#[derive(Debug, Deserialize)]
struct OpenRouterChoice {
    message: OpenRouterResponseMessage,
}

/// Message in an OpenRouter response
#[derive(Debug, Deserialize)]
struct OpenRouterResponseMessage {
    content: Option<String>,
}

/// OpenRouter API error response
#[derive(Debug, Deserialize)]
struct OpenRouterErrorResponse {
    error: OpenRouterErrorDetail,
}

/// Error detail structure
#[derive(Debug, Deserialize)]
struct OpenRouterErrorDetail {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// OpenRouter chat completion provider
pub struct OpenRouterProvider {
    client: Client,
    config: ChatConfig,
}

impl OpenRouterProvider {
    /// Create a provider with explicit configuration
    #[must_use]
    pub fn new(config: ChatConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Create a provider from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a config error when `OPENROUTER_API_KEY` is not set.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var(OPENROUTER_API_KEY_ENV).map_err(|_| {
            AppError::config(format!(
                "Missing {OPENROUTER_API_KEY_ENV} environment variable. Get a key from https://openrouter.ai/keys"
            ))
        })?;

        Ok(Self::new(ChatConfig {
            base_url: std::env::var("OPENROUTER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CHAT_BASE.to_owned()),
            api_key,
            model: std::env::var("OPENROUTER_MODEL")
                .unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_owned()),
        }))
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Parse an error body from the OpenRouter API
    fn parse_error_response(status: reqwest::StatusCode, body: &str) -> AppError {
        if let Ok(error_response) = serde_json::from_str::<OpenRouterErrorResponse>(body) {
            AppError::external_service(
                SERVICE,
                format!("API error ({status}): {}", error_response.error.message),
            )
        } else {
            AppError::external_service(
                SERVICE,
                format!(
                    "API error ({status}): {}",
                    body.chars().take(200).collect::<String>()
                ),
            )
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for OpenRouterProvider {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    fn default_model(&self) -> &'static str {
        DEFAULT_CHAT_MODEL
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| self.config.model.clone());

        debug!("Sending chat completion request to OpenRouter, model {model}");

        let body = OpenRouterRequest {
            model: model.clone(),
            messages: request.messages.iter().map(OpenRouterMessage::from).collect(),
        };

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to OpenRouter: {e}");
                AppError::external_service(SERVICE, format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("Failed to read OpenRouter response: {e}");
            AppError::external_service(SERVICE, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &text));
        }

        let parsed: OpenRouterResponse = serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse OpenRouter response: {e}");
            AppError::external_service(SERVICE, format!("Failed to parse response: {e}"))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE, "API returned no choices"))?;

        // Absent content degrades to an empty reply, not an error
        let content = choice.message.content.unwrap_or_default();

        debug!("Received response from OpenRouter: {} chars", content.len());

        Ok(ChatResponse {
            content,
            model: parsed.model.unwrap_or(model),
        })
    }
}
