// ABOUTME: LLM provider abstraction for chat completion
// ABOUTME: Defines role-based message types and the provider contract used by the orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! # LLM Provider Interface
//!
//! The orchestrator talks to the chat endpoint through the [`LlmProvider`]
//! trait so tests can substitute a scripted provider. The production
//! implementation is [`OpenRouterProvider`], which sends completions to
//! DeepSeek through OpenRouter's OpenAI-compatible API.
//!
//! Failures are `Result`-typed; the orchestrator is the one caller and
//! chooses to inline them as reply text rather than fail the request.

mod openrouter;
pub mod prompts;

pub use openrouter::OpenRouterProvider;

use crate::errors::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// End-user message
    User,
    /// Model reply
    Assistant,
}

impl MessageRole {
    /// Wire representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// Role-tagged conversation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author role
    pub role: MessageRole,
    /// Text content
    pub content: String,
}

impl ChatMessage {
    /// Build a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Build an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Chat completion request
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Conversation messages, oldest first
    pub messages: Vec<ChatMessage>,
    /// Model override; providers use their default when `None`
    pub model: Option<String>,
}

impl ChatRequest {
    /// Request with the provider's default model
    #[must_use]
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
        }
    }
}

/// Chat completion response
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Reply text; empty when the endpoint returned no content field
    pub content: String,
    /// Model that produced the reply
    pub model: String,
}

/// Contract for chat completion providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short provider identifier for logs
    fn name(&self) -> &'static str;

    /// Model used when a request carries no override
    fn default_model(&self) -> &'static str;

    /// Send one completion request and return the first choice's text.
    ///
    /// # Errors
    ///
    /// Returns an `ExternalServiceError` on transport faults, non-2xx
    /// responses, or an empty choice list.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}
