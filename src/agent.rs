// ABOUTME: Single-pass conversation orchestrator: classify, extract, fetch, prompt, complete
// ABOUTME: Appends exactly one assistant reply to the conversation per invocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! # Conversation Orchestrator
//!
//! One linear pass per question: the latest user message is classified
//! into an intent, destination terms are extracted, matching records are
//! fetched from the upstream API, a prompt is built, and the chat
//! endpoint formats the final reply. The only early exit is the
//! short-query clarification.
//!
//! Error policy at this boundary: upstream auth failures propagate (the
//! route layer turns them into an error response), while chat failures
//! are inlined as literal reply text so the conversation always gains an
//! assistant turn.

use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::errors::AppError;
use crate::intent::{classify, extract_search_terms, Intent};
use crate::llm::{prompts, ChatMessage, ChatRequest, LlmProvider, MessageRole};
use crate::upstream::TravelApi;

/// Queries shorter than this (after trimming) get a clarification reply
pub const MIN_QUERY_CHARS: usize = 5;

/// Page size for package listing fetches
const PACKAGE_PAGE_LIMIT: u32 = 100;

/// Reply for queries too short to act on
pub const CLARIFICATION_REPLY: &str = "Hi! Your query seems a bit short. Could you please \
     provide more details? For example, mention the destination, type of package, or any \
     preferences.";

/// Reply when no hotels matched
const NO_HOTELS_REPLY: &str = "Sorry, I couldn't find hotels matching your request. Would \
     you like me to suggest popular hotels instead?";

/// Reply when no vehicles matched
const NO_VEHICLES_REPLY: &str = "Sorry, I couldn't find vehicles matching your request. \
     Would you like me to suggest popular vehicles instead?";

/// Reply when no activities matched
const NO_ACTIVITIES_REPLY: &str = "Sorry, I couldn't find activities matching your request. \
     Would you like me to suggest popular activities instead?";

/// Ordered, append-only conversation state for one request
#[derive(Debug, Clone, Default)]
pub struct AgentState {
    /// Messages, oldest first
    pub messages: Vec<ChatMessage>,
}

impl AgentState {
    /// State seeded with a single user question
    #[must_use]
    pub fn from_question(question: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(question)],
        }
    }

    /// Content of the most recent user message, if any
    #[must_use]
    pub fn latest_user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role == MessageRole::User)
            .map(|message| message.content.as_str())
    }

    /// Content of the most recent assistant message, if any
    #[must_use]
    pub fn latest_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role == MessageRole::Assistant)
            .map(|message| message.content.as_str())
    }

    fn push_assistant(&mut self, content: String) {
        self.messages.push(ChatMessage::assistant(content));
    }
}

/// Orchestrator wiring the travel API and the chat provider together
pub struct QueryAgent {
    api: Arc<dyn TravelApi>,
    llm: Arc<dyn LlmProvider>,
}

impl QueryAgent {
    /// Build an agent over the given data source and chat provider
    #[must_use]
    pub fn new(api: Arc<dyn TravelApi>, llm: Arc<dyn LlmProvider>) -> Self {
        Self { api, llm }
    }

    /// Process the latest user message and append the assistant reply.
    ///
    /// # Errors
    ///
    /// Returns `ExternalAuthFailed` when the upstream login fails; all
    /// other failures degrade into reply text.
    #[instrument(skip(self, state))]
    pub async fn run(&self, mut state: AgentState) -> Result<AgentState, AppError> {
        let query = state
            .latest_user_message()
            .unwrap_or_default()
            .trim()
            .to_owned();
        info!("Received user query ({} chars)", query.len());

        if query.chars().count() < MIN_QUERY_CHARS {
            state.push_assistant(CLARIFICATION_REPLY.to_owned());
            return Ok(state);
        }

        let intent = classify(&query);
        let term = extract_search_terms(&query);
        info!("Detected intent '{intent}', search term '{term}'");

        let reply = match intent {
            Intent::Hotel => self.hotel_reply(&query, &term).await?,
            Intent::Vehicle => self.vehicle_reply(&query, &term).await?,
            Intent::Activity => self.activity_reply(&query, &term).await?,
            Intent::Package => self.package_reply(&query, &term).await?,
        };

        state.push_assistant(reply);
        Ok(state)
    }

    async fn hotel_reply(&self, query: &str, term: &str) -> Result<String, AppError> {
        let hotels = self.api.available_hotels(term).await?;
        if hotels.is_empty() {
            return Ok(NO_HOTELS_REPLY.to_owned());
        }
        Ok(self
            .complete_or_inline(prompts::hotel_prompt(query, &hotels))
            .await)
    }

    async fn vehicle_reply(&self, query: &str, term: &str) -> Result<String, AppError> {
        let vehicles = self.api.available_vehicles(term).await?;
        if vehicles.is_empty() {
            return Ok(NO_VEHICLES_REPLY.to_owned());
        }
        Ok(self
            .complete_or_inline(prompts::vehicle_prompt(query, &vehicles))
            .await)
    }

    async fn activity_reply(&self, query: &str, term: &str) -> Result<String, AppError> {
        let activities = self.api.available_activities(term).await?;
        if activities.is_empty() {
            return Ok(NO_ACTIVITIES_REPLY.to_owned());
        }
        Ok(self
            .complete_or_inline(prompts::activity_prompt(query, &activities))
            .await)
    }

    /// Package path: a search-filtered fetch first, then an unfiltered
    /// "popular packages" fallback when nothing matched.
    async fn package_reply(&self, query: &str, term: &str) -> Result<String, AppError> {
        let packages = self
            .api
            .packages(PACKAGE_PAGE_LIMIT, 0, Some(term))
            .await?;

        if packages.is_empty() {
            info!("No packages matched '{term}'; falling back to popular packages");
            let popular = self.api.packages(PACKAGE_PAGE_LIMIT, 0, None).await?;
            return Ok(self
                .complete_or_inline(prompts::popular_packages_prompt(query, &popular))
                .await);
        }

        Ok(self
            .complete_or_inline(prompts::package_prompt(query, &packages))
            .await)
    }

    /// Run a completion, converting chat failures into inline reply text
    /// so the conversation always receives an assistant turn.
    async fn complete_or_inline(&self, prompt: String) -> String {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);
        match self.llm.complete(&request).await {
            Ok(response) => response.content,
            Err(e) => {
                error!("Chat completion failed: {e}");
                format!("DeepSeek error: {e}")
            }
        }
    }
}
