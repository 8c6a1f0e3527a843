// ABOUTME: Shared test stubs and setup functions for integration tests
// ABOUTME: Provides a scripted TravelApi, scripted LLM providers, and quiet logging
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]

//! Shared test fixtures for `tripxplo-ai`.
//!
//! The stubs record every call so tests can assert not just on replies
//! but on which upstream operations ran (and with which arguments).

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use tripxplo_ai::errors::AppError;
use tripxplo_ai::llm::{ChatRequest, ChatResponse, LlmProvider};
use tripxplo_ai::models::PricingQuery;
use tripxplo_ai::upstream::TravelApi;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Scripted `TravelApi` with call recording
#[derive(Default)]
pub struct StubTravelApi {
    /// Records returned from `available_hotels`
    pub hotels: Vec<Value>,
    /// Records returned from `available_vehicles`
    pub vehicles: Vec<Value>,
    /// Records returned from `available_activities`
    pub activities: Vec<Value>,
    /// Records returned from `packages` when a search term is passed
    pub packages: Vec<Value>,
    /// Records returned from `packages` when no search term is passed
    pub popular_packages: Vec<Value>,
    /// Detail map returned from `package_details`
    pub details: Value,
    /// Pricing map returned from `package_pricing`
    pub pricing: Value,
    /// When set, every operation fails with an auth error
    pub fail_auth: bool,
    /// Total data-fetch calls across all operations
    pub fetch_calls: AtomicUsize,
    /// Search arguments seen by `packages`, in order
    pub package_searches: Mutex<Vec<Option<String>>>,
    /// Filter terms seen by the hotel/vehicle/activity operations
    pub filter_terms: Mutex<Vec<String>>,
}

impl StubTravelApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hotels(mut self, hotels: Vec<Value>) -> Self {
        self.hotels = hotels;
        self
    }

    pub fn with_vehicles(mut self, vehicles: Vec<Value>) -> Self {
        self.vehicles = vehicles;
        self
    }

    pub fn with_activities(mut self, activities: Vec<Value>) -> Self {
        self.activities = activities;
        self
    }

    pub fn with_packages(mut self, packages: Vec<Value>) -> Self {
        self.packages = packages;
        self
    }

    pub fn with_popular_packages(mut self, packages: Vec<Value>) -> Self {
        self.popular_packages = packages;
        self
    }

    pub fn with_pricing(mut self, pricing: Value) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn failing_auth() -> Self {
        Self {
            fail_auth: true,
            ..Self::default()
        }
    }

    pub fn total_fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    fn record_fetch(&self) -> Result<(), AppError> {
        if self.fail_auth {
            return Err(AppError::auth_failed("login rejected with status 401"));
        }
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn record_filter_term(&self, term: &str) {
        self.filter_terms
            .lock()
            .expect("filter_terms lock")
            .push(term.to_owned());
    }
}

#[async_trait]
impl TravelApi for StubTravelApi {
    async fn packages(
        &self,
        _limit: u32,
        _offset: u32,
        search: Option<&str>,
    ) -> Result<Vec<Value>, AppError> {
        self.record_fetch()?;
        self.package_searches
            .lock()
            .expect("package_searches lock")
            .push(search.map(ToOwned::to_owned));
        Ok(if search.is_some() {
            self.packages.clone()
        } else {
            self.popular_packages.clone()
        })
    }

    async fn package_details(&self, _package_id: &str) -> Result<Value, AppError> {
        self.record_fetch()?;
        Ok(self.details.clone())
    }

    async fn package_pricing(
        &self,
        _package_id: &str,
        _params: &PricingQuery,
    ) -> Result<Value, AppError> {
        self.record_fetch()?;
        Ok(self.pricing.clone())
    }

    async fn available_hotels(&self, filter_term: &str) -> Result<Vec<Value>, AppError> {
        self.record_fetch()?;
        self.record_filter_term(filter_term);
        Ok(self.hotels.clone())
    }

    async fn available_vehicles(&self, filter_term: &str) -> Result<Vec<Value>, AppError> {
        self.record_fetch()?;
        self.record_filter_term(filter_term);
        Ok(self.vehicles.clone())
    }

    async fn available_activities(&self, filter_term: &str) -> Result<Vec<Value>, AppError> {
        self.record_fetch()?;
        self.record_filter_term(filter_term);
        Ok(self.activities.clone())
    }

    async fn interests(&self) -> Result<Vec<Value>, AppError> {
        self.record_fetch()?;
        Ok(Vec::new())
    }

    async fn search_destinations(&self, _search: &str) -> Result<Vec<Value>, AppError> {
        self.record_fetch()?;
        Ok(Vec::new())
    }
}

/// LLM stub that echoes the last prompt back as the reply
#[derive(Default)]
pub struct EchoLlm {
    /// Number of completions served
    pub completions: AtomicUsize,
}

impl EchoLlm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_completions(&self) -> usize {
        self.completions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for EchoLlm {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn default_model(&self) -> &'static str {
        "echo-model"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.completions.fetch_add(1, Ordering::SeqCst);
        let content = request
            .messages
            .last()
            .map(|message| message.content.clone())
            .unwrap_or_default();
        Ok(ChatResponse {
            content,
            model: "echo-model".to_owned(),
        })
    }
}

/// LLM stub whose completions always fail
pub struct FailingLlm;

#[async_trait]
impl LlmProvider for FailingLlm {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn default_model(&self) -> &'static str {
        "failing-model"
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Err(AppError::external_service("DeepSeek", "connection refused"))
    }
}
