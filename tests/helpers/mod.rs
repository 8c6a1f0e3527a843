// ABOUTME: Test helper modules shared across integration tests
// ABOUTME: Currently hosts the axum router test harness

pub mod axum_test;
