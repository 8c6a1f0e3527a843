// ABOUTME: Server binary for the TripXplo AI backend
// ABOUTME: Loads environment configuration, wires the clients, and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TripXplo AI

//! # TripXplo AI Server Binary
//!
//! Starts the HTTP service: environment configuration, structured
//! logging, the upstream TripXplo client, the OpenRouter chat provider,
//! and the axum router with graceful shutdown on Ctrl-C.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use tripxplo_ai::config::{ServerConfig, APP_NAME};
use tripxplo_ai::llm::OpenRouterProvider;
use tripxplo_ai::logging;
use tripxplo_ai::routes::{router, AppState};
use tripxplo_ai::upstream::TripXploClient;

#[derive(Parser)]
#[command(name = "tripxplo-server")]
#[command(about = "TripXplo AI - travel package assistant backend")]
struct Args {
    /// Override the HTTP port from the environment
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting {APP_NAME}");
    info!("{}", config.summary());

    let api = Arc::new(TripXploClient::new(config.upstream.clone()));
    let llm = Arc::new(OpenRouterProvider::new(config.chat.clone()));
    let state = AppState::new(api, llm);

    let app = router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    info!("Listening on port {}", config.http_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
