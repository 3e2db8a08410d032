// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ow - Otter Watch CLI
//!
//! Operator console for a remote job scheduler: renders jobs,
//! executions, and the audit log, and drives create/modify/pause/
//! resume/run/delete against the scheduler's REST API.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod config;
mod output;
mod screen;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{executions, jobs, logs, open};
use output::OutputFormat;
use ow_client::{ApiConfig, Dashboard, HttpTransport};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "ow",
    version,
    about = "Otter Watch - dashboard client for a remote job scheduler"
)]
struct Cli {
    /// Scheduler API base URL (overrides config file and environment)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Job management
    Jobs(jobs::JobsArgs),
    /// Execution history
    Executions(executions::ExecutionsArgs),
    /// Audit log
    Logs(logs::LogsArgs),
    /// Navigate a dashboard deep link
    Open(open::OpenArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = config::load(cli.api_url)?;

    let dashboard = Dashboard::new(
        ApiConfig::new(settings.api_url.clone()),
        Arc::new(HttpTransport::new()),
        Arc::new(screen::ConsoleNotifier),
    );

    match cli.command {
        Commands::Jobs(args) => jobs::handle(&dashboard, args, cli.format).await,
        Commands::Executions(args) => {
            executions::handle(&dashboard, args, &settings, cli.format).await
        }
        Commands::Logs(args) => logs::handle(&dashboard, args, &settings, cli.format).await,
        Commands::Open(args) => open::handle(&dashboard, args, cli.format).await,
    }
}
