// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution commands

use crate::config::Settings;
use crate::output::{self, OutputFormat};
use crate::screen::TableScreen;
use chrono::Utc;
use clap::{Args, Subcommand};
use ow_client::{Dashboard, TableView, TimeRange};
use ow_core::execution::count_in_state;
use ow_core::{Execution, ExecutionState, SyncPhase};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ExecutionsArgs {
    #[command(subcommand)]
    pub command: ExecutionsCommand,
}

#[derive(Subcommand)]
pub enum ExecutionsCommand {
    /// List executions
    List {
        /// Only the last N seconds (the scheduler's own default window
        /// applies when omitted)
        #[arg(long)]
        since: Option<u64>,
    },
    /// Show one execution
    Show {
        /// Execution id
        id: String,
    },
}

#[derive(Serialize)]
struct ExecutionRow {
    execution_id: String,
    job: String,
    state: String,
    scheduled_at: String,
    finished_at: String,
    description: String,
}

fn execution_row(execution: &Execution) -> ExecutionRow {
    ExecutionRow {
        execution_id: execution.execution_id.clone(),
        job: execution
            .job
            .as_ref()
            .map(|job| job.name.clone())
            .unwrap_or_else(|| "Unknown Job".to_string()),
        state: execution.state.to_string(),
        scheduled_at: execution.scheduled_at_string(),
        finished_at: execution.finished_at_string(),
        description: execution.description.clone(),
    }
}

impl fmt::Display for ExecutionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} {:<28} {:<16} {:<26} {}",
            self.execution_id, self.job, self.state, self.scheduled_at, self.description
        )
    }
}

pub async fn handle(
    dashboard: &Dashboard,
    args: ExecutionsArgs,
    settings: &Settings,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match args.command {
        ExecutionsCommand::List { since } => {
            list(dashboard, since.or(settings.default_range_secs), format).await
        }
        ExecutionsCommand::Show { id } => show(dashboard, &id, format).await,
    }
}

/// Drain whatever the executions store emitted into a table.
pub(crate) fn render_current(
    rx: &mut ow_client::EventReceiver<Execution>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut view = TableView::new();
    let mut screen = TableScreen::new(format, execution_row);
    view.drain(rx, &mut screen);
    if view.phase() == SyncPhase::Failed {
        anyhow::bail!("request failed");
    }
    Ok(())
}

async fn list(
    dashboard: &Dashboard,
    since: Option<u64>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let store = dashboard.executions();
    let range = since.map(|seconds| TimeRange::last(seconds, Utc::now()));

    let mut rx = store.subscribe();
    store.load(range.as_ref()).await;
    render_current(&mut rx, format)?;

    let items = store.items();
    output::print_footer(
        format,
        &format!(
            "{} executions: {} scheduled, {} running, {} scheduled error, {} failed, {} succeeded",
            items.len(),
            count_in_state(&items, ExecutionState::Scheduled),
            count_in_state(&items, ExecutionState::Running),
            count_in_state(&items, ExecutionState::ScheduledError),
            count_in_state(&items, ExecutionState::Failed),
            count_in_state(&items, ExecutionState::Succeeded),
        ),
    );
    Ok(())
}

async fn show(dashboard: &Dashboard, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let store = dashboard.executions();
    let mut rx = store.subscribe();
    store.load_one(id).await;
    render_current(&mut rx, format)
}
