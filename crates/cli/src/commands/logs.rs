// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Audit log commands

use crate::config::Settings;
use crate::output::OutputFormat;
use crate::screen::TableScreen;
use chrono::Utc;
use clap::{Args, Subcommand};
use ow_client::{Dashboard, TableView, TimeRange};
use ow_core::{AuditEntry, SyncPhase};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct LogsArgs {
    #[command(subcommand)]
    pub command: LogsCommand,
}

#[derive(Subcommand)]
pub enum LogsCommand {
    /// List audit log entries
    List {
        /// Only the last N seconds (the scheduler's own default window
        /// applies when omitted)
        #[arg(long)]
        since: Option<u64>,
    },
}

#[derive(Serialize)]
struct LogRow {
    job_name: String,
    event: String,
    user: String,
    time: String,
    description: String,
}

fn log_row(entry: &AuditEntry) -> LogRow {
    LogRow {
        job_name: entry.job_name.clone(),
        event: entry.event.to_string(),
        user: entry.user.clone(),
        time: entry.event_time_string(),
        description: entry.description.clone(),
    }
}

impl fmt::Display for LogRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<26} {:<12} {:<12} {:<26} {}",
            self.time, self.event, self.user, self.job_name, self.description
        )
    }
}

pub async fn handle(
    dashboard: &Dashboard,
    args: LogsArgs,
    settings: &Settings,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let LogsCommand::List { since } = args.command;
    let store = dashboard.logs();
    let range = since
        .or(settings.default_range_secs)
        .map(|seconds| TimeRange::last(seconds, Utc::now()));

    let mut rx = store.subscribe();
    store.load(range.as_ref()).await;
    render_current(&mut rx, format)
}

/// Drain whatever the logs store emitted into a table.
pub(crate) fn render_current(
    rx: &mut ow_client::EventReceiver<AuditEntry>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut view = TableView::new();
    let mut screen = TableScreen::new(format, log_row);
    view.drain(rx, &mut screen);
    if view.phase() == SyncPhase::Failed {
        anyhow::bail!("request failed");
    }
    Ok(())
}
