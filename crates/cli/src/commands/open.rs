// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deep-link navigation
//!
//! `ow open '#executions/e42'` drives the same router the dashboard
//! uses: parse the fragment, issue the load it calls for, render the
//! tab it lands on.

use crate::output::OutputFormat;
use clap::Args;
use ow_client::Dashboard;
use ow_core::Tab;

#[derive(Args)]
pub struct OpenArgs {
    /// Fragment to navigate, e.g. "#jobs", "jobs/<id>", "#logs"
    pub fragment: String,
}

pub async fn handle(
    dashboard: &Dashboard,
    args: OpenArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    // Subscribe before navigating so the whole lifecycle is observed.
    let mut jobs_rx = dashboard.jobs().subscribe();
    let mut executions_rx = dashboard.executions().subscribe();
    let mut logs_rx = dashboard.logs().subscribe();

    let route = dashboard.navigate(&args.fragment).await;

    match route.tab() {
        Tab::Jobs => super::jobs::render_current(&mut jobs_rx, format),
        Tab::Executions => super::executions::render_current(&mut executions_rx, format),
        Tab::Logs => super::logs::render_current(&mut logs_rx, format),
    }
}
