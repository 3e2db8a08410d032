// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job commands

use crate::output::{self, OutputFormat};
use crate::screen::TableScreen;
use clap::{Args, Subcommand};
use ow_client::{Dashboard, TableView};
use ow_core::{Job, JobDraft, SyncPhase, TriggerForm};
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct JobsArgs {
    #[command(subcommand)]
    pub command: JobsCommand,
}

#[derive(Subcommand)]
pub enum JobsCommand {
    /// List all jobs
    List,
    /// Show one job
    Show {
        /// Job id
        id: String,
    },
    /// Add a job
    Add(JobFields),
    /// Modify a job
    Edit {
        /// Job id
        id: String,
        #[command(flatten)]
        fields: JobFields,
    },
    /// Pause a job
    Pause {
        /// Job id
        id: String,
    },
    /// Resume a paused job
    Resume {
        /// Job id
        id: String,
    },
    /// Schedule an ad-hoc run
    Run {
        /// Job id
        id: String,
    },
    /// Delete a job
    Delete {
        /// Job id
        id: String,
    },
}

/// Form fields shared by add and edit. Passing any `--every-*` flag
/// switches the trigger to a fixed interval; otherwise the cron fields
/// apply (defaulting to `*`, i.e. every minute).
#[derive(Args)]
pub struct JobFields {
    /// Job name
    #[arg(long)]
    pub name: String,

    /// Task class, e.g. simple_scheduler.jobs.sample_job.AwesomeJob
    #[arg(long)]
    pub task: String,

    /// Task arguments as a JSON array, e.g. '[1, 2, "hello"]'
    #[arg(long, default_value = "")]
    pub args: String,

    /// Cron minute field
    #[arg(long, default_value = "*")]
    pub minute: String,

    /// Cron hour field
    #[arg(long, default_value = "*")]
    pub hour: String,

    /// Cron day-of-month field
    #[arg(long, default_value = "*")]
    pub day: String,

    /// Cron month field
    #[arg(long, default_value = "*")]
    pub month: String,

    /// Cron day-of-week field
    #[arg(long, default_value = "*")]
    pub day_of_week: String,

    /// Interval days
    #[arg(long)]
    pub every_days: Option<String>,

    /// Interval hours
    #[arg(long)]
    pub every_hours: Option<String>,

    /// Interval minutes
    #[arg(long)]
    pub every_minutes: Option<String>,

    /// Interval seconds
    #[arg(long)]
    pub every_seconds: Option<String>,
}

impl JobFields {
    pub fn draft(&self) -> JobDraft {
        let interval_requested = self.every_days.is_some()
            || self.every_hours.is_some()
            || self.every_minutes.is_some()
            || self.every_seconds.is_some();

        let trigger = if interval_requested {
            TriggerForm::Interval {
                days: self.every_days.clone().unwrap_or_else(|| "0".to_string()),
                hours: self.every_hours.clone().unwrap_or_else(|| "0".to_string()),
                minutes: self.every_minutes.clone().unwrap_or_else(|| "0".to_string()),
                seconds: self.every_seconds.clone().unwrap_or_else(|| "0".to_string()),
            }
        } else {
            TriggerForm::Cron {
                minute: self.minute.clone(),
                hour: self.hour.clone(),
                day: self.day.clone(),
                month: self.month.clone(),
                day_of_week: self.day_of_week.clone(),
            }
        };

        JobDraft {
            name: self.name.clone(),
            job_class_string: self.task.clone(),
            pub_args: self.args.clone(),
            trigger,
        }
    }
}

#[derive(Serialize)]
struct JobRow {
    job_id: String,
    name: String,
    task: String,
    schedule: String,
    next_run: String,
    active: &'static str,
    args: String,
}

fn job_row(job: &Job) -> JobRow {
    JobRow {
        job_id: job.job_id.clone(),
        name: job.name.clone(),
        task: job.job_class_string.clone(),
        schedule: job.schedule_string(),
        next_run: job.next_run_string(),
        active: job.active_string(),
        args: job.pub_args_string(),
    }
}

impl fmt::Display for JobRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<18} {:<28} active={:<4} {:<48} {}",
            self.job_id, self.name, self.active, self.schedule, self.next_run
        )
    }
}

pub async fn handle(
    dashboard: &Dashboard,
    args: JobsArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match args.command {
        JobsCommand::List => list(dashboard, format).await,
        JobsCommand::Show { id } => show(dashboard, &id, format).await,
        JobsCommand::Add(fields) => {
            dashboard.jobs().create(&fields.draft()).await;
            Ok(())
        }
        JobsCommand::Edit { id, fields } => {
            dashboard.jobs().update(&id, &fields.draft()).await;
            Ok(())
        }
        JobsCommand::Pause { id } => {
            dashboard.jobs().set_paused(&id, true).await;
            Ok(())
        }
        JobsCommand::Resume { id } => {
            dashboard.jobs().set_paused(&id, false).await;
            Ok(())
        }
        JobsCommand::Run { id } => {
            dashboard.jobs().run_now(&id).await;
            Ok(())
        }
        JobsCommand::Delete { id } => {
            dashboard.jobs().delete(&id).await;
            Ok(())
        }
    }
}

/// Drain whatever the jobs store emitted into a table on the terminal.
pub(crate) fn render_current(
    rx: &mut ow_client::EventReceiver<Job>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut view = TableView::new();
    let mut screen = TableScreen::new(format, job_row);
    view.drain(rx, &mut screen);
    if view.phase() == SyncPhase::Failed {
        anyhow::bail!("request failed");
    }
    Ok(())
}

async fn list(dashboard: &Dashboard, format: OutputFormat) -> anyhow::Result<()> {
    let jobs = dashboard.jobs();
    let mut rx = jobs.subscribe();
    jobs.load(None).await;
    render_current(&mut rx, format)?;

    output::print_footer(
        format,
        &format!(
            "{} jobs, {} active, {} inactive",
            jobs.total(),
            jobs.active_count(),
            jobs.inactive_count()
        ),
    );
    Ok(())
}

async fn show(dashboard: &Dashboard, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let jobs = dashboard.jobs();
    let mut rx = jobs.subscribe();
    jobs.load_one(id).await;
    render_current(&mut rx, format)
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
