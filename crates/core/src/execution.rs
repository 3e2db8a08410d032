// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution entity: immutable run snapshots and their display rules
//!
//! Executions are never mutated by the client. The job reference inside
//! one is weak and display-only; the job may have been deleted since the
//! run was recorded.

use crate::resource::{decode, ParseError, Resource, ResourceKind};
use crate::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Markup for the stack-trace popup link. The result body stays on the
/// entity; the link only carries the show-result action.
const STACK_TRACE_LINK: &str = r##"<a href="#" data-action="show-result">stack trace</a>"##;

/// Lifecycle state of one execution, as named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionState {
    Scheduled,
    #[serde(rename = "scheduled error")]
    ScheduledError,
    Running,
    Stopping,
    Stopped,
    Failed,
    Succeeded,
    Timeout,
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionState::Scheduled => "scheduled",
            ExecutionState::ScheduledError => "scheduled error",
            ExecutionState::Running => "running",
            ExecutionState::Stopping => "stopping",
            ExecutionState::Stopped => "stopped",
            ExecutionState::Failed => "failed",
            ExecutionState::Succeeded => "succeeded",
            ExecutionState::Timeout => "timeout",
        };
        f.write_str(name)
    }
}

/// Display category for a state. Transitional states (`stopping`,
/// `stopped`, `timeout`) share the scheduled styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Scheduled,
    ScheduledError,
    Running,
    Success,
    Failed,
}

impl StatusStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusStyle::Scheduled => "scheduled-color",
            StatusStyle::ScheduledError => "scheduled-error-color",
            StatusStyle::Running => "running-color",
            StatusStyle::Success => "success-color",
            StatusStyle::Failed => "failed-color",
        }
    }
}

impl ExecutionState {
    pub fn style(&self) -> StatusStyle {
        match self {
            ExecutionState::ScheduledError => StatusStyle::ScheduledError,
            ExecutionState::Running => StatusStyle::Running,
            ExecutionState::Succeeded => StatusStyle::Success,
            ExecutionState::Failed => StatusStyle::Failed,
            ExecutionState::Scheduled
            | ExecutionState::Stopping
            | ExecutionState::Stopped
            | ExecutionState::Timeout => StatusStyle::Scheduled,
        }
    }
}

/// Weak, display-only reference to the job that produced an execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRef {
    pub job_id: String,
    pub name: String,
}

/// One run of a job, as served by the executions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execution {
    pub execution_id: String,
    #[serde(default)]
    pub job: Option<JobRef>,
    pub state: ExecutionState,
    #[serde(with = "wire::iso_datetime")]
    pub scheduled_time: DateTime<Utc>,
    #[serde(with = "wire::iso_datetime")]
    pub updated_time: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub pid: Option<i64>,
}

impl Execution {
    /// Markup for the name column: execution permalink plus job link,
    /// with a fallback badge when the job reference is gone.
    pub fn name_markup(&self) -> String {
        let permalink = format!(
            r#"<a href="/#executions/{}">{}</a>"#,
            self.execution_id, self.execution_id
        );
        match &self.job {
            Some(job) => format!(
                r#"{} <a href="/#jobs/{}">{}</a>"#,
                permalink, job.job_id, job.name
            ),
            None => format!(r#"{} <span class="failed-color">Unknown Job</span>"#, permalink),
        }
    }

    /// Markup for the status column.
    pub fn status_markup(&self) -> String {
        format!(
            r#"<span class="{}">{}</span>"#,
            self.state.style().css_class(),
            self.state
        )
    }

    /// Markup for the description column. `failed` runs prepend where
    /// they ran before the stack-trace link; `scheduled error` runs have
    /// nothing useful but the trace; everything else shows the raw
    /// description from the worker.
    pub fn description_markup(&self) -> String {
        match self.state {
            ExecutionState::Failed => format!(
                "{} pid: {}<br>{}",
                self.hostname.as_deref().unwrap_or(""),
                self.pid.map(|p| p.to_string()).unwrap_or_default(),
                STACK_TRACE_LINK
            ),
            ExecutionState::ScheduledError => STACK_TRACE_LINK.to_string(),
            _ => self.description.clone(),
        }
    }

    /// Markup for the result column: a show-result link styled by state
    /// for finished runs, empty otherwise. The scheduler stores the
    /// literal string `"null"` for runs without a result.
    pub fn result_markup(&self) -> String {
        match self.result.as_deref() {
            None | Some("") | Some("null") => return String::new(),
            Some(_) => {}
        }
        match self.state.style() {
            StatusStyle::ScheduledError | StatusStyle::Failed | StatusStyle::Success => format!(
                r##"<span><a href="#" data-action="show-result" class="{}">result</a></span>"##,
                self.state.style().css_class()
            ),
            StatusStyle::Scheduled | StatusStyle::Running => String::new(),
        }
    }

    pub fn scheduled_at_string(&self) -> String {
        self.scheduled_time.format("%m/%d/%Y %H:%M:%S %:z").to_string()
    }

    pub fn finished_at_string(&self) -> String {
        self.updated_time.format("%m/%d/%Y %H:%M:%S %:z").to_string()
    }
}

impl Resource for Execution {
    const KIND: ResourceKind = ResourceKind::Executions;

    fn from_value(value: &serde_json::Value) -> Result<Self, ParseError> {
        decode(Self::KIND, value)
    }
}

/// Number of executions in a snapshot with the given state, for the
/// stats header.
pub fn count_in_state(executions: &[Execution], state: ExecutionState) -> usize {
    executions.iter().filter(|e| e.state == state).count()
}

#[cfg(test)]
#[path = "execution_tests.rs"]
mod tests;
