// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job entity and its display derivations
//!
//! A job snapshot is owned by the scheduler; the client never mutates
//! one, it re-fetches. `next_run_time` doubles as the activity flag:
//! absent means the job is paused.

use crate::resource::{decode, ParseError, Resource, ResourceKind};
use crate::trigger::Trigger;
use crate::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled job as served by the jobs endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    pub name: String,
    /// Task identifier executed by the scheduler's workers.
    pub job_class_string: String,
    #[serde(default)]
    pub pub_args: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub trigger: Trigger,
    #[serde(default, with = "wire::next_run_time")]
    pub next_run_time: Option<DateTime<Utc>>,
}

impl Job {
    /// A job with no next run time is paused.
    pub fn is_active(&self) -> bool {
        self.next_run_time.is_some()
    }

    /// `"yes"` or `"no"`, for the active column.
    pub fn active_string(&self) -> &'static str {
        if self.is_active() {
            "yes"
        } else {
            "no"
        }
    }

    /// Human-readable schedule string.
    pub fn schedule_string(&self) -> String {
        self.trigger.schedule_string()
    }

    /// Task arguments as a compact JSON array string.
    pub fn pub_args_string(&self) -> String {
        serde_json::Value::Array(self.pub_args.clone()).to_string()
    }

    /// Plain next-run column text: the UTC timestamp or `Inactive`.
    pub fn next_run_string(&self) -> String {
        match self.next_run_time {
            Some(t) => format!("UTC: {}", t.format("%m/%d/%Y %H:%M:%S")),
            None => "Inactive".to_string(),
        }
    }

    /// Markup for the next-run column: the UTC timestamp for an active
    /// job, an `Inactive` badge otherwise.
    pub fn next_run_markup(&self) -> String {
        let class = if self.is_active() {
            "success-color"
        } else {
            "failed-color"
        };
        format!(
            r#"<span class="{}">{}</span>"#,
            class,
            self.next_run_string()
        )
    }
}

impl Resource for Job {
    const KIND: ResourceKind = ResourceKind::Jobs;

    fn from_value(value: &serde_json::Value) -> Result<Self, ParseError> {
        decode(Self::KIND, value)
    }
}

/// Number of active jobs in a snapshot.
pub fn active_count(jobs: &[Job]) -> usize {
    jobs.iter().filter(|job| job.is_active()).count()
}

/// Number of paused jobs in a snapshot.
pub fn inactive_count(jobs: &[Job]) -> usize {
    jobs.len() - active_count(jobs)
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
