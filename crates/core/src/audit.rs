// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Audit log entries
//!
//! Every mutation the scheduler accepts is journaled with who did it and
//! when. The `description` field is event-dependent: a `custom_run`
//! entry carries the spawned execution's id, a `modified` entry carries
//! the server-rendered field diff.

use crate::execution::StatusStyle;
use crate::resource::{decode, ParseError, Resource, ResourceKind};
use crate::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of audited operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEvent {
    Added,
    CustomRun,
    Paused,
    Resumed,
    Deleted,
    Modified,
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuditEvent::Added => "added",
            AuditEvent::CustomRun => "custom_run",
            AuditEvent::Paused => "paused",
            AuditEvent::Resumed => "resumed",
            AuditEvent::Deleted => "deleted",
            AuditEvent::Modified => "modified",
        };
        f.write_str(name)
    }
}

impl AuditEvent {
    pub fn style(&self) -> StatusStyle {
        match self {
            AuditEvent::Added | AuditEvent::Resumed => StatusStyle::Success,
            AuditEvent::CustomRun => StatusStyle::Running,
            AuditEvent::Paused | AuditEvent::Modified => StatusStyle::Scheduled,
            AuditEvent::Deleted => StatusStyle::Failed,
        }
    }
}

/// One audit log row, as served by the logs endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub job_id: String,
    pub job_name: String,
    pub event: AuditEvent,
    #[serde(default)]
    pub user: String,
    #[serde(with = "wire::iso_datetime")]
    pub created_time: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl AuditEntry {
    /// Markup linking to the job the entry is about.
    pub fn job_name_markup(&self) -> String {
        format!(r#"<a href="/#jobs/{}">{}</a>"#, self.job_id, self.job_name)
    }

    /// Markup for the event column.
    pub fn event_markup(&self) -> String {
        format!(
            r#"<span class="{}">{}</span>"#,
            self.event.style().css_class(),
            self.event
        )
    }

    pub fn event_time_string(&self) -> String {
        self.created_time.format("%m/%d/%Y %H:%M:%S %:z").to_string()
    }

    /// Markup for the description column. A `custom_run` description is
    /// the execution id the run produced and deep-links to it; all other
    /// events (including `modified` diff text) pass through.
    pub fn description_markup(&self) -> String {
        match self.event {
            AuditEvent::CustomRun => format!(
                r#"<a href="/#executions/{}">{}</a>"#,
                self.description, self.description
            ),
            _ => self.description.clone(),
        }
    }
}

impl Resource for AuditEntry {
    const KIND: ResourceKind = ResourceKind::Logs;

    fn from_value(value: &serde_json::Value) -> Result<Self, ParseError> {
        decode(Self::KIND, value)
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
