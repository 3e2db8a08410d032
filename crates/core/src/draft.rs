// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job draft validation
//!
//! Everything here runs before any network call: a draft that fails
//! validation produces a user-facing error and nothing else. The `$`
//! character is reserved because a downstream command-line encoding uses
//! it as the whitespace placeholder.

use crate::trigger::{Trigger, TriggerForm};
use serde::Serialize;
use thiserror::Error;

/// Reserved by the downstream command-line argument encoding.
pub const RESERVED_DELIMITER: char = '$';

/// Pre-network validation failures, with the operator-facing message as
/// the error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in job name")]
    MissingName,

    #[error("Please fill in job task class")]
    MissingTaskClass,

    #[error("You cannot use \"$\". Please remove it.")]
    ReservedCharacter,

    #[error("Invalid Arguments. Should be valid JSON string, e.g., [1, 2, \"hello\"].")]
    InvalidArguments,

    #[error("Please fill in the trigger's {field} field")]
    MissingCronField { field: &'static str },

    #[error("The trigger's {field} field must be a whole number")]
    InvalidNumber { field: &'static str },
}

/// Raw add/edit form input for a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub name: String,
    /// Task identifier, e.g. `simple_scheduler.jobs.sample_job.AwesomeJob`.
    pub job_class_string: String,
    /// Task-arguments text exactly as typed; blank means no arguments.
    pub pub_args: String,
    pub trigger: TriggerForm,
}

/// Validated mutation body for `POST /jobs` and `PUT /jobs/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPayload {
    pub job_class_string: String,
    pub name: String,
    pub pub_args: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub trigger: Trigger,
}

impl JobDraft {
    /// Validate the draft and build the wire payload.
    pub fn validate(&self) -> Result<JobPayload, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let job_class = self.job_class_string.trim();
        if job_class.is_empty() {
            return Err(ValidationError::MissingTaskClass);
        }

        if self.name.contains(RESERVED_DELIMITER)
            || self.job_class_string.contains(RESERVED_DELIMITER)
            || self.pub_args.contains(RESERVED_DELIMITER)
        {
            return Err(ValidationError::ReservedCharacter);
        }

        let pub_args = parse_task_args(&self.pub_args)?;
        let trigger = self.trigger.to_trigger()?;

        Ok(JobPayload {
            job_class_string: job_class.to_string(),
            name: name.to_string(),
            pub_args,
            trigger,
        })
    }
}

/// Parse the task-arguments text field. Blank means no arguments; a JSON
/// array passes through; any other JSON value becomes a single argument.
pub fn parse_task_args(text: &str) -> Result<Vec<serde_json::Value>, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Array(items)) => Ok(items),
        Ok(other) => Ok(vec![other]),
        Err(_) => Err(ValidationError::InvalidArguments),
    }
}

#[cfg(test)]
#[path = "draft_tests.rs"]
mod tests;
