// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! API endpoint configuration
//!
//! One base URL (e.g. `http://localhost:7777/api/v2`) plus the URL
//! builders every store uses. Time-range queries render `end` before
//! `start`, matching the wire traces the scheduler's own UI produces.

use chrono::{DateTime, SecondsFormat, Utc};
use ow_core::ResourceKind;

/// Base URL and endpoint builders for one scheduler API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection endpoint, optionally restricted to a time range.
    pub fn collection_url(&self, kind: ResourceKind, range: Option<&TimeRange>) -> String {
        let mut url = format!("{}{}", self.base_url, kind.path());
        if let Some(range) = range {
            url.push_str(&range.query());
        }
        url
    }

    /// Single-item endpoint.
    pub fn item_url(&self, kind: ResourceKind, id: &str) -> String {
        format!("{}{}/{}", self.base_url, kind.path(), id)
    }

    /// Ad-hoc run endpoint: `POST /executions/:job_id`.
    pub fn run_url(&self, job_id: &str) -> String {
        format!("{}/executions/{}", self.base_url, job_id)
    }
}

/// Closed time range in UTC for collection queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Range covering the last `seconds` before `now`, the way the
    /// dashboard's filter dropdowns build ranges.
    pub fn last(seconds: u64, now: DateTime<Utc>) -> Self {
        Self {
            start: now - chrono::Duration::seconds(seconds as i64),
            end: now,
        }
    }

    /// Query string fragment, `?time_range_end=...&time_range_start=...`.
    pub fn query(&self) -> String {
        format!(
            "?time_range_end={}&time_range_start={}",
            iso(self.end),
            iso(self.start)
        )
    }
}

fn iso(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
