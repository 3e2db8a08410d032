// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deep-link routes
//!
//! `#jobs`, `#jobs/:id`, `#executions`, `#executions/:id`, and `#logs`
//! map to a tab plus the load that keeps it fresh. Anything else falls
//! back to the jobs collection. Entering a route is idempotent: re-entry
//! re-issues the load, which is how manual refresh via navigation works.

use std::fmt;

/// Active dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Jobs,
    Executions,
    Logs,
}

/// A navigable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Jobs,
    Job(String),
    Executions,
    Execution(String),
    Logs,
}

impl Route {
    /// Parse a URL fragment. Leading `#` and `/` are tolerated; any
    /// unmatched path (including `logs/:id` — logs have no single-item
    /// endpoint) defaults to the jobs collection.
    pub fn parse(fragment: &str) -> Route {
        let path = fragment.trim().trim_start_matches('#').trim_start_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["jobs"] => Route::Jobs,
            ["jobs", id] => Route::Job((*id).to_string()),
            ["executions"] => Route::Executions,
            ["executions", id] => Route::Execution((*id).to_string()),
            ["logs"] => Route::Logs,
            _ => Route::Jobs,
        }
    }

    /// Tab the route belongs to.
    pub fn tab(&self) -> Tab {
        match self {
            Route::Jobs | Route::Job(_) => Tab::Jobs,
            Route::Executions | Route::Execution(_) => Tab::Executions,
            Route::Logs => Tab::Logs,
        }
    }

    /// Fragment form of the route, for links.
    pub fn fragment(&self) -> String {
        match self {
            Route::Jobs => "#jobs".to_string(),
            Route::Job(id) => format!("#jobs/{}", id),
            Route::Executions => "#executions".to_string(),
            Route::Execution(id) => format!("#executions/{}", id),
            Route::Logs => "#logs".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;
