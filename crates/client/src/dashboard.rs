// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard: the three stores plus route execution
//!
//! Stores are created once at startup and live for the process. The
//! stores are independent of each other; nothing orders jobs against
//! executions against logs.

use crate::config::ApiConfig;
use crate::jobs::JobStore;
use crate::notify::Notifier;
use crate::store::ResourceStore;
use crate::transport::Transport;
use ow_core::{AuditEntry, Execution, Route};
use std::sync::Arc;

/// The client's window onto one scheduler.
pub struct Dashboard {
    jobs: JobStore,
    executions: ResourceStore<Execution>,
    logs: ResourceStore<AuditEntry>,
}

impl Dashboard {
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            jobs: JobStore::new(config.clone(), transport.clone(), notifier.clone()),
            executions: ResourceStore::new(config.clone(), transport.clone(), notifier.clone()),
            logs: ResourceStore::new(config, transport, notifier),
        }
    }

    pub fn jobs(&self) -> &JobStore {
        &self.jobs
    }

    pub fn executions(&self) -> &ResourceStore<Execution> {
        &self.executions
    }

    pub fn logs(&self) -> &ResourceStore<AuditEntry> {
        &self.logs
    }

    /// Parse a fragment and issue the load it calls for. Re-entering
    /// the current route re-issues the load, which is how refresh via
    /// navigation works.
    pub async fn navigate(&self, fragment: &str) -> Route {
        let route = Route::parse(fragment);
        match &route {
            Route::Jobs => self.jobs.load(None).await,
            Route::Job(id) => self.jobs.load_one(id).await,
            Route::Executions => self.executions.load(None).await,
            Route::Execution(id) => self.executions.load_one(id).await,
            Route::Logs => self.logs.load(None).await,
        }
        route
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
