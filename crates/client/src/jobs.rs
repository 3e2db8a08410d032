// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jobs store: the collection plus every operator action
//!
//! Create and modify validate the draft before anything touches the
//! network; a validation failure notifies and stops there. Successful
//! mutations never patch the cache — they notify and reload.

use crate::config::{ApiConfig, TimeRange};
use crate::notify::{NoticeKind, Notifier};
use crate::store::{EventReceiver, ResourceStore};
use crate::transport::{Method, Transport};
use ow_core::job::{active_count, inactive_count};
use ow_core::{Job, JobDraft, ResourceKind, SyncPhase};
use std::sync::Arc;

/// Cache of the jobs collection plus create/update/delete/pause/resume/
/// run actions.
pub struct JobStore {
    store: ResourceStore<Job>,
    config: ApiConfig,
    notifier: Arc<dyn Notifier>,
}

impl JobStore {
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store: ResourceStore::new(config.clone(), transport, notifier.clone()),
            config,
            notifier,
        }
    }

    pub fn subscribe(&self) -> EventReceiver<Job> {
        self.store.subscribe()
    }

    pub fn items(&self) -> Vec<Job> {
        self.store.items()
    }

    pub fn phase(&self) -> SyncPhase {
        self.store.phase()
    }

    pub fn url(&self) -> String {
        self.store.url()
    }

    pub fn refresh(&self) {
        self.store.refresh()
    }

    pub async fn load(&self, range: Option<&TimeRange>) {
        self.store.load(range).await
    }

    pub async fn load_one(&self, id: &str) {
        self.store.load_one(id).await
    }

    /// `POST /jobs`.
    pub async fn create(&self, draft: &JobDraft) {
        let payload = match self.validated(draft) {
            Some(payload) => payload,
            None => return,
        };
        let url = self.config.collection_url(ResourceKind::Jobs, None);
        self.store
            .mutate(
                Method::Post,
                &url,
                Some(payload),
                "Success! Job is added.",
                "Failed to add the job.",
            )
            .await;
    }

    /// `PUT /jobs/:id`.
    pub async fn update(&self, id: &str, draft: &JobDraft) {
        let payload = match self.validated(draft) {
            Some(payload) => payload,
            None => return,
        };
        let url = self.config.item_url(ResourceKind::Jobs, id);
        self.store
            .mutate(
                Method::Put,
                &url,
                Some(payload),
                "Success! Job is modified.",
                "Failed to modify the job.",
            )
            .await;
    }

    /// `DELETE /jobs/:id`.
    pub async fn delete(&self, id: &str) {
        let url = self.config.item_url(ResourceKind::Jobs, id);
        self.store
            .mutate(
                Method::Delete,
                &url,
                None,
                "Success! Job is deleted.",
                "Failed to delete the job.",
            )
            .await;
    }

    /// Pause (`PATCH /jobs/:id`) or resume (`OPTIONS /jobs/:id` — the
    /// scheduler's distinct resume verb).
    pub async fn set_paused(&self, id: &str, paused: bool) {
        let url = self.config.item_url(ResourceKind::Jobs, id);
        if paused {
            self.store
                .mutate(
                    Method::Patch,
                    &url,
                    None,
                    "Success! Job becomes inactive.",
                    "Failed to pause the job.",
                )
                .await;
        } else {
            self.store
                .mutate(
                    Method::Options,
                    &url,
                    None,
                    "Success! Job becomes active.",
                    "Failed to resume the job.",
                )
                .await;
        }
    }

    /// Ad-hoc run: `POST /executions/:job_id`.
    pub async fn run_now(&self, id: &str) {
        let url = self.config.run_url(id);
        self.store
            .mutate(
                Method::Post,
                &url,
                None,
                "Success! Job is scheduled to run.",
                "Failed to schedule the job.",
            )
            .await;
    }

    pub fn total(&self) -> usize {
        self.store.items().len()
    }

    pub fn active_count(&self) -> usize {
        active_count(&self.store.items())
    }

    pub fn inactive_count(&self) -> usize {
        inactive_count(&self.store.items())
    }

    fn validated(&self, draft: &JobDraft) -> Option<serde_json::Value> {
        let payload = match draft.validate() {
            Ok(payload) => payload,
            Err(err) => {
                self.notifier.notify(NoticeKind::Error, &err.to_string());
                return None;
            }
        };
        match serde_json::to_value(&payload) {
            Ok(value) => Some(value),
            Err(err) => {
                self.notifier.notify(NoticeKind::Error, &err.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
