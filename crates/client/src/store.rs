// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generic client-side cache of one resource kind
//!
//! A store owns its items, current URL, lifecycle phase, and a
//! monotonically increasing sequence counter. Every load is tagged with
//! the next sequence number; a response is applied only if it is still
//! the freshest issued load, so response latency can never put an older
//! table on screen. Mutations never touch `items` — consistency comes
//! from the unconditional reload that follows a successful mutation.

use crate::config::{ApiConfig, TimeRange};
use crate::notify::{NoticeKind, Notifier};
use crate::transport::{Method, Transport, TransportError};
use ow_core::{parse_envelope, Resource, SyncEvent, SyncPhase};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Receiver half of a store subscription.
pub type EventReceiver<R> = mpsc::UnboundedReceiver<SyncEvent<R>>;
type EventSender<R> = mpsc::UnboundedSender<SyncEvent<R>>;

/// Client-side cache of one entity kind plus its fetch/mutate lifecycle.
pub struct ResourceStore<R: Resource> {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
    inner: Mutex<StoreInner<R>>,
    subscribers: Mutex<Vec<EventSender<R>>>,
}

struct StoreInner<R> {
    items: Vec<R>,
    url: String,
    issued: u64,
    phase: SyncPhase,
}

impl<R: Resource> ResourceStore<R> {
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn Transport>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            transport,
            notifier,
            inner: Mutex::new(StoreInner {
                items: Vec::new(),
                url: String::new(),
                issued: 0,
                phase: SyncPhase::Idle,
            }),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe to lifecycle events. Every subscriber sees the same
    /// sequence of events; items arrive as cloned snapshots.
    pub fn subscribe(&self) -> EventReceiver<R> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        rx
    }

    /// Snapshot of the cached items.
    pub fn items(&self) -> Vec<R> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .items
            .clone()
    }

    pub fn phase(&self) -> SyncPhase {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).phase
    }

    /// URL of the most recently issued load.
    pub fn url(&self) -> String {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .url
            .clone()
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the whole collection, optionally restricted to a time range.
    /// Emits `Request` before the call; the response replaces `items`
    /// and emits `Sync` (or `Error`) only if no newer load was issued in
    /// the meantime.
    pub async fn load(&self, range: Option<&TimeRange>) {
        let url = self.config.collection_url(R::KIND, range);
        let seq = self.begin(url.clone());
        let result = self.transport.request(Method::Get, &url, None).await;
        self.apply(seq, result);
    }

    /// Fetch one entity by id. The response may be a bare object or a
    /// collection envelope; both normalize to a one-element cache.
    pub async fn load_one(&self, id: &str) {
        let url = self.config.item_url(R::KIND, id);
        let seq = self.begin(url.clone());
        let result = self.transport.request(Method::Get, &url, None).await;
        self.apply(seq, result);
    }

    /// Ask bound views to reload (user-initiated refresh).
    pub fn refresh(&self) {
        self.emit(SyncEvent::Reset);
    }

    /// Fire-and-forget mutation: on success notify and reload the whole
    /// collection; on failure notify with the server's error text and
    /// leave the cache untouched. There is nothing to roll back because
    /// nothing was optimistically applied.
    pub(crate) async fn mutate(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
        success: &str,
        failure: &str,
    ) {
        match self.transport.request(method, url, body).await {
            Ok(_) => {
                self.notifier.notify(NoticeKind::Success, success);
                self.load(None).await;
            }
            Err(err) => {
                self.notifier
                    .notify(NoticeKind::Error, &format!("{}\n{}", failure, err));
            }
        }
    }

    fn begin(&self, url: String) -> u64 {
        let seq = {
            let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            inner.issued += 1;
            inner.url = url;
            inner.phase = SyncPhase::Loading;
            inner.issued
        };
        self.emit(SyncEvent::Request);
        seq
    }

    fn apply(&self, seq: u64, result: Result<serde_json::Value, TransportError>) {
        let outcome = result
            .map_err(|e| e.to_string())
            .and_then(|body| parse_envelope::<R>(&body).map_err(|e| e.to_string()));

        let event = {
            let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            if seq != inner.issued {
                // A newer load was issued while this response was in
                // flight. Dropping it is invisible to the operator.
                tracing::trace!(
                    "discarding stale {} response (seq {}, latest {})",
                    R::KIND,
                    seq,
                    inner.issued
                );
                return;
            }
            match outcome {
                Ok(items) => {
                    inner.items = items.clone();
                    inner.phase = SyncPhase::Loaded;
                    SyncEvent::Sync { items }
                }
                Err(message) => {
                    inner.phase = SyncPhase::Failed;
                    SyncEvent::Error { message }
                }
            }
        };
        self.emit(event);
    }

    fn emit(&self, event: SyncEvent<R>) {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
