// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake transport for tests
//!
//! Replies are served in request order. A gated reply parks its request
//! until the gate is released, which lets a test complete responses out
//! of issue order and exercise the stores' sequence gating
//! deterministically.

use crate::transport::{Method, Transport, TransportError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// One request the fake transport served.
#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

struct Reply {
    gate: Option<Arc<Notify>>,
    result: Result<serde_json::Value, TransportError>,
}

/// Scripted [`Transport`] double.
#[derive(Default)]
pub struct FakeTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<SentRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply that completes immediately.
    pub fn reply(&self, result: Result<serde_json::Value, TransportError>) {
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Reply { gate: None, result });
    }

    /// Queue a reply that parks until the returned gate is notified.
    pub fn reply_gated(
        &self,
        result: Result<serde_json::Value, TransportError>,
    ) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(Reply {
                gate: Some(gate.clone()),
                result,
            });
        gate
    }

    /// Every request served so far, in arrival order.
    pub fn requests(&self) -> Vec<SentRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, TransportError> {
        let reply = self
            .replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(SentRequest {
                method,
                url: url.to_string(),
                body,
            });

        let reply = match reply {
            Some(reply) => reply,
            None => {
                return Err(TransportError::Network {
                    message: format!("no scripted reply for {} {}", method, url),
                })
            }
        };

        if let Some(gate) = reply.gate {
            gate.notified().await;
        }
        reply.result
    }
}
