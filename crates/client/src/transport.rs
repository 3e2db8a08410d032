// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transport seam
//!
//! Stores depend on this trait, not on an HTTP client, so the whole
//! lifecycle is testable without a server. Retry and backoff are out of
//! scope by design: the operator repeats the action.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// HTTP verbs the scheduler API uses. `Options` is the resume verb —
/// the scheduler distinguishes resume from pause by method, not path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport failures. Display is the text surfaced to the operator, so
/// a status failure shows the raw server message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{message}")]
    Status { code: u16, message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("malformed response: {message}")]
    Malformed { message: String },
}

/// Asynchronous request/response seam to the scheduler API.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, TransportError>;
}

/// Production transport over `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, TransportError> {
        let method = reqwest::Method::from_bytes(method.as_str().as_bytes())
            .map_err(|e| TransportError::Network { message: e.to_string() })?;

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network { message: e.to_string() })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network { message: e.to_string() })?;

        if !status.is_success() {
            return Err(TransportError::Status {
                code: status.as_u16(),
                message: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| TransportError::Malformed {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
