// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource kinds and response-envelope parsing
//!
//! Collection endpoints wrap their items as `{"<kind>": [...]}`; the
//! single-item endpoints return a bare object. Both shapes normalize to
//! a sequence here so the stores never branch on them.

use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;

/// The three resource kinds served by the scheduler API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Jobs,
    Executions,
    Logs,
}

impl ResourceKind {
    /// Key wrapping collection responses, e.g. `{"jobs": [...]}`.
    pub fn envelope_key(&self) -> &'static str {
        match self {
            ResourceKind::Jobs => "jobs",
            ResourceKind::Executions => "executions",
            ResourceKind::Logs => "logs",
        }
    }

    /// Path segment under the API base, e.g. `/jobs`.
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Jobs => "/jobs",
            ResourceKind::Executions => "/executions",
            ResourceKind::Logs => "/logs",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.envelope_key())
    }
}

/// Response-shape errors. An unrecognized shape surfaces to the operator
/// the same way a transport failure does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognized response shape for {kind}")]
    UnrecognizedShape { kind: ResourceKind },

    #[error("malformed {kind} entry: {message}")]
    Item { kind: ResourceKind, message: String },
}

/// An entity kind the client caches: jobs, executions, or audit logs.
pub trait Resource: Clone + Send + Sync + Sized + 'static {
    const KIND: ResourceKind;

    /// Build one entity from its wire object.
    fn from_value(value: &serde_json::Value) -> Result<Self, ParseError>;
}

/// Decode one wire object via serde, mapping failures to [`ParseError`].
pub(crate) fn decode<T: DeserializeOwned>(
    kind: ResourceKind,
    value: &serde_json::Value,
) -> Result<T, ParseError> {
    serde_json::from_value(value.clone()).map_err(|e| ParseError::Item {
        kind,
        message: e.to_string(),
    })
}

/// Parse a response body into a sequence of entities.
///
/// A body carrying the envelope key must hold an array; a bare object is
/// a single-item response and normalizes to a one-element sequence.
pub fn parse_envelope<R: Resource>(body: &serde_json::Value) -> Result<Vec<R>, ParseError> {
    if let Some(wrapped) = body.get(R::KIND.envelope_key()) {
        let items = wrapped
            .as_array()
            .ok_or(ParseError::UnrecognizedShape { kind: R::KIND })?;
        return items.iter().map(R::from_value).collect();
    }

    if body.is_object() {
        return Ok(vec![R::from_value(body)?]);
    }

    Err(ParseError::UnrecognizedShape { kind: R::KIND })
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
