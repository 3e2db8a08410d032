// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ow-client: Resource synchronization layer for the ow dashboard
//!
//! Stores fetch over an async `Transport`, gate responses with a
//! per-store sequence token so an older response can never clobber a
//! newer one, and fan lifecycle events out to any number of bound views.
//! Mutations are fire-and-forget: validate, send, notify, then reload
//! the whole collection.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
pub mod dashboard;
pub mod jobs;
pub mod notify;
pub mod store;
pub mod transport;
pub mod view;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

// Re-exports
pub use config::{ApiConfig, TimeRange};
pub use dashboard::Dashboard;
pub use jobs::JobStore;
pub use notify::{LogNotifier, NoticeKind, Notifier};
pub use store::{EventReceiver, ResourceStore};
pub use transport::{HttpTransport, Method, Transport, TransportError};
pub use view::{Screen, TableView};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTransport, SentRequest};
#[cfg(any(test, feature = "test-support"))]
pub use notify::RecordingNotifier;
#[cfg(any(test, feature = "test-support"))]
pub use view::RecordingScreen;
