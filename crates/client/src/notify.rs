// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification seam
//!
//! Mutations and validation failures surface through this capability;
//! the toast widgets themselves live outside the client.

/// Severity of an operator notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Consumer of operator notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Routes notifications to the tracing log; the headless default.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => tracing::info!("{}", message),
            NoticeKind::Error => tracing::error!("{}", message),
        }
    }
}

/// Captures notifications for assertions.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: std::sync::Mutex<Vec<(NoticeKind, String)>>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn count(&self, kind: NoticeKind) -> usize {
        self.notices().iter().filter(|(k, _)| *k == kind).count()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((kind, message.to_string()));
    }
}
