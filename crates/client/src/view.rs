// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! View binding: store events in, screen effects out
//!
//! The rendering widgets live outside this crate; a view only needs the
//! [`Screen`] capabilities. The binding runs the sync lifecycle machine,
//! so any number of views bound to one store converge on the same
//! terminal state.

use crate::store::EventReceiver;
use ow_core::{SyncEvent, SyncPhase, ViewEffect};

/// Rendering capabilities a bound view consumes.
pub trait Screen<R>: Send {
    fn clear(&mut self);
    fn set_busy(&mut self, busy: bool);
    fn render(&mut self, items: &[R]);
    fn show_error(&mut self, message: &str);
}

/// Binds one store's event stream to a screen.
#[derive(Debug, Default)]
pub struct TableView {
    phase: SyncPhase,
}

impl TableView {
    pub fn new() -> Self {
        Self {
            phase: SyncPhase::Idle,
        }
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Apply one store event to the screen. Returns true when the
    /// binding owner must re-issue `load()` on its store (an explicit
    /// reset — the store reloads itself after its own mutations).
    pub fn apply<R: Clone>(&mut self, event: SyncEvent<R>, screen: &mut dyn Screen<R>) -> bool {
        let (next, effects) = self.phase.transition(event);
        self.phase = next;

        let mut reload = false;
        for effect in effects {
            match effect {
                ViewEffect::ClearDisplay => screen.clear(),
                ViewEffect::ShowBusy => screen.set_busy(true),
                ViewEffect::HideBusy => screen.set_busy(false),
                ViewEffect::Render { items } => screen.render(&items),
                ViewEffect::ShowError { message } => screen.show_error(&message),
                ViewEffect::Reload => reload = true,
            }
        }
        reload
    }

    /// Drain every queued event from a subscription into the screen.
    /// Returns true if any event asked for a reload.
    pub fn drain<R: Clone>(
        &mut self,
        rx: &mut EventReceiver<R>,
        screen: &mut dyn Screen<R>,
    ) -> bool {
        let mut reload = false;
        while let Ok(event) = rx.try_recv() {
            reload |= self.apply(event, screen);
        }
        reload
    }
}

/// Captures screen calls for assertions.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug)]
pub struct RecordingScreen<R> {
    pub cleared: usize,
    pub busy: bool,
    pub busy_changes: Vec<bool>,
    pub rendered: Vec<Vec<R>>,
    pub errors: Vec<String>,
}

#[cfg(any(test, feature = "test-support"))]
impl<R> Default for RecordingScreen<R> {
    fn default() -> Self {
        Self {
            cleared: 0,
            busy: false,
            busy_changes: Vec::new(),
            rendered: Vec::new(),
            errors: Vec::new(),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl<R> RecordingScreen<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent rendered snapshot, if any.
    pub fn last_rendered(&self) -> Option<&Vec<R>> {
        self.rendered.last()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl<R: Clone + Send> Screen<R> for RecordingScreen<R> {
    fn clear(&mut self) {
        self.cleared += 1;
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.busy_changes.push(busy);
    }

    fn render(&mut self, items: &[R]) {
        self.rendered.push(items.to_vec());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
