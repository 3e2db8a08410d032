// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal implementations of the client's screen and notifier seams

use crate::output::{self, OutputFormat};
use ow_client::{NoticeKind, Notifier, Screen};
use serde::Serialize;
use std::fmt;

/// Renders one resource table to the terminal. A one-shot command has
/// nothing to clear and no spinner to spin, so those effects are
/// accepted and dropped.
pub struct TableScreen<T, Row> {
    format: OutputFormat,
    row: fn(&T) -> Row,
}

impl<T, Row> TableScreen<T, Row> {
    pub fn new(format: OutputFormat, row: fn(&T) -> Row) -> Self {
        Self { format, row }
    }
}

impl<T, Row> Screen<T> for TableScreen<T, Row>
where
    T: Serialize + Send,
    Row: fmt::Display,
{
    fn clear(&mut self) {}

    fn set_busy(&mut self, _busy: bool) {}

    fn render(&mut self, items: &[T]) {
        output::print_items(items, self.format, self.row);
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {}", message);
    }
}

/// Prints notifications where an operator at a terminal will see them.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => println!("{}", message),
            NoticeKind::Error => eprintln!("{}", message),
        }
    }
}
