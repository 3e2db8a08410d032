// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print items either as Display rows or as a pretty JSON array of the
/// wire entities.
pub fn print_items<T, Row>(items: &[T], format: OutputFormat, row: fn(&T) -> Row)
where
    T: Serialize,
    Row: fmt::Display,
{
    match format {
        OutputFormat::Text => {
            for item in items {
                println!("{}", row(item));
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(items) {
                println!("{}", json);
            }
        }
    }
}

/// Print a stats footer line in text mode; JSON mode stays machine-clean.
pub fn print_footer(format: OutputFormat, line: &str) {
    if let OutputFormat::Text = format {
        println!();
        println!("{}", line);
    }
}
