// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger model for scheduled jobs
//!
//! A job fires on exactly one of two mutually exclusive schedule kinds:
//! a cron-style calendar expression or a fixed recurring interval. The
//! wire encoding is adjacently tagged (`trigger` + `trigger_params`), and
//! the display contracts here are exact: downstream tables sort and diff
//! on the rendered strings.

use crate::draft::ValidationError;
use serde::{Deserialize, Serialize};

const SECONDS_PER_YEAR: u64 = 31_536_000; // 365-day year, display only
const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Schedule of a job, as stored and sent on the wire.
///
/// Cron fields are kept verbatim as field expressions (digit, `*`, or
/// range/list syntax); the scheduler validates them server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "trigger", content = "trigger_params", rename_all = "snake_case")]
pub enum Trigger {
    Cron {
        minute: String,
        hour: String,
        day: String,
        month: String,
        day_of_week: String,
    },
    Interval {
        #[serde(rename = "interval")]
        seconds: u64,
    },
}

impl Trigger {
    /// Human-readable schedule string for table rendering.
    pub fn schedule_string(&self) -> String {
        match self {
            Trigger::Cron {
                minute,
                hour,
                day,
                month,
                day_of_week,
            } => format!(
                "Cron: minute: {}, hour: {}, day: {}, month: {}, day of week: {}",
                minute, hour, day, month, day_of_week
            ),
            Trigger::Interval { seconds } => {
                format!("Interval: {}", format_duration(*seconds))
            }
        }
    }
}

/// Render a duration in whole seconds as `"1d 02h 00m 5.00s"`.
///
/// Leading zero units are skipped; the first non-zero unit prints
/// unpadded and every later unit prints zero-padded to two digits.
/// Seconds always print with two decimals. `"< 1s"` is returned iff the
/// total is under one second. The years unit (365-day year) exists only
/// here; the edit-form decomposition in [`IntervalParts`] has no years
/// bucket, and the two are deliberately not inverses for durations of a
/// year or more.
pub fn format_duration(total: u64) -> String {
    if total < 1 {
        return "< 1s".to_string();
    }

    let years = total / SECONDS_PER_YEAR;
    let mut rem = total % SECONDS_PER_YEAR;
    let days = rem / SECONDS_PER_DAY;
    rem %= SECONDS_PER_DAY;
    let hours = rem / SECONDS_PER_HOUR;
    rem %= SECONDS_PER_HOUR;
    let minutes = rem / SECONDS_PER_MINUTE;
    let seconds = rem % SECONDS_PER_MINUTE;

    let mut parts: Vec<String> = Vec::new();
    for (value, suffix) in [(years, "y"), (days, "d"), (hours, "h"), (minutes, "m")] {
        if parts.is_empty() && value == 0 {
            continue;
        }
        if parts.is_empty() {
            parts.push(format!("{}{}", value, suffix));
        } else {
            parts.push(format!("{:02}{}", value, suffix));
        }
    }
    parts.push(format!("{:.2}s", seconds as f64));
    parts.join(" ")
}

/// Interval duration decomposed for the edit form.
///
/// Truncating division, no years bucket. For totals under one modeled
/// year, `from_total` and `total_seconds` round-trip exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl IntervalParts {
    /// Decompose a total in seconds into edit-form fields.
    pub fn from_total(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Collapse edit-form fields back to a wire total in seconds.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

/// Raw user input for a trigger, as captured by the add/edit forms.
///
/// Conversion to [`Trigger`] is where client-side validation happens:
/// cron fields must be non-empty (nothing further — the scheduler owns
/// cron semantics) and interval fields must parse as whole numbers. A
/// malformed numeric field is an error, never a silent zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerForm {
    Cron {
        minute: String,
        hour: String,
        day: String,
        month: String,
        day_of_week: String,
    },
    Interval {
        days: String,
        hours: String,
        minutes: String,
        seconds: String,
    },
}

impl TriggerForm {
    /// Convert form input to a wire trigger.
    pub fn to_trigger(&self) -> Result<Trigger, ValidationError> {
        match self {
            TriggerForm::Cron {
                minute,
                hour,
                day,
                month,
                day_of_week,
            } => {
                let fields = [
                    ("minute", minute),
                    ("hour", hour),
                    ("day", day),
                    ("month", month),
                    ("day of week", day_of_week),
                ];
                for (field, value) in fields {
                    if value.trim().is_empty() {
                        return Err(ValidationError::MissingCronField { field });
                    }
                }
                Ok(Trigger::Cron {
                    minute: minute.trim().to_string(),
                    hour: hour.trim().to_string(),
                    day: day.trim().to_string(),
                    month: month.trim().to_string(),
                    day_of_week: day_of_week.trim().to_string(),
                })
            }
            TriggerForm::Interval {
                days,
                hours,
                minutes,
                seconds,
            } => {
                let parts = IntervalParts {
                    days: parse_numeric_field("days", days)?,
                    hours: parse_numeric_field("hours", hours)?,
                    minutes: parse_numeric_field("minutes", minutes)?,
                    seconds: parse_numeric_field("seconds", seconds)?,
                };
                Ok(Trigger::Interval {
                    seconds: parts.total_seconds(),
                })
            }
        }
    }

    /// Pre-fill form fields from an existing trigger, for the edit flow.
    pub fn from_trigger(trigger: &Trigger) -> Self {
        match trigger {
            Trigger::Cron {
                minute,
                hour,
                day,
                month,
                day_of_week,
            } => TriggerForm::Cron {
                minute: minute.clone(),
                hour: hour.clone(),
                day: day.clone(),
                month: month.clone(),
                day_of_week: day_of_week.clone(),
            },
            Trigger::Interval { seconds } => {
                let parts = IntervalParts::from_total(*seconds);
                TriggerForm::Interval {
                    days: parts.days.to_string(),
                    hours: parts.hours.to_string(),
                    minutes: parts.minutes.to_string(),
                    seconds: parts.seconds.to_string(),
                }
            }
        }
    }
}

fn parse_numeric_field(field: &'static str, value: &str) -> Result<u64, ValidationError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidNumber { field })
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
