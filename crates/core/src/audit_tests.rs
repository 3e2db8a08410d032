// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;
use yare::parameterized;

fn entry(event: &str, description: &str) -> AuditEntry {
    AuditEntry::from_value(&json!({
        "job_id": "j7",
        "job_name": "poll upstream",
        "event": event,
        "user": "nadia",
        "created_time": "2026-08-07T09:15:00+00:00",
        "description": description
    }))
    .unwrap()
}

#[parameterized(
    added = { "added", AuditEvent::Added },
    custom_run = { "custom_run", AuditEvent::CustomRun },
    paused = { "paused", AuditEvent::Paused },
    resumed = { "resumed", AuditEvent::Resumed },
    deleted = { "deleted", AuditEvent::Deleted },
    modified = { "modified", AuditEvent::Modified },
)]
fn event_parses_from_wire(wire_name: &str, event: AuditEvent) {
    assert_eq!(entry(wire_name, "").event, event);
    assert_eq!(event.to_string(), wire_name);
}

#[test]
fn job_name_links_to_the_job() {
    assert_eq!(
        entry("added", "").job_name_markup(),
        r#"<a href="/#jobs/j7">poll upstream</a>"#
    );
}

#[test]
fn event_markup_is_styled() {
    assert_eq!(
        entry("deleted", "").event_markup(),
        r#"<span class="failed-color">deleted</span>"#
    );
    assert_eq!(
        entry("resumed", "").event_markup(),
        r#"<span class="success-color">resumed</span>"#
    );
}

#[test]
fn custom_run_description_links_to_the_execution() {
    assert_eq!(
        entry("custom_run", "e42").description_markup(),
        r#"<a href="/#executions/e42">e42</a>"#
    );
}

#[test]
fn modified_description_passes_diff_text_through() {
    let diff = "<b>name</b>: old => new<br>";
    assert_eq!(entry("modified", diff).description_markup(), diff);
}

#[test]
fn other_descriptions_pass_through() {
    assert_eq!(entry("paused", "by hand").description_markup(), "by hand");
}

#[test]
fn event_time_renders_with_offset() {
    assert_eq!(
        entry("added", "").event_time_string(),
        "08/07/2026 09:15:00 +00:00"
    );
}

#[test]
fn unknown_event_is_an_item_error() {
    let err = AuditEntry::from_value(&json!({
        "job_id": "j7",
        "job_name": "x",
        "event": "exploded",
        "created_time": "2026-08-07T09:15:00+00:00"
    }))
    .unwrap_err();
    assert!(matches!(err, ParseError::Item { kind: ResourceKind::Logs, .. }));
}
