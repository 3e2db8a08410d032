// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ow_core::Trigger;

fn fields() -> JobFields {
    JobFields {
        name: "poll upstream".to_string(),
        task: "jobs.curl_job.CurlJob".to_string(),
        args: "".to_string(),
        minute: "*".to_string(),
        hour: "*".to_string(),
        day: "*".to_string(),
        month: "*".to_string(),
        day_of_week: "*".to_string(),
        every_days: None,
        every_hours: None,
        every_minutes: None,
        every_seconds: None,
    }
}

#[test]
fn defaults_build_a_cron_draft() {
    let draft = fields().draft();
    assert_eq!(
        draft.trigger.to_trigger(),
        Ok(Trigger::Cron {
            minute: "*".to_string(),
            hour: "*".to_string(),
            day: "*".to_string(),
            month: "*".to_string(),
            day_of_week: "*".to_string(),
        })
    );
}

#[test]
fn any_every_flag_switches_to_interval() {
    let mut fields = fields();
    fields.every_minutes = Some("5".to_string());

    let draft = fields.draft();
    assert_eq!(
        draft.trigger.to_trigger(),
        Ok(Trigger::Interval { seconds: 300 })
    );
}

#[test]
fn unset_interval_fields_default_to_zero() {
    let mut fields = fields();
    fields.every_days = Some("1".to_string());
    fields.every_seconds = Some("1".to_string());

    let draft = fields.draft();
    assert_eq!(
        draft.trigger.to_trigger(),
        Ok(Trigger::Interval { seconds: 86401 })
    );
}

#[test]
fn draft_carries_the_raw_args_text() {
    let mut fields = fields();
    fields.args = r#"[1, 2, "hello"]"#.to_string();
    assert_eq!(fields.draft().pub_args, r#"[1, 2, "hello"]"#);
}
