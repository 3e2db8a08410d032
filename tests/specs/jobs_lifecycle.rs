//! Jobs table lifecycle: load, render, mutate, reload.

use crate::prelude::*;
use ow_client::{NoticeKind, RecordingScreen, TableView};
use ow_core::{Job, JobDraft, SyncEvent, SyncPhase, TriggerForm};
use serde_json::json;

#[tokio::test]
async fn loading_jobs_renders_both_schedule_kinds() {
    let w = world();
    w.transport.reply(Ok(json!({ "jobs": [
        job_value("j1", "interval job", interval_trigger(90061)),
        job_value("j2", "cron job", cron_trigger()),
    ]})));

    let mut rx = w.dashboard.jobs().subscribe();
    w.dashboard.jobs().load(None).await;

    let mut view = TableView::new();
    let mut screen = RecordingScreen::<Job>::new();
    view.drain(&mut rx, &mut screen);

    assert_eq!(view.phase(), SyncPhase::Loaded);
    assert_eq!(screen.cleared, 1);
    assert!(!screen.busy);

    let rendered = screen.last_rendered().unwrap();
    assert_eq!(rendered.len(), 2);
    assert_eq!(rendered[0].schedule_string(), "Interval: 1d 01h 01m 1.00s");
    assert_eq!(
        rendered[1].schedule_string(),
        "Cron: minute: 0, hour: 2, day: *, month: *, day of week: *"
    );
}

#[tokio::test]
async fn pausing_a_job_reloads_exactly_once_and_notifies_once() {
    let w = world();
    // Seed the table.
    w.transport.reply(Ok(json!({ "jobs": [
        job_value("j1", "poll", interval_trigger(60)),
    ]})));
    w.dashboard.jobs().load(None).await;
    let before = w.dashboard.jobs().items();

    // Pause ack, then the forced reload's response.
    w.transport.reply(Ok(json!({ "job_id": "j1" })));
    let mut paused = job_value("j1", "poll", interval_trigger(60));
    if let Some(object) = paused.as_object_mut() {
        object.insert("next_run_time".to_string(), json!(""));
    }
    w.transport.reply(Ok(json!({ "jobs": [paused] })));

    w.dashboard.jobs().set_paused("j1", true).await;

    let requests = w.transport.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].method, ow_client::Method::Patch);
    assert_eq!(requests[1].url, format!("{}/jobs/j1", BASE));
    assert_eq!(requests[2].method, ow_client::Method::Get);
    assert_eq!(requests[2].url, format!("{}/jobs", BASE));

    assert_eq!(
        w.notifier.notices(),
        vec![(
            NoticeKind::Success,
            "Success! Job becomes inactive.".to_string()
        )]
    );

    // The pause itself never touched the cache; only the reload did.
    assert!(before[0].is_active());
    let after = w.dashboard.jobs().items();
    assert!(!after[0].is_active());
}

#[tokio::test]
async fn validation_failures_never_reach_the_network() {
    let w = world();

    let reserved = JobDraft {
        name: "a$b".to_string(),
        job_class_string: "jobs.x".to_string(),
        pub_args: String::new(),
        trigger: TriggerForm::Cron {
            minute: "*".to_string(),
            hour: "*".to_string(),
            day: "*".to_string(),
            month: "*".to_string(),
            day_of_week: "*".to_string(),
        },
    };
    w.dashboard.jobs().create(&reserved).await;

    let bad_args = JobDraft {
        name: "fine".to_string(),
        job_class_string: "jobs.x".to_string(),
        pub_args: "not json".to_string(),
        trigger: TriggerForm::Interval {
            days: "0".to_string(),
            hours: "0".to_string(),
            minutes: "1".to_string(),
            seconds: "0".to_string(),
        },
    };
    w.dashboard.jobs().create(&bad_args).await;

    assert_eq!(w.transport.request_count(), 0);
    let notices = w.notifier.notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].1, "You cannot use \"$\". Please remove it.");
    assert_eq!(
        notices[1].1,
        "Invalid Arguments. Should be valid JSON string, e.g., [1, 2, \"hello\"]."
    );
}

#[tokio::test]
async fn a_failed_mutation_surfaces_the_server_text_and_changes_nothing() {
    let w = world();
    w.transport.reply(Ok(json!({ "jobs": [
        job_value("j1", "poll", interval_trigger(60)),
    ]})));
    w.dashboard.jobs().load(None).await;

    w.transport.reply(Err(ow_client::TransportError::Status {
        code: 400,
        message: "Job not found: j9".to_string(),
    }));
    w.dashboard.jobs().delete("j9").await;

    // No reload followed the failure.
    assert_eq!(w.transport.request_count(), 2);
    let notices = w.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].0, NoticeKind::Error);
    assert!(notices[0].1.contains("Job not found: j9"));
    assert_eq!(w.dashboard.jobs().items().len(), 1);
}

#[tokio::test]
async fn refresh_asks_views_to_reload() {
    let w = world();
    let mut rx = w.dashboard.jobs().subscribe();

    w.dashboard.jobs().refresh();

    let mut view = TableView::new();
    let mut screen = RecordingScreen::<Job>::new();
    let mut reload = false;
    while let Ok(event) = rx.try_recv() {
        reload |= view.apply(event, &mut screen);
    }
    assert!(reload);
    assert_eq!(w.transport.request_count(), 0);
}

#[tokio::test]
async fn run_now_posts_to_executions_and_reloads_jobs() {
    let w = world();
    w.transport.reply(Ok(json!({ "execution_id": "e1" })));
    w.transport.reply(Ok(json!({ "jobs": [] })));

    w.dashboard.jobs().run_now("j1").await;

    let requests = w.transport.requests();
    assert_eq!(requests[0].url, format!("{}/executions/j1", BASE));
    assert_eq!(requests[1].url, format!("{}/jobs", BASE));
    assert_eq!(
        w.notifier.notices()[0].1,
        "Success! Job is scheduled to run."
    );
}

#[tokio::test]
async fn every_bound_view_sees_the_same_lifecycle() {
    let w = world();
    w.transport.reply(Ok(json!({ "jobs": [
        job_value("j1", "poll", interval_trigger(60)),
    ]})));

    let mut table_rx = w.dashboard.jobs().subscribe();
    let mut stats_rx = w.dashboard.jobs().subscribe();
    w.dashboard.jobs().load(None).await;

    let mut events = Vec::new();
    while let Ok(event) = table_rx.try_recv() {
        events.push(event);
    }
    let mut stats_events = Vec::new();
    while let Ok(event) = stats_rx.try_recv() {
        stats_events.push(event);
    }

    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], SyncEvent::Request));
    assert!(matches!(events[1], SyncEvent::Sync { .. }));
    assert_eq!(events, stats_events);
}
