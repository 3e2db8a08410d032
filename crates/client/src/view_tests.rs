// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::config::ApiConfig;
use crate::fake::FakeTransport;
use crate::notify::RecordingNotifier;
use crate::store::ResourceStore;
use ow_core::Job;
use serde_json::json;
use std::sync::Arc;

#[test]
fn request_clears_and_shows_busy() {
    let mut view = TableView::new();
    let mut screen = RecordingScreen::<u32>::new();

    let reload = view.apply(SyncEvent::Request, &mut screen);

    assert!(!reload);
    assert_eq!(view.phase(), SyncPhase::Loading);
    assert_eq!(screen.cleared, 1);
    assert!(screen.busy);
}

#[test]
fn sync_hides_busy_and_renders() {
    let mut view = TableView::new();
    let mut screen = RecordingScreen::<u32>::new();

    view.apply(SyncEvent::Request, &mut screen);
    view.apply(SyncEvent::Sync { items: vec![1, 2, 3] }, &mut screen);

    assert_eq!(view.phase(), SyncPhase::Loaded);
    assert!(!screen.busy);
    assert_eq!(screen.last_rendered(), Some(&vec![1, 2, 3]));
}

#[test]
fn error_hides_busy_and_surfaces_the_text() {
    let mut view = TableView::new();
    let mut screen = RecordingScreen::<u32>::new();

    view.apply(SyncEvent::Request, &mut screen);
    view.apply(
        SyncEvent::Error { message: "scheduler exploded".to_string() },
        &mut screen,
    );

    assert_eq!(view.phase(), SyncPhase::Failed);
    assert!(!screen.busy);
    assert_eq!(screen.errors, vec!["scheduler exploded".to_string()]);
    assert!(screen.rendered.is_empty());
}

#[test]
fn reset_requests_a_reload() {
    let mut view = TableView::new();
    let mut screen = RecordingScreen::<u32>::new();

    assert!(view.apply(SyncEvent::Reset, &mut screen));
    assert_eq!(view.phase(), SyncPhase::Idle);
}

#[tokio::test]
async fn drain_consumes_a_whole_load_cycle() {
    let transport = Arc::new(FakeTransport::new());
    transport.reply(Ok(json!({ "jobs": [{
        "job_id": "a",
        "name": "poll",
        "job_class_string": "jobs.x",
        "pub_args": [],
        "trigger": "interval",
        "trigger_params": { "interval": 90061 },
        "next_run_time": "2026-08-07T12:00:00+00:00"
    }]})));

    let store = ResourceStore::<Job>::new(
        ApiConfig::new("http://localhost:7777/api/v2"),
        transport,
        Arc::new(RecordingNotifier::new()),
    );
    let mut rx = store.subscribe();
    store.load(None).await;

    let mut view = TableView::new();
    let mut screen = RecordingScreen::<Job>::new();
    let reload = view.drain(&mut rx, &mut screen);

    assert!(!reload);
    assert_eq!(view.phase(), SyncPhase::Loaded);
    assert_eq!(screen.cleared, 1);
    assert!(!screen.busy);
    let rendered = screen.last_rendered().unwrap();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].schedule_string(), "Interval: 1d 01h 01m 1.00s");
}

#[tokio::test]
async fn two_views_of_one_store_converge() {
    let transport = Arc::new(FakeTransport::new());
    transport.reply(Err(crate::transport::TransportError::Network {
        message: "down".to_string(),
    }));

    let store = ResourceStore::<Job>::new(
        ApiConfig::new("http://localhost:7777/api/v2"),
        transport,
        Arc::new(RecordingNotifier::new()),
    );
    let mut first_rx = store.subscribe();
    let mut second_rx = store.subscribe();
    store.load(None).await;

    let mut first = TableView::new();
    let mut second = TableView::new();
    let mut first_screen = RecordingScreen::<Job>::new();
    let mut second_screen = RecordingScreen::<Job>::new();

    first.drain(&mut first_rx, &mut first_screen);
    second.drain(&mut second_rx, &mut second_screen);

    assert_eq!(first.phase(), SyncPhase::Failed);
    assert_eq!(second.phase(), SyncPhase::Failed);
    assert_eq!(first_screen.errors, second_screen.errors);
}
