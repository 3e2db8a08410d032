//! Router-driven loads across the three stores.

use crate::prelude::*;
use ow_core::Route;
use serde_json::json;

#[tokio::test]
async fn deep_links_load_their_stores() {
    let w = world();
    w.transport.reply(Ok(json!({ "jobs": [] })));
    w.transport.reply(Ok(json!({ "executions": [] })));
    w.transport.reply(Ok(json!({ "logs": [] })));
    w.transport
        .reply(Ok(job_value("j7", "poll", interval_trigger(60))));

    assert_eq!(w.dashboard.navigate("#jobs").await, Route::Jobs);
    assert_eq!(w.dashboard.navigate("#executions").await, Route::Executions);
    assert_eq!(w.dashboard.navigate("#logs").await, Route::Logs);
    assert_eq!(
        w.dashboard.navigate("#jobs/j7").await,
        Route::Job("j7".to_string())
    );

    let urls: Vec<String> = w.transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/jobs", BASE),
            format!("{}/executions", BASE),
            format!("{}/logs", BASE),
            format!("{}/jobs/j7", BASE),
        ]
    );

    // The single-job response was a bare object and still landed as a
    // one-element table.
    assert_eq!(w.dashboard.jobs().items().len(), 1);
}

#[tokio::test]
async fn unknown_fragments_fall_back_to_jobs() {
    let w = world();
    w.transport.reply(Ok(json!({ "jobs": [] })));

    let route = w.dashboard.navigate("#whatever/else").await;

    assert_eq!(route, Route::Jobs);
    assert_eq!(w.transport.requests()[0].url, format!("{}/jobs", BASE));
}

#[tokio::test]
async fn stores_stay_independent_across_tabs() {
    let w = world();
    w.transport.reply(Ok(json!({ "jobs": [
        job_value("j1", "poll", interval_trigger(60)),
    ]})));
    w.transport.reply(Ok(json!({ "executions": [] })));

    w.dashboard.navigate("#jobs").await;
    w.dashboard.navigate("#executions").await;

    // Loading executions did not disturb the jobs cache.
    assert_eq!(w.dashboard.jobs().items().len(), 1);
    assert!(w.dashboard.executions().items().is_empty());
}
