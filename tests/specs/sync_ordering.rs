//! Out-of-order response handling: the freshest issued load always wins.

use crate::prelude::*;
use ow_client::Dashboard;
use std::sync::Arc;
use std::time::Duration;

async fn wait_for(condition: impl Fn() -> bool) {
    for _ in 0..500 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!("condition not met in time");
}

#[tokio::test]
async fn a_slow_earlier_response_cannot_overwrite_a_later_one() {
    let w = world();
    let dashboard = Arc::new(w.dashboard);

    // The first load's response is parked; the second completes at once.
    let gate = w.transport.reply_gated(Ok(serde_json::json!({ "jobs": [
        job_value("j-old", "stale snapshot", interval_trigger(60)),
    ]})));
    w.transport.reply(Ok(serde_json::json!({ "jobs": [
        job_value("j-new", "fresh snapshot", interval_trigger(60)),
    ]})));

    let first = {
        let dashboard: Arc<Dashboard> = dashboard.clone();
        tokio::spawn(async move { dashboard.jobs().load(None).await })
    };
    {
        let transport = w.transport.clone();
        wait_for(move || transport.request_count() == 1).await;
    }

    dashboard.jobs().load(None).await;
    let fresh: Vec<String> = dashboard
        .jobs()
        .items()
        .iter()
        .map(|j| j.job_id.clone())
        .collect();
    assert_eq!(fresh, ["j-new"]);

    // Release the slow response; it arrives after the fresh one.
    gate.notify_one();
    let _ = first.await;

    let after: Vec<String> = dashboard
        .jobs()
        .items()
        .iter()
        .map(|j| j.job_id.clone())
        .collect();
    assert_eq!(after, ["j-new"]);

    // Staleness is invisible: no notification was raised.
    assert!(w.notifier.notices().is_empty());
}
