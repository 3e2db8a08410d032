//! Shared helpers for the behavioral specs.

use ow_client::{ApiConfig, Dashboard, FakeTransport, RecordingNotifier};
use std::sync::Arc;

pub const BASE: &str = "http://localhost:7777/api/v2";

pub struct World {
    pub transport: Arc<FakeTransport>,
    pub notifier: Arc<RecordingNotifier>,
    pub dashboard: Dashboard,
}

pub fn world() -> World {
    let transport = Arc::new(FakeTransport::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let dashboard = Dashboard::new(
        ApiConfig::new(BASE),
        transport.clone(),
        notifier.clone(),
    );
    World {
        transport,
        notifier,
        dashboard,
    }
}

pub fn job_value(id: &str, name: &str, trigger: serde_json::Value) -> serde_json::Value {
    let mut value = serde_json::json!({
        "job_id": id,
        "name": name,
        "job_class_string": "simple_scheduler.jobs.sample_job.AwesomeJob",
        "pub_args": [],
        "next_run_time": "2026-08-07T12:00:00+00:00"
    });
    if let (Some(object), Some(extra)) = (value.as_object_mut(), trigger.as_object()) {
        for (key, entry) in extra {
            object.insert(key.clone(), entry.clone());
        }
    }
    value
}

pub fn interval_trigger(seconds: u64) -> serde_json::Value {
    serde_json::json!({
        "trigger": "interval",
        "trigger_params": { "interval": seconds }
    })
}

pub fn cron_trigger() -> serde_json::Value {
    serde_json::json!({
        "trigger": "cron",
        "trigger_params": {
            "minute": "0",
            "hour": "2",
            "day": "*",
            "month": "*",
            "day_of_week": "*"
        }
    })
}
