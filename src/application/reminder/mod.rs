//! Background reminder job and its scheduler loop.

mod job;

pub use job::{ReminderJob, SweepReport};

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;

/// Drives the reminder job on a fixed interval, concurrent with API
/// traffic. Sweep errors are logged and the loop keeps going.
pub async fn run_scheduler(job: Arc<ReminderJob>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        let now = Local::now().naive_local();
        if let Err(e) = job.run_once(now).await {
            tracing::error!(error = %e, "reminder sweep failed");
        }
    }
}
