//! Waiting for bulk activities to finish.
//!
//! Bulk endpoints (`bulk.activities.add_contacts`, `export_contacts`, ...)
//! return an activity id immediately and process the job in the background.
//! [`wait_for`] samples the activity's status at a fixed interval until it
//! reports `COMPLETE` or `ERROR`.

use std::time::Duration;

use serde_json::json;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::clients::HttpResponse;
use crate::rest::errors::{BulkJobError, ResourceError};
use crate::rest::resource::ResourceTree;

/// Time between status samples when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Longest accepted time between status samples.
pub const MAX_POLL_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Resource path whose `get` action reports an activity's status.
pub const BULK_ACTIVITIES: &str = "bulk.activities";

/// Status of a bulk activity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BulkJobStatus {
    /// The activity finished successfully.
    Complete,
    /// The activity failed.
    Error,
    /// Any other state (`QUEUED`, `RUNNING`, ...), or no status at all.
    Pending(String),
}

impl BulkJobStatus {
    /// Reads the `status` field of an activity response.
    ///
    /// # Example
    ///
    /// ```rust
    /// use constant_contact::rest::BulkJobStatus;
    /// use constant_contact::HttpResponse;
    /// use std::collections::HashMap;
    ///
    /// let response = HttpResponse::new(
    ///     200,
    ///     HashMap::new(),
    ///     serde_json::json!({"id": "a07e1ilbm7shdg6ikeo", "status": "RUNNING"}),
    /// );
    /// assert_eq!(
    ///     BulkJobStatus::from_response(&response),
    ///     BulkJobStatus::Pending("RUNNING".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn from_response(response: &HttpResponse) -> Self {
        match response.body.get("status").and_then(|s| s.as_str()) {
            Some("COMPLETE") => Self::Complete,
            Some("ERROR") => Self::Error,
            Some(other) => Self::Pending(other.to_string()),
            None => Self::Pending(String::new()),
        }
    }

    /// Returns `true` for `Complete` and `Error`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Error)
    }
}

/// Options for [`wait_for`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulkWaitOptions {
    interval: Duration,
    max_polls: Option<u32>,
}

impl Default for BulkWaitOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_polls: None,
        }
    }
}

impl BulkWaitOptions {
    /// Creates options with the default interval and no poll limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time between samples.
    ///
    /// A zero interval is raised to 1 ms, and intervals longer than
    /// [`MAX_POLL_INTERVAL`] are lowered to it.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval.clamp(Duration::from_millis(1), MAX_POLL_INTERVAL);
        self
    }

    /// Fails with [`BulkJobError::PollLimitExceeded`] after `max_polls`
    /// samples that did not report a terminal status.
    ///
    /// At least one sample is always taken, so `0` behaves like `1`.
    #[must_use]
    pub const fn max_polls(mut self, max_polls: u32) -> Self {
        self.max_polls = Some(if max_polls == 0 { 1 } else { max_polls });
        self
    }

    /// Returns the sampling interval.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.interval
    }

    /// Returns the poll limit, if any.
    #[must_use]
    pub const fn poll_limit(&self) -> Option<u32> {
        self.max_polls
    }
}

/// Samples a bulk activity until it completes or fails.
///
/// The first sample is taken one interval after the call. A tree without
/// a `bulk.activities` resource fails immediately, before any sample.
/// Samples never overlap: the next tick is awaited only after the previous
/// lookup returned, and a late lookup delays the schedule rather than
/// bunching ticks.
///
/// Returns the `COMPLETE` status response.
///
/// # Errors
///
/// - [`BulkJobError::Failed`] if the activity reports `ERROR`
/// - [`BulkJobError::Request`] if a lookup fails, or the tree has no
///   `bulk.activities` resource with a `get` action
/// - [`BulkJobError::PollLimitExceeded`] if the poll limit was reached
pub async fn wait_for(
    tree: &ResourceTree,
    id: &str,
    options: BulkWaitOptions,
) -> Result<HttpResponse, BulkJobError> {
    let activities = tree
        .resource(BULK_ACTIVITIES)
        .ok_or_else(|| ResourceError::UnknownResource {
            path: BULK_ACTIVITIES.to_string(),
        })?;

    let period = options.poll_interval();
    let start = Instant::now()
        .checked_add(period)
        .unwrap_or_else(Instant::now);
    let mut ticker = interval_at(start, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut polls = 0u32;
    loop {
        ticker.tick().await;
        polls += 1;

        let response = activities.call("get", json!({ "id": id })).await?;
        let status = BulkJobStatus::from_response(&response);
        tracing::debug!("Bulk activity {} status after poll {}: {:?}", id, polls, status);

        match status {
            BulkJobStatus::Complete => return Ok(response),
            BulkJobStatus::Error => {
                tracing::warn!("Bulk activity {} reported ERROR", id);
                return Err(BulkJobError::Failed {
                    response: Box::new(response),
                });
            }
            BulkJobStatus::Pending(_) => {}
        }

        if options.poll_limit().is_some_and(|limit| polls >= limit) {
            return Err(BulkJobError::PollLimitExceeded { polls });
        }
    }
}
