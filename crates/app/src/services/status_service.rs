//! Status service — polls the station clock/thermometer and keeps the status
//! display current.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use trapcam_domain::status::{CaptureSchedule, StatusDisplay};

use crate::ports::{StatusSink, StatusSource};

/// Application service refreshing the status display.
///
/// Shares no state with the galleries; failures are logged and the previous
/// display is left as-is.
pub struct StatusService<S, K> {
    source: S,
    sink: K,
    schedule: CaptureSchedule,
}

impl<S: StatusSource, K: StatusSink> StatusService<S, K> {
    /// Create a new service reading from `source` and showing into `sink`.
    pub fn new(source: S, sink: K, schedule: CaptureSchedule) -> Self {
        Self {
            source,
            sink,
            schedule,
        }
    }

    /// Fetch one reading and show it.
    ///
    /// Returns the display that was shown, or `None` if the reading could
    /// not be fetched or projected.
    pub async fn refresh(&self) -> Option<StatusDisplay> {
        let reading = match self.source.fetch_status().await {
            Ok(reading) => reading,
            Err(err) => {
                tracing::error!(error = %err, "error fetching status");
                return None;
            }
        };
        match reading.to_display(&self.schedule) {
            Ok(display) => {
                self.sink.show_status(&display);
                Some(display)
            }
            Err(err) => {
                tracing::warn!(error = %err, time = %reading.time, "unusable status reading");
                None
            }
        }
    }

    /// Refresh every `period` until `shutdown` becomes `true` or its sender
    /// is dropped. The first refresh happens immediately.
    pub async fn run(&self, period: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                biased;
                _ = ticker.tick() => {
                    self.refresh().await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::debug!("status polling stopped");
                        break;
                    }
                }
            }
        }
    }
}
