//! Request pacing for the Strava API.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Minimum-interval gate between consecutive API requests.
///
/// Strava throttles aggressive clients, so every outgoing request first
/// waits until at least `min_interval` has passed since the previous one.
/// A zero interval disables the gate.
#[derive(Debug)]
pub struct RequestPacer {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Wait out the remainder of the interval, then claim the next slot.
    pub async fn pace(&self) {
        if self.min_interval.is_zero() {
            return;
        }

        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                tracing::debug!("Pacing API request, waiting {:?}", wait);
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }
}
