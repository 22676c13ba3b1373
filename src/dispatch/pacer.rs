//! Spacing of request starts under a requests-per-minute budget.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use super::limits::RateLimits;

/// Hands out start slots at least `interval` apart, shared by all workers.
#[derive(Debug)]
pub struct RequestPacer {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    pub fn for_limits(limits: &RateLimits) -> Self {
        Self::new(limits.request_interval())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until this caller's slot opens.
    pub async fn acquire(&self) {
        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = match *next {
                Some(at) if at > now => at,
                _ => now,
            };
            *next = Some(slot + self.interval);
            slot
        };

        tokio::time::sleep_until(slot).await;
    }
}
