//! Fixed-interval request spacing

use std::time::Duration;

use log::debug;
use tokio::time::Instant;

/// Enforces a minimum gap between the starts of consecutive requests
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    /// Limiter for a requests-per-minute ceiling (360/min gives ~167ms spacing)
    pub fn per_minute(requests_per_minute: u32) -> Self {
        let min_interval = Duration::from_secs(60) / requests_per_minute.max(1);
        Self::with_interval(min_interval)
    }

    pub fn with_interval(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until `min_interval` has passed since the previous call, then record now.
    /// The first call never waits.
    pub async fn throttle(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!("Rate limiter waiting {:?}", wait);
                tokio::time::sleep(wait).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}
