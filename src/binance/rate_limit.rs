// =============================================================================
// Rate-Limit Tracker — monitors Binance API weight usage
// =============================================================================
//
// Binance allows 1200 request weight per minute. The screener is a short
// sequential run and stays far below that, but the tracker still reads the
// `X-MBX-USED-WEIGHT-1M` response header after every request and warns when
// usage crosses the threshold, so a grown symbol list cannot silently start
// drawing 429s.

use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, warn};

/// Weight usage at which a warning is emitted.
const WEIGHT_WARN_THRESHOLD: u32 = 800;

/// Tracks the exchange-reported request weight via an atomic counter.
#[derive(Default)]
pub struct RateLimitTracker {
    used_weight_1m: AtomicU32,
}

impl RateLimitTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the counter from the response headers returned by Binance.
    pub fn update_from_headers(&self, headers: &reqwest::header::HeaderMap) {
        let Some(weight) = headers
            .get("X-MBX-USED-WEIGHT-1M")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok())
        else {
            return;
        };

        let prev = self.used_weight_1m.swap(weight, Ordering::Relaxed);
        if weight >= WEIGHT_WARN_THRESHOLD && prev < WEIGHT_WARN_THRESHOLD {
            warn!(
                used_weight = weight,
                threshold = WEIGHT_WARN_THRESHOLD,
                "request weight crossed warning threshold"
            );
        } else {
            debug!(used_weight_1m = weight, "request weight updated");
        }
    }

    /// Most recent exchange-reported weight usage.
    pub fn used_weight(&self) -> u32 {
        self.used_weight_1m.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for RateLimitTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitTracker")
            .field("used_weight_1m", &self.used_weight())
            .finish()
    }
}
