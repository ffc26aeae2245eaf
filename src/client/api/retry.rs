//! Retry schedule for uploads.

use std::time::Duration;

/// Total attempts, including the first one.
pub const UPLOAD_ATTEMPTS: u32 = 3;

const BASE_DELAY_MS: u64 = 500;

/// Delay before retry number `retry` (1-based): 500 ms, then 1000 ms, doubling.
pub fn backoff_delay(retry: u32) -> Duration {
    let exponent = retry.saturating_sub(1).min(16);
    Duration::from_millis(BASE_DELAY_MS << exponent)
}

/// Network failures (status 0) and server errors are retried; client errors are not.
pub fn should_retry(status: u64) -> bool {
    !(400..500).contains(&status)
}
