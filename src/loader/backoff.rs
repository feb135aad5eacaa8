//! Backoff Policy
//!
//! Shared retry-delay computation for the route factory and the retry
//! boundary.

use std::time::Duration;

/// Base delay for the first retry.
pub const BASE_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Ceiling on any computed delay.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Delay before the retry that follows `attempt` failures (0-based):
/// `base * 2^attempt`, capped at 30 seconds.
pub fn retry_delay(attempt: u32, base: Duration) -> Duration {
    // 2^16 * base already exceeds the cap for any sane base
    let factor = 2u32.saturating_pow(attempt.min(16));
    (base * factor).min(MAX_RETRY_DELAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_per_attempt() {
        assert_eq!(retry_delay(0, BASE_RETRY_DELAY), Duration::from_secs(1));
        assert_eq!(retry_delay(1, BASE_RETRY_DELAY), Duration::from_secs(2));
        assert_eq!(retry_delay(2, BASE_RETRY_DELAY), Duration::from_secs(4));
    }

    #[test]
    fn caps_at_thirty_seconds() {
        assert_eq!(retry_delay(10, BASE_RETRY_DELAY), Duration::from_secs(30));
        assert_eq!(retry_delay(u32::MAX, BASE_RETRY_DELAY), Duration::from_secs(30));
    }

    #[test]
    fn respects_custom_base() {
        assert_eq!(
            retry_delay(2, Duration::from_millis(250)),
            Duration::from_secs(1)
        );
    }
}
