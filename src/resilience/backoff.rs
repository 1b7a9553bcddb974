//! Exponential backoff with jitter.

use rand::Rng;
use std::time::Duration;

/// Calculate exponential backoff delay with jitter.
pub fn calculate_backoff(attempt: u32, base_ms: u64, max_ms: u64) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(attempt - 1);
    let delay_ms = base_ms.saturating_mul(exponential_base);
    let capped_delay = delay_ms.min(max_ms);

    // Apply jitter (0 to 10% of the delay)
    let jitter_range = capped_delay / 10;
    let jitter = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped_delay + jitter)
}

/// Iterator-like schedule of poll delays for a bounded wait.
#[derive(Debug, Clone)]
pub struct PollSchedule {
    attempt: u32,
    base_ms: u64,
    max_ms: u64,
}

impl PollSchedule {
    pub fn new(base_ms: u64, max_ms: u64) -> Self {
        Self {
            attempt: 0,
            base_ms,
            max_ms,
        }
    }

    /// Delay before the next poll. The first poll happens immediately.
    pub fn next_delay(&mut self) -> Duration {
        let delay = calculate_backoff(self.attempt, self.base_ms, self.max_ms);
        self.attempt = self.attempt.saturating_add(1);
        delay
    }

    pub fn attempts(&self) -> u32 {
        self.attempt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_calculation() {
        let b1 = calculate_backoff(1, 100, 2000);
        assert!(b1.as_millis() >= 100);

        let b2 = calculate_backoff(2, 100, 2000);
        assert!(b2.as_millis() >= 200);

        let max = calculate_backoff(10, 100, 1000);
        assert!(max.as_millis() >= 1000);
        assert!(max.as_millis() < 1100);
    }

    #[test]
    fn test_poll_schedule_starts_immediately() {
        let mut schedule = PollSchedule::new(50, 400);
        assert_eq!(schedule.next_delay(), Duration::ZERO);
        assert!(schedule.next_delay() >= Duration::from_millis(50));
        assert!(schedule.next_delay() >= Duration::from_millis(100));
        assert_eq!(schedule.attempts(), 3);
    }
}
