//! Time source for lifecycle notifications.

/// Supplies the raw epoch-millisecond timestamps handed to the recorder.
///
/// Observers never read the system clock directly; they go through this
/// trait so tests can script exact timings.
pub trait Clock: Send + Sync {
    /// Current time as milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

/// Production clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        chrono::Utc::now().timestamp_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z in epoch milliseconds.
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn system_clock_does_not_go_backwards_much() {
        let a = SystemClock.now_ms();
        let b = SystemClock.now_ms();
        assert!(b >= a);
    }
}
