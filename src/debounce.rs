//! Single-slot input debouncing
//!
//! Holds at most one pending value. Queueing replaces the slot and restarts
//! the quiet period, so only the latest value is ever released, at most once.
//! Time is an explicit argument so tests can advance it without sleeping.

use std::time::{Duration, Instant};

pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Queue a value, replacing any pending one and restarting the delay
    pub fn queue(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Release the pending value once it has been stable for the delay
    pub fn take_ready(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((_, queued_at)) if now.duration_since(queued_at) >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// True while a value is waiting out the quiet period
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard any pending value without releasing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_debouncer_waits_for_quiet_period() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();

        debouncer.queue("a", t0);
        assert_eq!(debouncer.take_ready(t0 + Duration::from_millis(299)), None);
        assert_eq!(
            debouncer.take_ready(t0 + Duration::from_millis(300)),
            Some("a")
        );
    }

    #[test]
    fn test_debouncer_releases_latest_value_once() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();

        // three changes 100ms apart; only the last survives
        debouncer.queue("a", t0);
        debouncer.queue("ab", t0 + Duration::from_millis(100));
        debouncer.queue("abc", t0 + Duration::from_millis(200));

        assert_eq!(debouncer.take_ready(t0 + Duration::from_millis(499)), None);
        assert_eq!(
            debouncer.take_ready(t0 + Duration::from_millis(500)),
            Some("abc")
        );
        assert_eq!(debouncer.take_ready(t0 + Duration::from_millis(900)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_requeue_restarts_quiet_period() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();

        debouncer.queue("a", t0);
        debouncer.queue("b", t0 + Duration::from_millis(250));
        // the first value would have been due at 300ms
        assert_eq!(debouncer.take_ready(t0 + Duration::from_millis(320)), None);
        assert_eq!(
            debouncer.take_ready(t0 + Duration::from_millis(550)),
            Some("b")
        );
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut debouncer = Debouncer::new(DELAY);
        let t0 = Instant::now();

        debouncer.queue("a", t0);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.take_ready(t0 + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_empty_debouncer_yields_nothing() {
        let mut debouncer: Debouncer<String> = Debouncer::new(DELAY);
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.take_ready(Instant::now()), None);
    }
}
