//! Periodic elapsed-time tick, modelled as a cancellable handle.
//!
//! The host calls `SessionState::tick` on its own schedule; the timer decides
//! whether a tick is due and is the single place where the tick is stopped.
//! `arm` and `cancel` keep counters so callers can check that every exit path
//! cancels exactly once.

/// Cancellable periodic timer driven by an external clock.
#[derive(Debug, Clone, Default)]
pub struct PeriodicTimer {
    interval_ms: u64,
    next_due_ms: Option<u64>,
    arms: u32,
    cancellations: u32,
}

impl PeriodicTimer {
    pub fn new(interval_ms: u64) -> Self {
        PeriodicTimer { interval_ms: interval_ms.max(1), ..Default::default() }
    }

    /// Start ticking from `now_ms`. Re-arming a running timer cancels it first.
    pub fn arm(&mut self, now_ms: u64) {
        self.cancel();
        self.next_due_ms = Some(now_ms + self.interval_ms);
        self.arms += 1;
    }

    /// Stop the timer. Returns `false` if it was not running.
    pub fn cancel(&mut self) -> bool {
        if self.next_due_ms.take().is_some() {
            self.cancellations += 1;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Consume every interval that has elapsed by `now_ms`.
    ///
    /// Returns true when at least one tick was due. Missed intervals collapse
    /// into one tick, so a stalled host never gets a burst.
    pub fn take_due(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            Some(due) if now_ms >= due => {
                let missed = (now_ms - due) / self.interval_ms;
                self.next_due_ms = Some(due + (missed + 1) * self.interval_ms);
                true
            }
            _ => false,
        }
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    pub fn arms(&self) -> u32 {
        self.arms
    }

    pub fn cancellations(&self) -> u32 {
        self.cancellations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_once_per_interval() {
        let mut timer = PeriodicTimer::new(1000);
        timer.arm(0);
        assert!(!timer.take_due(999));
        assert!(timer.take_due(1000));
        assert!(!timer.take_due(1500));
        assert!(timer.take_due(2000));
    }

    #[test]
    fn missed_intervals_collapse() {
        let mut timer = PeriodicTimer::new(1000);
        timer.arm(0);
        assert!(timer.take_due(5_300));
        assert_eq!(timer.next_due_ms(), Some(6_000));
    }

    #[test]
    fn cancel_counts_only_running_timers() {
        let mut timer = PeriodicTimer::new(1000);
        assert!(!timer.cancel());
        timer.arm(0);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.cancellations(), 1);
        assert!(!timer.take_due(10_000));
    }

    #[test]
    fn rearming_cancels_previous_run() {
        let mut timer = PeriodicTimer::new(1000);
        timer.arm(0);
        timer.arm(500);
        assert_eq!(timer.arms(), 2);
        assert_eq!(timer.cancellations(), 1);
        assert_eq!(timer.next_due_ms(), Some(1_500));
    }
}
