use std::time::{Duration, Instant};

/// Identifies one registration made with [`IntervalTimer::schedule_repeating`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Schedule {
    handle: TimerHandle,
    interval: Duration,
    next_due: Instant,
}

/// Single-slot repeating timer polled by the host loop.
///
/// Scheduling again replaces the previous registration. Handles carry a
/// generation number, so a handle from an older registration can no longer
/// cancel the current one.
#[derive(Debug, Default)]
pub struct IntervalTimer {
    generation: u64,
    active: Option<Schedule>,
}

impl IntervalTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire every `interval`, first at `now + interval`.
    pub fn schedule_repeating(&mut self, interval: Duration, now: Instant) -> TimerHandle {
        self.generation += 1;
        let handle = TimerHandle(self.generation);
        self.active = Some(Schedule {
            handle,
            interval,
            next_due: now + interval,
        });
        handle
    }

    /// Disarms the registration behind `handle`. Returns false for stale handles.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.active {
            Some(schedule) if schedule.handle == handle => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.active.is_some()
    }

    /// Returns true at most once per call when a period has elapsed.
    ///
    /// A host that fell several periods behind gets one firing and a fresh
    /// period, not a burst of catch-up ticks.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(schedule) = self.active.as_mut() else {
            return false;
        };
        if now < schedule.next_due {
            return false;
        }

        schedule.next_due += schedule.interval;
        if schedule.next_due <= now {
            schedule.next_due = now + schedule.interval;
        }
        true
    }

    /// Time left until the next firing, or `None` when disarmed.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.active
            .map(|schedule| schedule.next_due.saturating_duration_since(now))
    }
}
