use std::time::{Duration, Instant};

/// A fixed-interval timer polled from the main loop. Reports how many intervals have elapsed
/// since it was last polled, up to a cap, so a slow frame doesn't lead to an unbounded burst of
/// ticks.
pub struct TickScheduler {
    interval: Duration,
    max_ticks_per_poll: u32,
    next_due: Instant,
}

impl TickScheduler {
    pub fn new(
        interval: Duration,
        max_ticks_per_poll: u32,
        now: Instant,
    ) -> Self {
        Self {
            interval,
            max_ticks_per_poll,
            next_due: now + interval,
        }
    }

    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let Some(overdue) = now.checked_duration_since(self.next_due) else {
            return 0;
        };
        let elapsed_intervals =
            (overdue.as_nanos() / self.interval.as_nanos().max(1)) + 1;
        if elapsed_intervals > self.max_ticks_per_poll as u128 {
            self.next_due = now + self.interval;
            self.max_ticks_per_poll
        } else {
            let ticks = elapsed_intervals as u32;
            self.next_due += self.interval * ticks;
            ticks
        }
    }
}
