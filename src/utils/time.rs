#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Reference host cadence: one animation tick every 16 ms (~60 Hz).
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Converts elapsed wall-clock time into a whole number of fixed ticks.
///
/// The animation core only counts steps; this is the host-side adapter that
/// decides how many steps a frame should apply. Leftover time carries over
/// to the next update.
#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    interval: Duration,
    last_update: Instant,
    accumulator: Duration,
    /// Total number of ticks handed out
    pub tick_count: u64,
}

impl Default for FixedStepScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl FixedStepScheduler {
    /// Creates a scheduler whose clock starts now.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    #[must_use]
    pub fn starting_at(interval: Duration, start: Instant) -> Self {
        Self {
            interval: interval.max(Duration::from_micros(1)),
            last_update: start,
            accumulator: Duration::ZERO,
            tick_count: 0,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks due since the previous update, measured against `Instant::now()`.
    pub fn update(&mut self) -> u32 {
        self.update_at(Instant::now())
    }

    /// Ticks due at `now`. Time going backwards yields zero ticks.
    pub fn update_at(&mut self, now: Instant) -> u32 {
        self.accumulator += now.saturating_duration_since(self.last_update);
        self.last_update = self.last_update.max(now);

        let whole = self.accumulator.as_nanos() / self.interval.as_nanos();
        let due = u32::try_from(whole).unwrap_or(u32::MAX);
        self.accumulator -= self.interval * due;

        self.tick_count += u64::from(due);
        due
    }

    /// Time remaining until the next tick is due.
    #[must_use]
    pub fn until_next_tick(&self) -> Duration {
        self.interval.saturating_sub(self.accumulator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_whole_intervals_and_carries_remainder() {
        let start = Instant::now();
        let mut scheduler = FixedStepScheduler::starting_at(Duration::from_millis(16), start);

        assert_eq!(scheduler.update_at(start + Duration::from_millis(10)), 0);
        assert_eq!(scheduler.update_at(start + Duration::from_millis(20)), 1);
        assert_eq!(scheduler.update_at(start + Duration::from_millis(52)), 2);
        assert_eq!(scheduler.tick_count, 3);
        assert_eq!(scheduler.until_next_tick(), Duration::from_millis(12));
    }

    #[test]
    fn long_gap_at_tiny_interval_is_counted_in_one_pass() {
        let start = Instant::now();
        let mut scheduler = FixedStepScheduler::starting_at(Duration::from_micros(1), start);

        assert_eq!(scheduler.update_at(start + Duration::from_secs(2)), 2_000_000);
        assert_eq!(scheduler.until_next_tick(), Duration::from_micros(1));
        assert_eq!(scheduler.update_at(start + Duration::from_nanos(2_000_001_500)), 1);
        assert_eq!(scheduler.tick_count, 2_000_001);
    }

    #[test]
    fn backwards_time_is_ignored() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut scheduler = FixedStepScheduler::starting_at(Duration::from_millis(16), start);
        assert_eq!(scheduler.update_at(start - Duration::from_millis(500)), 0);
        assert_eq!(scheduler.tick_count, 0);
    }
}
