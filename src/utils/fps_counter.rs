#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Window over which frames are averaged.
pub const FPS_REPORT_WINDOW: Duration = Duration::from_secs(1);

/// Measures the rate at which a host loop presents animation frames.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
    accumulated_time: Duration,
    pub current_fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_update: start,
            frame_count: 0,
            accumulated_time: Duration::ZERO,
            current_fps: 0.0,
        }
    }

    /// Records one presented frame. Returns the fresh rate once per report window.
    pub fn update(&mut self) -> Option<f32> {
        self.update_at(Instant::now())
    }

    pub fn update_at(&mut self, now: Instant) -> Option<f32> {
        self.frame_count += 1;
        self.accumulated_time += now.saturating_duration_since(self.last_update);
        self.last_update = self.last_update.max(now);

        if self.accumulated_time < FPS_REPORT_WINDOW {
            return None;
        }

        self.current_fps = self.frame_count as f32 / self.accumulated_time.as_secs_f32();
        self.accumulated_time = Duration::ZERO;
        self.frame_count = 0;

        Some(self.current_fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_window() {
        let start = Instant::now();
        let mut counter = FpsCounter::starting_at(start);

        // 16 ms frames: the 63rd frame crosses the one second mark (1008 ms)
        for frame in 1..63_u64 {
            assert_eq!(counter.update_at(start + Duration::from_millis(16 * frame)), None);
        }
        let fps = counter
            .update_at(start + Duration::from_millis(16 * 63))
            .expect("window elapsed");

        assert!((fps - 63.0 / 1.008).abs() < 1e-3, "got {fps}");
        assert_eq!(counter.current_fps, fps);
        assert_eq!(counter.update_at(start + Duration::from_millis(16 * 64)), None);
    }
}
