use web_time::{Duration, Instant};

/// Smoothed frame-rate tracking with an optional frame cap.
pub struct FrameTiming {
    /// Shortest allowed frame, derived from the cap (zero = uncapped).
    min_frame_duration: Duration,
    /// When the previous frame ended.
    last_frame: Instant,
    /// Exponential moving average of the frame time, in seconds.
    smoothed_frame_time: f32,
    /// Weight of the newest sample (0.0-1.0).
    smoothing: f32,
}

impl FrameTiming {
    /// Create a timer capped at `target_fps` (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_frame_time: 1.0 / 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to draw again.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark the end of a frame and fold its duration into the average.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed.as_secs_f32());
    }

    fn record(&mut self, frame_time: f32) {
        if frame_time > 0.0 {
            self.smoothed_frame_time = self.smoothed_frame_time
                * (1.0 - self.smoothing)
                + frame_time * self.smoothing;
        }
    }

    /// Smoothed milliseconds per frame.
    #[must_use]
    pub fn frame_ms(&self) -> f32 {
        self.smoothed_frame_time * 1000.0
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        1.0 / self.smoothed_frame_time
    }

    /// Human-readable frame statistics for a status line.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{:.3} ms/frame ({:.1} FPS)", self.frame_ms(), self.fps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_sixty_fps() {
        let timing = FrameTiming::new(0);
        assert!((timing.fps() - 60.0).abs() < 1e-3);
        assert!(timing.should_render());
        assert_eq!(timing.summary(), "16.667 ms/frame (60.0 FPS)");
    }

    #[test]
    fn average_converges_to_steady_rate() {
        let mut timing = FrameTiming::new(0);
        for _ in 0..500 {
            timing.record(0.01);
        }
        assert!((timing.fps() - 100.0).abs() < 0.5);
    }

    #[test]
    fn zero_length_frames_are_ignored() {
        let mut timing = FrameTiming::new(0);
        timing.record(0.0);
        assert!((timing.frame_ms() - 16.667).abs() < 1e-2);
    }

    #[test]
    fn capped_timer_waits_for_next_frame() {
        let timing = FrameTiming::new(1);
        assert!(!timing.should_render());
    }
}
