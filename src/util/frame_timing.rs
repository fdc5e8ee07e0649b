//! Frame clock with a smoothed frames-per-second readout.

use web_time::Instant;

/// Frame timing with smoothed FPS calculation.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Call once per frame. Returns the elapsed seconds since the previous
    /// call and updates the FPS average.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
