//! Frame timing.
//!
//! The simulation itself is frame-paced (velocity is per tick, never scaled
//! by wall time), so the clock exists for observability: elapsed time, frame
//! counting, and a periodically refreshed fps estimate for log lines.
//!
//! # Example
//!
//! ```ignore
//! use driftfield::time::FrameClock;
//!
//! let mut clock = FrameClock::new();
//!
//! // Once per frame:
//! let (elapsed, delta) = clock.tick();
//! println!("frame {} at {:.1} fps", clock.frame(), clock.fps());
//! ```

use std::time::{Duration, Instant};

/// Per-frame wall-clock tracking.
#[derive(Debug)]
pub struct FrameClock {
    /// When the clock was created.
    start: Instant,
    /// When the last tick occurred.
    last_tick: Instant,
    /// Total elapsed seconds, cached at the last tick.
    elapsed_secs: f32,
    /// Seconds between the last two ticks.
    delta_secs: f32,
    /// Ticks since start.
    frame_count: u64,
    /// Estimated frames per second, refreshed periodically.
    fps: f32,
    /// Frame count at the last fps refresh.
    fps_frame_count: u64,
    /// Start of the current fps window.
    fps_window_start: Instant,
    /// How often the fps estimate refreshes.
    fps_interval: Duration,
}

impl FrameClock {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_window_start: now,
            fps_interval: Duration::from_millis(500),
        }
    }

    /// Record a frame. Call once per tick.
    ///
    /// Returns `(elapsed_seconds, delta_seconds)`.
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();

        self.delta_secs = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        self.elapsed_secs = now.duration_since(self.start).as_secs_f32();
        self.frame_count += 1;

        let window = now.duration_since(self.fps_window_start);
        if window >= self.fps_interval {
            let frames = self.frame_count - self.fps_frame_count;
            self.fps = frames as f32 / window.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_window_start = now;
        }

        (self.elapsed_secs, self.delta_secs)
    }

    /// Seconds since the clock was created, as of the last tick.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Seconds between the last two ticks.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Ticks recorded since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Estimated frames per second. Zero until the first refresh window
    /// completes.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
