//! Frame timing
//!
//! Times are 32-bit millisecond counters which may wrap, so all differences use wrapping arithmetic.

use std::time::Instant;

/// Tracks the time of the current and previous frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    current: u32,
    last_frame: u32,
    delta: u32,
}

impl FrameClock {
    pub fn new() -> FrameClock {
        FrameClock::default()
    }

    /// Set the current time to `now` (in milliseconds) and update the delta since the last frame.
    pub fn update(&mut self, now: u32) {
        self.current = now;
        self.delta = now.wrapping_sub(self.last_frame);
    }

    /// Update using the milliseconds elapsed since `epoch`.
    pub fn update_since(&mut self, epoch: Instant) {
        let elapsed = epoch.elapsed();
        let millis = elapsed.as_secs().wrapping_mul(1000).wrapping_add(u64::from(elapsed.subsec_millis()));

        self.update(millis as u32)
    }

    /// Returns true once more than `interval` milliseconds have passed since the last frame
    #[inline]
    pub fn should_draw(&self, interval: u32) -> bool {
        self.current.wrapping_sub(self.last_frame) > interval
    }

    /// Record the current time as the time of the last frame
    #[inline]
    pub fn mark_frame(&mut self) {
        self.last_frame = self.current;
    }

    /// Time of the current frame in milliseconds
    #[inline]
    pub fn current(&self) -> u32 { self.current }

    /// Time of the current frame in seconds
    #[inline]
    pub fn seconds(&self) -> f32 { self.current as f32 * 0.001 }

    /// Time of the last drawn frame in milliseconds
    #[inline]
    pub fn last_frame(&self) -> u32 { self.last_frame }

    /// Milliseconds between the last drawn frame and the current time
    #[inline]
    pub fn delta(&self) -> u32 { self.delta }

    /// Frames per second derived from the delta, or `None` if no time has passed.
    pub fn fps(&self) -> Option<f32> {
        if self.delta == 0 { None } else { Some(1000.0 / self.delta as f32) }
    }
}
