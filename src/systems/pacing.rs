//! Fixed-rate frame pacing
//!
//! The event loop sleeps until the next deadline, redraws, then schedules the
//! following deadline one interval later. Rotation advances a fixed step per
//! frame, so frames are not skipped to catch up after a stall.

use std::time::{Duration, Instant};

/// Window over which the measured frame rate is averaged
const FPS_WINDOW: Duration = Duration::from_secs(1);

/// What a redraw request should do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameTick {
    /// A scheduled frame: advance the animation. Carries a fresh frame rate
    /// measurement once per second.
    Step { fps: Option<f64> },
    /// An unscheduled redraw (resize, expose): repaint the current state
    Repaint,
}

/// Deadline scheduler for a target frame rate
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next: Instant,
    frame_index: u64,
    window_start: Instant,
    window_frames: u32,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Pacer whose first frame is due at `now`
    pub fn starting_at(target_fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_nanos(1_000_000_000 / target_fps.max(1) as u64),
            next: now,
            frame_index: 0,
            window_start: now,
            window_frames: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next frame should be drawn
    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Number of frames drawn so far
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Classify a redraw at `now`, advancing the schedule if a frame was due
    pub fn tick(&mut self, now: Instant) -> FrameTick {
        if !self.is_due(now) {
            return FrameTick::Repaint;
        }
        FrameTick::Step { fps: self.advance(now) }
    }

    /// Record a drawn frame and schedule the next one.
    ///
    /// Returns a fresh frame rate measurement once per second.
    pub fn advance(&mut self, now: Instant) -> Option<f64> {
        self.frame_index = self.frame_index.wrapping_add(1);

        self.next += self.interval;
        if self.next < now {
            // fell behind; restart the schedule from now
            self.next = now + self.interval;
        }

        self.window_frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed >= FPS_WINDOW {
            let fps = self.window_frames as f64 / elapsed.as_secs_f64();
            self.window_start = now;
            self.window_frames = 0;
            return Some(fps);
        }
        None
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(60)
    }
}
