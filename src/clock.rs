//! Time sources for the frame loop.

use std::time::{Duration, Instant};

use crate::foundation::core::Fps;

/// Wall-clock time plus the frame-pacing primitive.
pub trait Clock {
    /// Seconds since the clock started.
    fn now_secs(&self) -> f64;

    /// Block (or step) until the next frame is due.
    fn pace(&mut self);
}

/// Real time, sleeping to hold the target frame rate.
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
    frame: Duration,
    next_deadline: Instant,
}

impl SystemClock {
    pub fn new(fps: Fps) -> Self {
        let start = Instant::now();
        let frame = Duration::from_secs_f64(fps.frame_duration_secs());
        Self {
            start,
            frame,
            next_deadline: start + frame,
        }
    }
}

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    fn pace(&mut self) {
        let now = Instant::now();
        if now < self.next_deadline {
            std::thread::sleep(self.next_deadline - now);
            self.next_deadline += self.frame;
        } else {
            // Running behind: drop the backlog instead of bursting.
            self.next_deadline = now + self.frame;
        }
    }
}

/// Offline clock: time is `frame / fps` and pacing just advances the frame.
#[derive(Clone, Copy, Debug)]
pub struct FixedStepClock {
    fps: Fps,
    frame: u64,
}

impl FixedStepClock {
    pub fn new(fps: Fps) -> Self {
        Self::starting_at(fps, 0)
    }

    pub fn starting_at(fps: Fps, frame: u64) -> Self {
        Self { fps, frame }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Clock for FixedStepClock {
    fn now_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.frame)
    }

    fn pace(&mut self) {
        self.frame += 1;
    }
}

#[cfg(test)]
#[path = "../tests/unit/clock.rs"]
mod tests;
