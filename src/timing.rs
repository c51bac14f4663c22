use std::time::{Duration, Instant};

/// Monotonic wall clock measured from round start
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Blocks the loop so it runs no faster than the target frame rate
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    last_frame: Instant,
}

impl FrameLimiter {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            last_frame: Instant::now(),
        }
    }

    /// Sleeps for whatever is left of the current frame, returns the time since the last call
    pub fn wait(&mut self) -> Duration {
        let spent = self.last_frame.elapsed();
        if spent < self.frame {
            std::thread::sleep(self.frame - spent);
        }
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame);
        self.last_frame = now;
        frame_time
    }
}

/// Fires once every `interval` of wall-clock time, whatever the frame rate
#[derive(Debug, Clone, Copy)]
pub struct SpawnTimer {
    interval: Duration,
    last_fired: Duration,
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: Duration::ZERO,
        }
    }

    /// Returns true when at least one interval has passed since the last firing.
    /// `now` is the round clock's elapsed time.
    pub fn poll(&mut self, now: Duration) -> bool {
        if now.saturating_sub(self.last_fired) >= self.interval {
            self.last_fired = now;
            true
        } else {
            false
        }
    }
}
