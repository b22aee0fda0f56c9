//! Time management utilities
//!
//! The engine advances in discrete ticks. Every tick carries the time elapsed
//! since the previous one, which is all movement code needs to know.

use std::time::{Duration, Instant};

/// Snapshot of the game clock for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameTime {
    /// Time elapsed since the previous tick
    pub elapsed: Duration,
    /// Total time accumulated since the clock started
    pub total: Duration,
}

impl GameTime {
    /// Create a tick snapshot with the given elapsed time
    pub fn from_elapsed(elapsed: Duration) -> Self {
        Self {
            elapsed,
            total: elapsed,
        }
    }

    /// Elapsed time since the previous tick in milliseconds
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Game clock producing one [`GameTime`] per tick
///
/// Use [`Timer::tick`] to measure wall-clock time, or [`Timer::advance`] to
/// step by a fixed amount (replays, tests, fixed-timestep loops).
pub struct Timer {
    last_tick: Instant,
    current: GameTime,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            current: GameTime::default(),
            frame_count: 0,
        }
    }

    /// Measure the wall-clock time since the last tick and advance by it
    pub fn tick(&mut self) -> GameTime {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.advance(elapsed)
    }

    /// Advance the clock by a fixed amount
    pub fn advance(&mut self, elapsed: Duration) -> GameTime {
        self.current = GameTime {
            elapsed,
            total: self.current.total + elapsed,
        };
        self.frame_count += 1;
        self.current
    }

    /// The most recent tick
    pub fn current(&self) -> GameTime {
        self.current
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
