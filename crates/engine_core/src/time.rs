//! Time management for the game loop.

use std::time::{Duration, Instant};

/// Default simulation rate. Flight tuning is expressed per tick at this rate.
pub const DEFAULT_TICK_RATE_HZ: f64 = 60.0;
/// Slowest tick rate accepted from configuration.
pub const MIN_TICK_RATE_HZ: f64 = 1.0;
/// Fastest tick rate accepted from configuration.
pub const MAX_TICK_RATE_HZ: f64 = 1000.0;

/// Manages frame timing and releases fixed simulation ticks.
#[derive(Debug)]
pub struct Time {
    /// Time of the last frame.
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Frame count since start.
    frame_count: u64,
    /// Fixed ticks released since start.
    tick_count: u64,
    /// Fixed timestep for physics (default 60 Hz).
    fixed_timestep: Duration,
    /// Accumulated time for fixed updates.
    accumulator: Duration,
    /// Most ticks a single frame may owe before the backlog is dropped.
    max_backlog_ticks: u32,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a new time manager.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta: Duration::ZERO,
            frame_count: 0,
            tick_count: 0,
            fixed_timestep: Duration::from_secs_f64(1.0 / DEFAULT_TICK_RATE_HZ),
            accumulator: Duration::ZERO,
            max_backlog_ticks: 5,
        }
    }

    /// Update timing at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.advance(delta);
    }

    /// Advance the clock by an explicit frame duration.
    pub fn advance(&mut self, delta: Duration) {
        self.delta = delta;
        self.frame_count += 1;
        self.accumulator += delta;

        let cap = self.fixed_timestep * self.max_backlog_ticks;
        if self.accumulator > cap {
            log::debug!(
                "Dropping {:.1} ms of simulation backlog",
                (self.accumulator - cap).as_secs_f64() * 1000.0
            );
            self.accumulator = cap;
        }
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Number of fixed ticks released so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Get the fixed timestep in seconds.
    pub fn fixed_timestep_seconds(&self) -> f32 {
        self.fixed_timestep.as_secs_f32()
    }

    /// Check if a fixed update should run and consume the time.
    pub fn should_fixed_update(&mut self) -> bool {
        if self.accumulator >= self.fixed_timestep {
            self.accumulator -= self.fixed_timestep;
            self.tick_count += 1;
            true
        } else {
            false
        }
    }

    /// Get the current FPS (averaged over last frame).
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }

    /// Set the fixed timestep rate in Hz. Rates that give a zero or
    /// unrepresentable timestep are refused and the current one is kept.
    pub fn set_fixed_rate(&mut self, hz: f64) -> bool {
        match Duration::try_from_secs_f64(1.0 / hz) {
            Ok(step) if !step.is_zero() => {
                self.fixed_timestep = step;
                true
            }
            _ => {
                log::warn!("Refusing fixed rate of {} Hz", hz);
                false
            }
        }
    }

    /// Cap how many ticks may pile up between two frames.
    pub fn set_max_backlog_ticks(&mut self, ticks: u32) {
        self.max_backlog_ticks = ticks.max(1);
    }
}
