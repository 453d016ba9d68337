//! Aircraft state and the constants that tune the flight model.

use engine_core::{Transform, GROUND_LEVEL};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Aircraft orientation in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Attitude {
    /// Nose up/down. Positive values climb.
    pub pitch: f32,
    /// Bank. Cosmetic only; never changes the direction of travel.
    pub roll: f32,
    /// Heading, measured from +Z towards +X.
    pub yaw: f32,
}

impl Attitude {
    pub fn new(pitch: f32, roll: f32, yaw: f32) -> Self {
        Self { pitch, roll, yaw }
    }
}

/// Everything the simulation knows about the aircraft.
///
/// Owned by the tick loop. Presentation code gets a copy per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlightState {
    pub position: Vec3,
    pub rotation: Attitude,
    pub speed: f32,
    /// Normalized to [0, 1].
    pub throttle: f32,
    pub crashed: bool,
    /// Grows once crashed; drives the wreck tumble animation.
    pub crash_effect: f32,
}

impl FlightState {
    /// Height above the ground plane, never negative.
    pub fn altitude(&self) -> f32 {
        (self.position.y - GROUND_LEVEL).max(0.0)
    }

    /// Unit-length direction of travel.
    ///
    /// Built from yaw and pitch only, so banking does not steer the aircraft.
    pub fn heading(&self) -> Vec3 {
        let yaw = self.rotation.yaw.to_radians();
        let pitch = self.rotation.pitch.to_radians();
        Vec3::new(yaw.sin() * pitch.cos(), pitch.sin(), yaw.cos() * pitch.cos())
    }

    /// Model transform for drawing the aircraft (yaw, then pitch, then roll).
    pub fn model_transform(&self) -> Transform {
        let r = self.rotation;
        let rotation = Transform::euler_degrees(r.yaw, r.pitch, r.roll);
        Transform::from_position_rotation(self.position, rotation)
    }
}

/// Tuning for the flight model. All rates are per tick at 60 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightParams {
    /// Speed reached at full throttle.
    pub max_speed: f32,
    /// Fraction of the gap to the target speed closed each tick.
    pub acceleration: f32,
    /// Hard speed cap as a multiple of `max_speed`.
    pub speed_ceiling: f32,
    pub pitch_damping: f32,
    pub roll_damping: f32,
    /// Pitch and roll limit in degrees while flying.
    pub max_attitude: f32,
    pub gravity: f32,
    /// Share of `gravity` subtracted from height every tick.
    pub gravity_scale: f32,
    /// Touching down faster than this is a crash.
    pub crash_speed: f32,
    /// Touching down with |pitch| or |roll| above this is a crash.
    pub crash_attitude: f32,
    pub landing_speed_factor: f32,
    pub landing_attitude_factor: f32,
    pub crash_effect_rate: f32,
    /// Degrees of roll added per tick to a wreck.
    pub crash_spin_rate: f32,
}

impl Default for FlightParams {
    fn default() -> Self {
        Self {
            max_speed: 2.0,
            acceleration: 0.01,
            speed_ceiling: 1.1,
            pitch_damping: 0.995,
            roll_damping: 0.98,
            max_attitude: 80.0,
            gravity: 0.05,
            gravity_scale: 0.5,
            crash_speed: 1.0,
            crash_attitude: 60.0,
            landing_speed_factor: 0.3,
            landing_attitude_factor: 0.5,
            crash_effect_rate: 0.1,
            crash_spin_rate: 1.0,
        }
    }
}

/// A [`FlightParams`] value the flight model cannot run with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("max_speed must be positive and finite, got {0}")]
    MaxSpeed(f32),
    #[error("speed_ceiling must be at least 1.0, got {0}")]
    SpeedCeiling(f32),
    #[error("{name} must be in (0, 1], got {value}")]
    UnitFactor { name: &'static str, value: f32 },
    #[error("{name} must be in [0, 1], got {value}")]
    LandingFactor { name: &'static str, value: f32 },
    #[error("{name} must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("gravity must be non-negative and finite, got {0}")]
    Gravity(f32),
    #[error("{name} rate must be non-negative and finite, got {value}")]
    ControlRate { name: &'static str, value: f32 },
}

impl FlightParams {
    /// Check the parameters once before the first tick.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(ParamsError::MaxSpeed(self.max_speed));
        }
        if !(self.speed_ceiling.is_finite() && self.speed_ceiling >= 1.0) {
            return Err(ParamsError::SpeedCeiling(self.speed_ceiling));
        }
        for (name, value) in [
            ("acceleration", self.acceleration),
            ("pitch_damping", self.pitch_damping),
            ("roll_damping", self.roll_damping),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ParamsError::UnitFactor { name, value });
            }
        }
        for (name, value) in [
            ("landing_speed_factor", self.landing_speed_factor),
            ("landing_attitude_factor", self.landing_attitude_factor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamsError::LandingFactor { name, value });
            }
        }
        for (name, value) in [
            ("max_attitude", self.max_attitude),
            ("crash_speed", self.crash_speed),
            ("crash_attitude", self.crash_attitude),
            ("crash_effect_rate", self.crash_effect_rate),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamsError::NotPositive { name, value });
            }
        }
        if !(self.gravity.is_finite() && self.gravity >= 0.0 && self.gravity_scale >= 0.0) {
            return Err(ParamsError::Gravity(self.gravity * self.gravity_scale));
        }
        Ok(())
    }

    /// Upper bound on speed.
    pub fn speed_limit(&self) -> f32 {
        self.max_speed * self.speed_ceiling
    }

    /// Height lost every tick regardless of speed.
    pub fn sink_per_tick(&self) -> f32 {
        self.gravity * self.gravity_scale
    }
}
