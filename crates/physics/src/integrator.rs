//! One fixed tick of the flight model.

use engine_core::WORLD_HALF_EXTENT;

use crate::collision::{resolve_ground_contact, GroundContact};
use crate::flight::{FlightParams, FlightState};

/// What happened to the aircraft during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Airborne,
    Landed,
    /// Hit the ground this tick.
    Crashed,
    /// Was already wrecked; only the tumble advanced.
    Wreckage,
}

impl From<GroundContact> for StepOutcome {
    fn from(contact: GroundContact) -> Self {
        match contact {
            GroundContact::Airborne => StepOutcome::Airborne,
            GroundContact::Landed => StepOutcome::Landed,
            GroundContact::Crashed => StepOutcome::Crashed,
        }
    }
}

/// Advance `state` by one tick and return the next state.
///
/// Control deltas for the tick must already be applied. A wreck does not
/// move: it only tumbles (roll grows without limit) and advances its crash
/// effect timer.
pub fn step(state: &FlightState, params: &FlightParams) -> (FlightState, StepOutcome) {
    let mut next = *state;

    if next.crashed {
        next.crash_effect += params.crash_effect_rate;
        next.rotation.roll += params.crash_spin_rate;
        return (next, StepOutcome::Wreckage);
    }

    // Exponential approach to the throttle's target speed.
    let target = next.throttle * params.max_speed;
    next.speed += (target - next.speed) * params.acceleration;
    next.speed = next.speed.clamp(0.0, params.speed_limit());

    let attitude = &mut next.rotation;
    attitude.pitch *= params.pitch_damping;
    attitude.roll *= params.roll_damping;
    attitude.pitch = attitude.pitch.clamp(-params.max_attitude, params.max_attitude);
    attitude.roll = attitude.roll.clamp(-params.max_attitude, params.max_attitude);
    attitude.yaw = wrap_degrees(attitude.yaw);

    next.position += next.heading() * next.speed;
    next.position.y -= params.sink_per_tick();
    next.position.x = next.position.x.clamp(-WORLD_HALF_EXTENT, WORLD_HALF_EXTENT);
    next.position.z = next.position.z.clamp(-WORLD_HALF_EXTENT, WORLD_HALF_EXTENT);

    let contact = resolve_ground_contact(&mut next, params);
    (next, contact.into())
}

/// Wrap an angle into [0, 360).
fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
