//! Ground contact: telling a landing from a crash.

use engine_core::GROUND_LEVEL;

use crate::flight::{FlightParams, FlightState};

/// Result of checking the aircraft against the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundContact {
    Airborne,
    /// Touched down gently; speed and attitude were bled off.
    Landed,
    /// Hit the ground too fast or too steep.
    Crashed,
}

/// Resolve contact with the ground after the aircraft has moved.
///
/// Only acts when the aircraft ended the tick below the ground plane. It is
/// put back on the ground, then a fast or steep touchdown wrecks it, anything
/// else is a landing. The crash thresholds are independent of the in-flight
/// attitude limit.
pub fn resolve_ground_contact(state: &mut FlightState, params: &FlightParams) -> GroundContact {
    if state.position.y >= GROUND_LEVEL {
        return GroundContact::Airborne;
    }
    state.position.y = GROUND_LEVEL;

    if is_hard_landing(state, params) {
        state.crashed = true;
        return GroundContact::Crashed;
    }

    state.speed *= params.landing_speed_factor;
    state.rotation.pitch *= params.landing_attitude_factor;
    state.rotation.roll *= params.landing_attitude_factor;
    GroundContact::Landed
}

fn is_hard_landing(state: &FlightState, params: &FlightParams) -> bool {
    state.speed > params.crash_speed
        || state.rotation.pitch.abs() > params.crash_attitude
        || state.rotation.roll.abs() > params.crash_attitude
}
