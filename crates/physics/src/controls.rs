//! Applying pilot intents to the aircraft.

use engine_core::ControlInput;
use serde::{Deserialize, Serialize};

use crate::flight::{FlightState, ParamsError};

/// How far each held control moves the aircraft per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlRates {
    pub throttle: f32,
    /// Degrees per tick.
    pub yaw: f32,
    /// Degrees per tick.
    pub pitch: f32,
    /// Degrees per tick.
    pub roll: f32,
}

impl Default for ControlRates {
    fn default() -> Self {
        Self {
            throttle: 0.005,
            yaw: 0.3,
            pitch: 0.5,
            roll: 0.3,
        }
    }
}

impl ControlRates {
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [
            ("throttle", self.throttle),
            ("yaw", self.yaw),
            ("pitch", self.pitch),
            ("roll", self.roll),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ParamsError::ControlRate { name, value });
            }
        }
        Ok(())
    }
}

/// What [`apply_controls`] did with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOutcome {
    /// Reset requested. Nothing was applied; the owner must reset and end the tick.
    Reset,
    /// The aircraft is wrecked and does not respond.
    Ignored,
    Applied,
}

/// Apply one tick of held controls to `state`.
///
/// Reset wins over everything, crashed or not. Otherwise a wreck ignores
/// input. Throttle is rate limited and kept in [0, 1]; attitude deltas are
/// applied raw and limited later by the integrator.
pub fn apply_controls(
    state: &mut FlightState,
    input: &ControlInput,
    rates: &ControlRates,
) -> ControlOutcome {
    if input.reset {
        return ControlOutcome::Reset;
    }
    if state.crashed {
        return ControlOutcome::Ignored;
    }

    if input.throttle_up {
        state.throttle = (state.throttle + rates.throttle).clamp(0.0, 1.0);
    }
    if input.throttle_down {
        state.throttle = (state.throttle - rates.throttle).clamp(0.0, 1.0);
    }

    let attitude = &mut state.rotation;
    if input.yaw_left {
        attitude.yaw += rates.yaw;
    }
    if input.yaw_right {
        attitude.yaw -= rates.yaw;
    }
    // Nose-up lowers pitch, nose-down raises it.
    if input.pitch_up {
        attitude.pitch -= rates.pitch;
    }
    if input.pitch_down {
        attitude.pitch += rates.pitch;
    }
    if input.roll_left {
        attitude.roll += rates.roll;
    }
    if input.roll_right {
        attitude.roll -= rates.roll;
    }

    ControlOutcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(f: impl FnOnce(&mut ControlInput)) -> ControlInput {
        let mut input = ControlInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn throttle_is_rate_limited() {
        let mut state = FlightState::default();
        let input = held(|i| i.throttle_up = true);
        for _ in 0..100 {
            apply_controls(&mut state, &input, &ControlRates::default());
        }
        assert!((state.throttle - 0.5).abs() < 1e-4, "throttle was {}", state.throttle);
    }

    #[test]
    fn throttle_stays_within_unit_range() {
        let rates = ControlRates::default();
        let mut state = FlightState {
            throttle: 0.998,
            ..Default::default()
        };
        apply_controls(&mut state, &held(|i| i.throttle_up = true), &rates);
        assert_eq!(state.throttle, 1.0);

        state.throttle = 0.002;
        apply_controls(&mut state, &held(|i| i.throttle_down = true), &rates);
        assert_eq!(state.throttle, 0.0);
    }

    #[test]
    fn attitude_sign_conventions() {
        let rates = ControlRates::default();
        let mut state = FlightState::default();
        apply_controls(
            &mut state,
            &held(|i| {
                i.yaw_left = true;
                i.pitch_down = true;
                i.roll_left = true;
            }),
            &rates,
        );
        assert_eq!(state.rotation.yaw, 0.3);
        assert_eq!(state.rotation.pitch, 0.5);
        assert_eq!(state.rotation.roll, 0.3);

        let mut state = FlightState::default();
        apply_controls(
            &mut state,
            &held(|i| {
                i.yaw_right = true;
                i.pitch_up = true;
                i.roll_right = true;
            }),
            &rates,
        );
        assert_eq!(state.rotation.yaw, -0.3);
        assert_eq!(state.rotation.pitch, -0.5);
        assert_eq!(state.rotation.roll, -0.3);
    }

    #[test]
    fn opposing_inputs_cancel() {
        let mut state = FlightState::default();
        apply_controls(
            &mut state,
            &held(|i| {
                i.yaw_left = true;
                i.yaw_right = true;
            }),
            &ControlRates::default(),
        );
        assert_eq!(state.rotation.yaw, 0.0);
    }

    #[test]
    fn wreck_ignores_controls() {
        let mut state = FlightState {
            crashed: true,
            ..Default::default()
        };
        let input = held(|i| i.throttle_up = true);
        let outcome = apply_controls(&mut state, &input, &ControlRates::default());
        assert_eq!(outcome, ControlOutcome::Ignored);
        assert_eq!(state.throttle, 0.0);
    }

    #[test]
    fn reset_takes_priority() {
        let rates = ControlRates::default();
        let input = held(|i| {
            i.reset = true;
            i.throttle_up = true;
        });

        let mut state = FlightState::default();
        assert_eq!(apply_controls(&mut state, &input, &rates), ControlOutcome::Reset);
        assert_eq!(state.throttle, 0.0);

        let mut wreck = FlightState {
            crashed: true,
            ..Default::default()
        };
        assert_eq!(apply_controls(&mut wreck, &input, &rates), ControlOutcome::Reset);
    }

    #[test]
    fn negative_rates_are_rejected() {
        assert!(ControlRates::default().validate().is_ok());
        let rates = ControlRates {
            throttle: -0.01,
            ..Default::default()
        };
        assert_eq!(
            rates.validate(),
            Err(ParamsError::ControlRate {
                name: "throttle",
                value: -0.01
            })
        );
        let rates = ControlRates {
            roll: f32::NAN,
            ..Default::default()
        };
        assert!(rates.validate().is_err());
    }

    #[test]
    fn throttle_never_leaves_unit_range_even_with_bad_rates() {
        let rates = ControlRates {
            throttle: -0.3,
            ..Default::default()
        };
        let mut state = FlightState::default();
        apply_controls(&mut state, &held(|i| i.throttle_up = true), &rates);
        assert_eq!(state.throttle, 0.0);

        state.throttle = 1.0;
        apply_controls(&mut state, &held(|i| i.throttle_down = true), &rates);
        assert_eq!(state.throttle, 1.0);
    }
}
