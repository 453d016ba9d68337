//! Instrument panel readout.
//! Turns a flight state into the text lines and gauges drawn over the scene.

use physics::FlightState;

/// Static help shown next to the instruments.
pub const CONTROLS_HELP: &[&str] = &[
    "↑ / ↓ : Throttle",
    "← / → : Yaw",
    "W / S : Pitch",
    "A / D : Roll",
    "R : Restart",
    "",
    "Take-off:",
    "1. Throttle up with ↑",
    "2. Lift the nose with W",
];

/// Title drawn above the instrument lines.
pub const PANEL_TITLE: &str = "Flight Instruments";

/// Everything the overlay needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct InstrumentPanel {
    pub speed: f32,
    pub altitude: f32,
    pub throttle_fraction: f32,
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
    pub crashed: bool,
}

impl InstrumentPanel {
    pub fn from_state(state: &FlightState) -> Self {
        Self {
            speed: state.speed,
            altitude: state.altitude(),
            throttle_fraction: state.throttle.clamp(0.0, 1.0),
            pitch: state.rotation.pitch,
            roll: state.rotation.roll,
            yaw: state.rotation.yaw,
            crashed: state.crashed,
        }
    }

    /// Instrument lines in display order, with the crash notice appended when wrecked.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Speed: {:.2}", self.speed),
            format!("Altitude: {:.1}", self.altitude),
            format!("Throttle: {:.0}%", self.throttle_fraction * 100.0),
            format!("Pitch: {:.1}°", self.pitch),
            format!("Roll: {:.1}°", self.roll),
            format!("Yaw: {:.1}°", self.yaw),
        ];
        if self.crashed {
            lines.push(String::new());
            lines.push("=== CRASHED ===".to_string());
            lines.push("Press R to restart".to_string());
        }
        lines
    }

    /// One-line form for places with no room for the full panel (e.g. a window title).
    pub fn summary(&self) -> String {
        if self.crashed {
            return "CRASHED - press R to restart".to_string();
        }
        format!(
            "SPD {:.2}  ALT {:.1}  THR {:.0}%  HDG {:.0}°",
            self.speed,
            self.altitude,
            self.throttle_fraction * 100.0,
            self.yaw
        )
    }
}
