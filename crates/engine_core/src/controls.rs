//! Control intents for one simulation tick.

/// Snapshot of what the pilot is asking for this tick.
///
/// Produced from held keys by the input layer and consumed by the flight
/// controls. Each flag means "held during this tick".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    /// Nose up.
    pub pitch_up: bool,
    /// Nose down.
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub reset: bool,
    pub quit: bool,
}

impl ControlInput {
    /// True when no flight control is held (reset and quit are not counted).
    pub fn is_neutral(&self) -> bool {
        !(self.throttle_up
            || self.throttle_down
            || self.yaw_left
            || self.yaw_right
            || self.pitch_up
            || self.pitch_down
            || self.roll_left
            || self.roll_right)
    }
}
