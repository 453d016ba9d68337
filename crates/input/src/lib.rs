//! Keyboard input handling and translation into flight control intents.

mod bindings;

pub use bindings::KeyBindings;

use engine_core::ControlInput;
use std::collections::HashSet;

/// Manages keyboard state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,
    /// Keys released this frame.
    keys_released: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call once the frame's ticks have consumed the input.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
                self.keys_released.insert(key);
            }
        }
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        if !self.keys_held.is_empty() {
            log::debug!("Releasing {} held keys", self.keys_held.len());
        }
        self.keys_released.extend(self.keys_held.drain());
    }

    // Query methods

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Snapshot the held flight controls as intents for one tick.
    pub fn control_input(&self, bindings: &KeyBindings) -> ControlInput {
        ControlInput {
            throttle_up: self.any_held(&bindings.throttle_up),
            throttle_down: self.any_held(&bindings.throttle_down),
            yaw_left: self.any_held(&bindings.yaw_left),
            yaw_right: self.any_held(&bindings.yaw_right),
            pitch_up: self.any_held(&bindings.pitch_up),
            pitch_down: self.any_held(&bindings.pitch_down),
            roll_left: self.any_held(&bindings.roll_left),
            roll_right: self.any_held(&bindings.roll_right),
            reset: self.any_held(&bindings.reset),
            quit: bindings.quit.iter().any(|k| self.is_key_pressed(*k)),
        }
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.is_key_held(*k))
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
