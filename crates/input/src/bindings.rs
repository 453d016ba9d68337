use winit::keyboard::KeyCode;

/// Which keys drive which flight control.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub throttle_up: Vec<KeyCode>,
    pub throttle_down: Vec<KeyCode>,
    pub yaw_left: Vec<KeyCode>,
    pub yaw_right: Vec<KeyCode>,
    pub pitch_up: Vec<KeyCode>,
    pub pitch_down: Vec<KeyCode>,
    pub roll_left: Vec<KeyCode>,
    pub roll_right: Vec<KeyCode>,
    pub reset: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            throttle_up: vec![KeyCode::ArrowUp],
            throttle_down: vec![KeyCode::ArrowDown],
            yaw_left: vec![KeyCode::ArrowLeft],
            yaw_right: vec![KeyCode::ArrowRight],
            pitch_up: vec![KeyCode::KeyW],
            pitch_down: vec![KeyCode::KeyS],
            roll_left: vec![KeyCode::KeyA],
            roll_right: vec![KeyCode::KeyD],
            reset: vec![KeyCode::KeyR],
            quit: vec![KeyCode::Escape],
        }
    }
}

impl KeyBindings {
    /// Human readable key list for the help panel, e.g. "W / S".
    pub fn describe(keys: &[KeyCode]) -> String {
        keys.iter()
            .map(|k| key_label(*k))
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

fn key_label(key: KeyCode) -> String {
    match key {
        KeyCode::ArrowUp => "↑".to_string(),
        KeyCode::ArrowDown => "↓".to_string(),
        KeyCode::ArrowLeft => "←".to_string(),
        KeyCode::ArrowRight => "→".to_string(),
        KeyCode::Escape => "Esc".to_string(),
        other => {
            let name = format!("{:?}", other);
            name.strip_prefix("Key").map(str::to_string).unwrap_or(name)
        }
    }
}
