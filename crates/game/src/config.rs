//! Game configuration (window, tick rate, flight tuning). Loaded from config.ron at startup.

use anyhow::{ensure, Context, Result};
use engine_core::{MAX_TICK_RATE_HZ, MIN_TICK_RATE_HZ};
use physics::{ControlRates, FlightParams};
use serde::{Deserialize, Serialize};

/// Game settings. Loaded from `config.ron` in the current directory; every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window width in logical pixels.
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Window height in logical pixels.
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Start in fullscreen.
    #[serde(default)]
    pub fullscreen: bool,
    /// Scenery seed. `None` picks a fresh one every run.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Simulation ticks per second. Flight tuning assumes 60.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_hz: f64,
    /// Most ticks run to catch up after a slow frame.
    #[serde(default = "default_max_ticks_per_frame")]
    pub max_ticks_per_frame: u32,
    #[serde(default)]
    pub flight: FlightParams,
    #[serde(default)]
    pub controls: ControlRates,
}

fn default_window_width() -> u32 {
    800
}
fn default_window_height() -> u32 {
    600
}
fn default_tick_rate() -> f64 {
    engine_core::DEFAULT_TICK_RATE_HZ
}
fn default_max_ticks_per_frame() -> u32 {
    5
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            fullscreen: false,
            seed: None,
            tick_rate_hz: default_tick_rate(),
            max_ticks_per_frame: default_max_ticks_per_frame(),
            flight: FlightParams::default(),
            controls: ControlRates::default(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match Self::from_ron(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    pub fn from_ron(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }

    /// Reject settings the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (MIN_TICK_RATE_HZ..=MAX_TICK_RATE_HZ).contains(&self.tick_rate_hz),
            "tick_rate_hz must be between {} and {}, got {}",
            MIN_TICK_RATE_HZ,
            MAX_TICK_RATE_HZ,
            self.tick_rate_hz
        );
        if (self.tick_rate_hz - engine_core::DEFAULT_TICK_RATE_HZ).abs() > f64::EPSILON {
            log::warn!(
                "Running at {} Hz; flight tuning is per tick and was made for {} Hz",
                self.tick_rate_hz,
                engine_core::DEFAULT_TICK_RATE_HZ
            );
        }
        self.flight.validate().context("invalid flight parameters")?;
        self.controls.validate().context("invalid control rates")?;
        Ok(())
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from(".")).join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_all_defaults() {
        let config = GameConfig::from_ron("()").unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.seed, None);
        assert_eq!(config.flight, FlightParams::default());
        assert_eq!(config.controls, ControlRates::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = GameConfig::from_ron(
            "(seed: Some(42), flight: (max_speed: 3.0), controls: (throttle: 0.01))",
        )
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.flight.max_speed, 3.0);
        assert_eq!(config.flight.acceleration, 0.01);
        assert_eq!(config.controls.throttle, 0.01);
        assert_eq!(config.controls.pitch, 0.5);
    }

    #[test]
    fn invalid_flight_params_fail_validation() {
        let config = GameConfig::from_ron("(flight: (max_speed: -2.0))").unwrap();
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("max_speed"));
    }

    #[test]
    fn tick_rate_outside_bounds_is_rejected() {
        for rate in [0.0, -60.0, 0.5, 1e10, f64::NAN, f64::INFINITY] {
            let config = GameConfig {
                tick_rate_hz: rate,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{} Hz passed validation", rate);
        }
        let config = GameConfig::from_ron("(tick_rate_hz: 1e10)").unwrap();
        assert!(config.validate().is_err());

        let config = GameConfig {
            tick_rate_hz: MAX_TICK_RATE_HZ,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_control_rate_fails_validation() {
        let config = GameConfig::from_ron("(controls: (throttle: -0.01))").unwrap();
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("throttle"));
    }

    #[test]
    fn malformed_ron_is_an_error() {
        assert!(GameConfig::from_ron("(window_width: \"wide\")").is_err());
    }
}
