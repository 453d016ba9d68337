//! Read-only presentation of the simulation: chase camera and instruments.
//!
//! Nothing in this crate mutates flight state.

pub mod camera;
pub mod hud;

pub use camera::*;
pub use hud::*;
