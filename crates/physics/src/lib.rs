//! Simplified flight physics for Skyhop.
//!
//! Everything here is a pure state transition over [`FlightState`]; nothing
//! touches a window or a GPU, so the whole flight model runs headless.

pub mod collision;
pub mod controls;
pub mod flight;
pub mod integrator;

pub use collision::*;
pub use controls::*;
pub use flight::*;
pub use integrator::*;
