//! Procedural generation for the scenery around the airfield.

pub mod vegetation;

pub use vegetation::*;
