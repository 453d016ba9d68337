//! Core engine types and utilities for Skyhop.
//!
//! This crate provides the foundational types shared by every other crate:
//! - Fixed-tick time management
//! - World constants (ground, airport, bounds)
//! - The per-tick control intent snapshot
//! - Model transforms for placing things in the world

pub mod controls;
pub mod time;
pub mod transform;
pub mod world;

pub use controls::*;
pub use time::*;
pub use transform::*;
pub use world::*;

// Re-export commonly used types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
