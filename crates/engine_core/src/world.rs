//! Fixed world layout shared by the simulation and whatever draws it.

use glam::Vec3;

/// Height of the ground plane.
pub const GROUND_LEVEL: f32 = -5.0;
/// Height of the sky plane.
pub const SKY_LEVEL: f32 = 100.0;
/// The aircraft is kept within ±this on x and z.
pub const WORLD_HALF_EXTENT: f32 = 200.0;
/// Reference point of the airfield (runway centre, on the ground).
pub const AIRPORT_POSITION: Vec3 = Vec3::new(0.0, GROUND_LEVEL, 50.0);

pub const RUNWAY: Rect = Rect::new(-15.0, 15.0, 30.0, 70.0);
pub const RUNWAY_CENTER_LINE: Rect = Rect::new(-2.0, 2.0, 30.0, 70.0);
pub const APRON: Rect = Rect::new(-30.0, 30.0, 40.0, 60.0);

/// Axis-aligned rectangle on the ground (XZ) plane, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Rect {
    pub const fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    pub fn contains(&self, x: f32, z: f32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_z..=self.max_z).contains(&z)
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_x + self.max_x) * 0.5,
            (self.min_z + self.max_z) * 0.5,
        )
    }
}
