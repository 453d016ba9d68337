//! Transform and utilities for spatial positioning.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

/// A 3D transform representing position, rotation, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and rotation.
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Rotation from Euler angles in degrees, applied yaw (Y), then pitch (X), then roll (Z).
    pub fn euler_degrees(yaw: f32, pitch: f32, roll: f32) -> Quat {
        Quat::from_rotation_y(yaw.to_radians())
            * Quat::from_rotation_x(pitch.to_radians())
            * Quat::from_rotation_z(roll.to_radians())
    }

    /// Create the model matrix for this transform.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Nose direction of a model built along +Z.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Get the up direction (positive Y).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// Raw transform data for GPU upload (instance data).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct TransformRaw {
    pub model: [[f32; 4]; 4],
}

impl From<&Transform> for TransformRaw {
    fn from(transform: &Transform) -> Self {
        Self {
            model: transform.to_matrix().to_cols_array_2d(),
        }
    }
}

impl From<Transform> for TransformRaw {
    fn from(transform: Transform) -> Self {
        Self::from(&transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_turns_nose_towards_positive_x() {
        let rotation = Transform::euler_degrees(90.0, 0.0, 0.0);
        let t = Transform::from_position_rotation(Vec3::ZERO, rotation);
        let nose = t.forward();
        assert!((nose.x - 1.0).abs() < 1e-5);
        assert!(nose.z.abs() < 1e-5);
    }

    #[test]
    fn roll_only_tilts_up_vector() {
        let rotation = Transform::euler_degrees(0.0, 0.0, 30.0);
        let t = Transform::from_position_rotation(Vec3::ZERO, rotation);
        assert!((t.forward() - Vec3::Z).length() < 1e-5);
        assert!(t.up().y < 1.0);
    }

    #[test]
    fn raw_matrix_carries_translation() {
        let t = Transform::from_position(Vec3::new(1.0, -5.0, 50.0));
        let raw = TransformRaw::from(t);
        assert_eq!(raw.model[3], [1.0, -5.0, 50.0, 1.0]);
        assert_eq!(bytemuck::bytes_of(&raw).len(), 64);
    }
}
