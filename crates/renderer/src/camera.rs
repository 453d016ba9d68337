//! Chase camera that trails the aircraft.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use physics::FlightState;

/// Where the camera is and what it looks at for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

/// Third-person camera placed behind and above the aircraft.
///
/// Holds only lens and offset settings; the pose is derived from the flight
/// state every frame.
#[derive(Debug, Clone)]
pub struct ChaseCamera {
    /// Distance behind the aircraft along its heading.
    pub distance: f32,
    /// Height above the aircraft.
    pub height: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            distance: 15.0,
            height: 5.0,
            fov_degrees: 45.0,
            near: 0.1,
            far: 500.0,
            aspect: 4.0 / 3.0,
        }
    }
}

impl ChaseCamera {
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self::default();
        camera.set_aspect(width, height);
        camera
    }

    /// Update aspect ratio (call on window resize).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Camera pose for the given state.
    ///
    /// Trails along yaw only, so pitching or banking never swings the camera.
    pub fn frame(&self, state: &FlightState) -> CameraFrame {
        let yaw = state.rotation.yaw.to_radians();
        let p = state.position;
        CameraFrame {
            eye: Vec3::new(
                p.x - yaw.sin() * self.distance,
                p.y + self.height,
                p.z - yaw.cos() * self.distance,
            ),
            target: p,
            up: Vec3::Y,
        }
    }

    /// Get the view matrix.
    pub fn view_matrix(&self, state: &FlightState) -> Mat4 {
        let frame = self.frame(state);
        Mat4::look_at_rh(frame.eye, frame.target, frame.up)
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Get the combined view-projection matrix.
    pub fn view_projection_matrix(&self, state: &FlightState) -> Mat4 {
        self.projection_matrix() * self.view_matrix(state)
    }
}

/// Camera uniform data for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub position: [f32; 4], // w unused, padding
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 4],
        }
    }

    pub fn update(&mut self, camera: &ChaseCamera, state: &FlightState) {
        self.view = camera.view_matrix(state).to_cols_array_2d();
        self.proj = camera.projection_matrix().to_cols_array_2d();
        self.view_proj = camera.view_projection_matrix(state).to_cols_array_2d();
        let eye = camera.frame(state).eye;
        self.position = [eye.x, eye.y, eye.z, 1.0];
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics::Attitude;

    #[test]
    fn sits_behind_and_above_at_zero_yaw() {
        let state = FlightState {
            position: Vec3::new(0.0, 10.0, 20.0),
            ..Default::default()
        };
        let frame = ChaseCamera::default().frame(&state);
        assert!((frame.eye - Vec3::new(0.0, 15.0, 5.0)).length() < 1e-5);
        assert_eq!(frame.target, state.position);
        assert_eq!(frame.up, Vec3::Y);
    }

    #[test]
    fn follows_heading_and_ignores_bank() {
        let state = FlightState {
            position: Vec3::new(0.0, 0.0, 0.0),
            rotation: Attitude::new(30.0, 45.0, 90.0),
            ..Default::default()
        };
        let frame = ChaseCamera::default().frame(&state);
        assert!((frame.eye - Vec3::new(-15.0, 5.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn target_lands_in_view_center() {
        let camera = ChaseCamera::new(800, 600);
        let state = FlightState {
            position: Vec3::new(40.0, 20.0, -10.0),
            rotation: Attitude::new(0.0, 0.0, 200.0),
            ..Default::default()
        };
        let clip = camera.view_projection_matrix(&state) * state.position.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
    }

    #[test]
    fn uniform_records_eye() {
        let camera = ChaseCamera::default();
        let state = FlightState::default();
        let mut uniform = CameraUniform::new();
        uniform.update(&camera, &state);
        assert_eq!(uniform.position, [0.0, 5.0, -15.0, 1.0]);
    }
}
