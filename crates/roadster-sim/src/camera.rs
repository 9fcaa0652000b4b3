use glam::{Mat4, Vec3};

use crate::vehicle::VehicleState;

/// Chase camera: derived from the tracked vehicle every frame, never
/// independently controlled.
///
/// The eye follows the car's x at a fixed height, offset behind the current
/// z; the look-at target sits ahead of the car on the world z axis. Both are
/// recomputed from scratch each frame, so there is nothing to keep in sync.
#[derive(Debug, Copy, Clone)]
pub struct ChaseCamera {
    /// Eye height above the ground.
    pub height: f32,
    /// Eye distance behind the car along +z.
    pub follow_distance: f32,
    /// Target distance ahead of the car along -z.
    pub look_ahead: f32,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            height: 5.0,
            follow_distance: 13.0,
            look_ahead: 10.0,
            fov_y_deg: 30.0,
            z_near: 1.0,
            z_far: 100.0,
        }
    }
}

impl ChaseCamera {
    /// Eye position for the current vehicle state.
    pub fn eye(&self, state: &VehicleState) -> Vec3 {
        Vec3::new(
            state.position.x,
            self.height,
            state.position.z + self.follow_distance,
        )
    }

    /// Look-at target for the current vehicle state.
    pub fn target(&self, state: &VehicleState) -> Vec3 {
        Vec3::new(0.0, 0.0, state.position.z - self.look_ahead)
    }

    /// View matrix (right-handed look-at, world up).
    pub fn view(&self, state: &VehicleState) -> Mat4 {
        Mat4::look_at_rh(self.eye(state), self.target(state), Vec3::Y)
    }

    /// Projection matrix for the given surface aspect ratio.
    ///
    /// Uses wgpu's 0..1 clip depth convention (`perspective_rh`), not the
    /// GL -1..1 range.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), aspect, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn eye_tracks_vehicle_position() {
        let camera = ChaseCamera::default();
        let state = VehicleState {
            position: Vec3::new(4.0, 2.0, -7.0),
            ..VehicleState::default()
        };
        assert_eq!(camera.eye(&state), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(camera.target(&state), Vec3::new(0.0, 0.0, -17.0));
    }

    #[test]
    fn eye_height_ignores_vehicle_vertical_offset() {
        let camera = ChaseCamera::default();
        let state = VehicleState {
            position: Vec3::new(0.0, 9.0, 0.0),
            ..VehicleState::default()
        };
        assert_eq!(camera.eye(&state).y, 5.0);
    }

    #[test]
    fn view_places_eye_at_origin() {
        let camera = ChaseCamera::default();
        let state = VehicleState::default();
        let eye = camera.eye(&state);
        let transformed = camera.view(&state) * Vec4::new(eye.x, eye.y, eye.z, 1.0);
        assert!(transformed.truncate().length() < 1e-4);
    }

    #[test]
    fn projection_maps_near_plane_to_zero_depth() {
        let camera = ChaseCamera::default();
        let proj = camera.projection(1.0);
        let on_near = proj * Vec4::new(0.0, 0.0, -camera.z_near, 1.0);
        assert!((on_near.z / on_near.w).abs() < 1e-5);
    }
}
