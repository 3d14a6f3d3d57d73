//! Camera state and per-snap pose table
//!
//! The camera always looks at the world origin; its free state is the
//! position plus a pitch parameter used only by continuous mode. The
//! renderer derives the view matrix from position + look-at + pitch.

use parallax_math::Vec3;

/// Vertical field of view in degrees
pub const FOV_Y_DEGREES: f32 = 75.0;
/// Near clip plane
pub const NEAR_PLANE: f32 = 0.1;
/// Far clip plane
pub const FAR_PLANE: f32 = 1000.0;

/// Per-snap camera positions: front, angled, side, top-down
pub const SNAP_CAMERA_POSITIONS: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 5.0),
    Vec3::new(3.0, 2.0, 4.0),
    Vec3::new(-2.0, 3.0, 5.0),
    Vec3::new(0.0, 4.0, 3.0),
];

/// Camera pose. Look-at target is fixed at the origin.
#[derive(Clone, Copy, Debug)]
pub struct CameraState {
    pub position: Vec3,
    /// Extra pitch applied after the look-at orientation (continuous mode)
    pub pitch: f32,
}

impl CameraState {
    pub fn new() -> Self {
        Self {
            position: SNAP_CAMERA_POSITIONS[0],
            pitch: 0.0,
        }
    }

    /// Target the camera faces, every frame, regardless of position
    pub fn look_target(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// Unit vector from the camera toward the look target
    pub fn forward(&self) -> Vec3 {
        (self.look_target() - self.position).normalize()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera target for a snap. The resolver clamps the index before it can
/// reach this table, so indexing is infallible by construction.
pub fn snap_camera_target(snap: usize) -> Vec3 {
    SNAP_CAMERA_POSITIONS[snap]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pose() {
        let cam = CameraState::new();
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(cam.pitch, 0.0);
    }

    #[test]
    fn test_look_target_is_origin() {
        let mut cam = CameraState::new();
        cam.position = Vec3::new(3.0, 2.0, 4.0);
        assert_eq!(cam.look_target(), Vec3::ZERO);
    }

    #[test]
    fn test_forward_points_at_origin() {
        let mut cam = CameraState::new();
        cam.position = Vec3::new(0.0, 0.0, 5.0);
        let f = cam.forward();
        assert!((f - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_snap_table_boundaries() {
        assert_eq!(snap_camera_target(0), Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(snap_camera_target(3), Vec3::new(0.0, 4.0, 3.0));
    }
}
