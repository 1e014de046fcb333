//! FPS Camera Controller Module
//!
//! First-person look: raw mouse motion rotates the camera directly while the
//! cursor is captured. No smoothing.
//!
//! # Coordinate System
//! - +X = right
//! - +Y = up
//! - -Z = forward at yaw 0
//!
//! Pitch is clamped to ±89 degrees; yaw is unrestricted.

use glam::Vec3;

/// Pitch limit constant: -89 degrees in radians
const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Default mouse sensitivity in radians per pixel.
pub const MOUSE_SENSITIVITY: f32 = 0.003;

/// FPS Camera Controller
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = FPSCameraController::new();
///
/// // Once per frame, while captured
/// camera.apply_mouse_delta(mouse_dx, mouse_dy);
/// camera.set_position(player.position);
///
/// let ray_direction = camera.get_forward();
/// ```
#[derive(Clone, Debug)]
pub struct FPSCameraController {
    /// Eye position in world space, copied from the player each frame
    pub position: Vec3,
    /// Horizontal angle (radians) - unrestricted, wraps around
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to pitch_limits
    pub pitch: f32,
    /// Mouse sensitivity in radians per pixel
    pub sensitivity: f32,
    /// Pitch limits (min, max) in radians
    pitch_limits: (f32, f32),
}

impl Default for FPSCameraController {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: MOUSE_SENSITIVITY,
            pitch_limits: (PITCH_LIMIT_MIN, PITCH_LIMIT_MAX),
        }
    }
}

impl FPSCameraController {
    /// Create a new FPS camera controller with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera at `position` with the given sensitivity.
    pub fn with_position_and_sensitivity(position: Vec3, sensitivity: f32) -> Self {
        Self {
            position,
            sensitivity,
            ..Default::default()
        }
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the pitch angle directly (in radians, will be clamped to limits)
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    /// Apply mouse movement delta to rotate the camera
    ///
    /// * `dx` - Positive = mouse moved right = look right (increase yaw)
    /// * `dy` - Positive = mouse moved down = look down (decrease pitch)
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    /// Normalized view direction from yaw and pitch.
    #[inline]
    pub fn get_forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Normalized right vector, horizontal.
    #[inline]
    pub fn get_right(&self) -> Vec3 {
        self.get_forward().cross(Vec3::Y).normalize()
    }

    #[inline]
    pub fn get_up(&self) -> Vec3 {
        self.get_right().cross(self.get_forward()).normalize()
    }

    /// Reset camera orientation to default (looking toward -Z)
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}

/// Horizontal forward for a yaw angle; pitch never affects walking.
#[inline]
pub fn yaw_forward(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Horizontal right for a yaw angle (`forward x Y`).
#[inline]
pub fn yaw_right(yaw: f32) -> Vec3 {
    let forward = yaw_forward(yaw);
    Vec3::new(-forward.z, 0.0, forward.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sensitivity() {
        let camera = FPSCameraController::new();
        assert!((camera.sensitivity - 0.003).abs() < 0.0001);
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
    }

    #[test]
    fn test_apply_mouse_delta() {
        let mut camera = FPSCameraController::new();
        camera.apply_mouse_delta(100.0, 0.0);
        assert!((camera.yaw - 0.3).abs() < 0.001);
        assert_eq!(camera.pitch, 0.0);

        camera.apply_mouse_delta(0.0, 100.0);
        assert!((camera.pitch - (-0.3)).abs() < 0.001);
    }

    #[test]
    fn test_pitch_clamping() {
        let mut camera = FPSCameraController::new();
        camera.apply_mouse_delta(0.0, -100000.0);
        let max_pitch = 89.0 * std::f32::consts::PI / 180.0;
        assert!((camera.pitch - max_pitch).abs() < 0.001);

        camera.set_pitch(-10.0);
        assert!((camera.pitch + max_pitch).abs() < 0.001);
    }

    #[test]
    fn test_forward_vector_at_origin() {
        let forward = FPSCameraController::new().get_forward();
        assert!(forward.x.abs() < 0.001);
        assert!(forward.y.abs() < 0.001);
        assert!((forward.z - (-1.0)).abs() < 0.001);
    }

    #[test]
    fn test_direction_vectors_orthonormal() {
        let mut camera = FPSCameraController::new();
        camera.apply_mouse_delta(50.0, 30.0);

        let forward = camera.get_forward();
        let right = camera.get_right();
        let up = camera.get_up();

        assert!(forward.dot(right).abs() < 0.001);
        assert!(forward.dot(up).abs() < 0.001);
        assert!(right.dot(up).abs() < 0.001);
        assert!((right.length() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_yaw_basis_matches_camera_right() {
        let mut camera = FPSCameraController::new();
        camera.apply_mouse_delta(200.0, 0.0);
        assert!((yaw_right(camera.yaw) - camera.get_right()).length() < 0.001);
        assert!((yaw_forward(camera.yaw) - camera.get_forward()).length() < 0.001);
    }
}
