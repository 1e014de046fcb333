//! Camera Module
//!
//! First-person orientation and screen-center picking.
//! Window-system agnostic; only camera state and math.

pub mod fps_controller;
pub mod raycast;

pub use fps_controller::{FPSCameraController, MOUSE_SENSITIVITY, yaw_forward, yaw_right};
pub use raycast::{BlockHit, MAX_PICK_DISTANCE, Target, pick_target, raycast_blocks};
