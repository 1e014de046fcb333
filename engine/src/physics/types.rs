//! Math types shared by the physics code, re-exported from glam.

pub use glam::{IVec2, Vec3};
