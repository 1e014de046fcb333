//! Board Geometry Module
//!
//! The playable board is a flat `BOARD_SIZE x BOARD_SIZE` footprint of unit
//! cells starting at the origin. Columns are addressed by rounded world X/Z;
//! the vertical axis is unbounded.
//!
//! ## Ground slab
//! The floor is treated as a slab spanning `[-0.5, 0.5]` on Y under every
//! board cell. Picking hits its top face and the feet-box grounding policy
//! uses it as the fallback support.

use glam::{IVec2, Vec3};

/// Edge length of one cell (1 unit = 1 block).
pub const TILE_SIZE: f32 = 1.0;

/// Number of cells along each side of the board.
pub const BOARD_SIZE: i32 = 100;

/// Bottom of the ground slab.
pub const GROUND_SLAB_BOTTOM: f32 = -0.5;

/// Top of the ground slab.
pub const GROUND_SLAB_TOP: f32 = 0.5;

/// Half the edge of a block cube.
pub const HALF_TILE: f32 = TILE_SIZE * 0.5;

/// Tolerance used when comparing two cell positions.
pub const CELL_EPSILON: f32 = 0.1;

/// Column (rounded X, rounded Z) that a world position falls into.
#[inline]
pub fn column_of(position: Vec3) -> IVec2 {
    IVec2::new(position.x.round() as i32, position.z.round() as i32)
}

/// Whether a column lies on the board, `[0, BOARD_SIZE)` on both axes.
#[inline]
pub fn column_on_board(column: IVec2) -> bool {
    column.x >= 0 && column.x < BOARD_SIZE && column.y >= 0 && column.y < BOARD_SIZE
}

/// Whether a position is over the board footprint using the closed range
/// `[0, BOARD_SIZE]` on X and Z (unrounded).
#[inline]
pub fn position_over_board(position: Vec3) -> bool {
    let size = BOARD_SIZE as f32;
    position.x >= 0.0 && position.x <= size && position.z >= 0.0 && position.z <= size
}

/// Snap a position to the nearest grid point on X and Z; Y is preserved.
pub fn snap_to_grid(position: Vec3) -> Vec3 {
    Vec3::new(
        (position.x / TILE_SIZE).round() * TILE_SIZE,
        position.y,
        (position.z / TILE_SIZE).round() * TILE_SIZE,
    )
}

/// Whether two cell positions coincide within [`CELL_EPSILON`] on every axis.
#[inline]
pub fn same_cell(a: Vec3, b: Vec3) -> bool {
    (a.x - b.x).abs() < CELL_EPSILON
        && (a.y - b.y).abs() < CELL_EPSILON
        && (a.z - b.z).abs() < CELL_EPSILON
}

/// Center of the cell containing height `y`. Block centers sit on half
/// units (0.5, 1.5, ...) because the first layer rests on the slab top.
#[inline]
pub fn cell_center_y(y: f32) -> f32 {
    y.floor() + HALF_TILE
}
