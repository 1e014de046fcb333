//! Collision Tests - Overlap, Penetration and Ground Level
//!
//! Box tests against the world's block array.

use block_sandbox_engine::physics::collision::{
    Aabb, BodyDimensions, boxes_overlap, collides_with_world, resolve_penetration,
};
use block_sandbox_engine::physics::grounding::{OUT_OF_BOUNDS_GROUND, find_ground_level};
use block_sandbox_engine::world::{BlockType, World};
use glam::Vec3;

fn player_box(position: Vec3) -> Aabb {
    BodyDimensions::default().aabb_at(position)
}

// ============================================================================
// Overlap
// ============================================================================

#[test]
fn test_overlap_is_symmetric() {
    let cases = [
        (Aabb::unit_cube(Vec3::ZERO), Aabb::unit_cube(Vec3::new(0.5, 0.5, 0.5))),
        (Aabb::unit_cube(Vec3::ZERO), Aabb::unit_cube(Vec3::new(3.0, 0.0, 0.0))),
        (player_box(Vec3::new(1.0, 2.0, 1.0)), Aabb::unit_cube(Vec3::new(1.0, 0.5, 1.0))),
    ];
    for (a, b) in cases {
        assert_eq!(boxes_overlap(&a, &b), boxes_overlap(&b, &a));
    }
}

#[test]
fn test_touching_faces_overlap() {
    let block = Aabb::unit_cube(Vec3::new(5.0, 0.5, 5.0));
    // Feet exactly on the top face
    let standing = player_box(Vec3::new(5.0, 2.0, 5.0));
    assert!(boxes_overlap(&standing, &block));

    let hovering = player_box(Vec3::new(5.0, 2.001, 5.0));
    assert!(!boxes_overlap(&hovering, &block));
}

// ============================================================================
// Penetration correction
// ============================================================================

#[test]
fn test_no_overlap_gives_zero_correction() {
    let mut world = World::with_seed(1);
    world.insert_block(Vec3::new(5.0, 0.5, 5.0), BlockType::Stone);
    let correction = resolve_penetration(&player_box(Vec3::new(8.0, 1.5, 8.0)), &world);
    assert_eq!(correction, Vec3::ZERO);
}

#[test]
fn test_push_along_shallowest_axis_towards_near_face() {
    let mut world = World::with_seed(1);
    world.insert_block(Vec3::new(5.0, 0.5, 5.0), BlockType::Stone);

    // Player's +X side is 0.2 into the block.
    let correction = resolve_penetration(&player_box(Vec3::new(4.4, 0.5, 5.0)), &world);
    assert!((correction.x - (-0.2)).abs() < 1e-4, "got {correction:?}");
    assert_eq!(correction.y, 0.0);
    assert_eq!(correction.z, 0.0);

    // Player's -X side is 0.2 into the block.
    let correction = resolve_penetration(&player_box(Vec3::new(5.6, 0.5, 5.0)), &world);
    assert!((correction.x - 0.2).abs() < 1e-4, "got {correction:?}");
}

#[test]
fn test_landing_pushes_up() {
    let mut world = World::with_seed(1);
    world.insert_block(Vec3::new(5.0, 0.5, 5.0), BlockType::Stone);

    // Feet 0.1 below the top face.
    let correction = resolve_penetration(&player_box(Vec3::new(5.0, 1.9, 5.0)), &world);
    assert!((correction.y - 0.1).abs() < 1e-4, "got {correction:?}");
    assert_eq!(correction.x, 0.0);
}

#[test]
fn test_first_overlapping_block_wins() {
    let position = Vec3::new(4.4, 0.5, 5.0);

    let mut world = World::with_seed(1);
    world.insert_block(Vec3::new(5.0, 0.5, 5.0), BlockType::Stone);
    world.insert_block(Vec3::new(4.0, 0.5, 5.0), BlockType::Stone);
    let correction = resolve_penetration(&player_box(position), &world);
    assert!((correction.x - (-0.2)).abs() < 1e-4);

    let mut reversed = World::with_seed(1);
    reversed.insert_block(Vec3::new(4.0, 0.5, 5.0), BlockType::Stone);
    reversed.insert_block(Vec3::new(5.0, 0.5, 5.0), BlockType::Stone);
    let correction = resolve_penetration(&player_box(position), &reversed);
    assert!((correction.x - 0.4).abs() < 1e-4);
}

#[test]
fn test_inactive_blocks_are_ignored() {
    let mut world = World::with_seed(1);
    let handle = world.insert_block(Vec3::new(5.0, 0.5, 5.0), BlockType::Stone);
    let bounds = player_box(Vec3::new(5.0, 1.0, 5.0));
    assert!(collides_with_world(&bounds, &world));

    world.deactivate_block(handle);
    assert!(!collides_with_world(&bounds, &world));
    assert_eq!(resolve_penetration(&bounds, &world), Vec3::ZERO);
}

// ============================================================================
// Ground level
// ============================================================================

#[test]
fn test_ground_level_of_empty_column_is_zero() {
    let world = World::with_seed(1);
    assert_eq!(find_ground_level(Vec3::new(0.0, 3.0, 0.0), &world), 0.0);
    assert_eq!(find_ground_level(Vec3::new(99.4, 3.0, 99.4), &world), 0.0);
}

#[test]
fn test_ground_level_off_board() {
    let world = World::with_seed(1);
    assert_eq!(find_ground_level(Vec3::new(99.6, 3.0, 50.0), &world), OUT_OF_BOUNDS_GROUND);
    assert_eq!(find_ground_level(Vec3::new(50.0, 3.0, -0.6), &world), OUT_OF_BOUNDS_GROUND);
}

#[test]
fn test_ground_level_of_stacked_column() {
    let mut world = World::with_seed(1);
    world.insert_block(Vec3::new(7.0, 0.0, 7.0), BlockType::Stone);
    world.insert_block(Vec3::new(7.0, 1.0, 7.0), BlockType::Dirt);
    assert_eq!(find_ground_level(Vec3::new(7.0, 10.0, 7.0), &world), 1.5);
    // Neighbouring column is unaffected
    assert_eq!(find_ground_level(Vec3::new(8.0, 10.0, 7.0), &world), 0.0);
}
