//! Translation between array space and centered world space.
//!
//! World space puts the origin at the horizontal center of the grid. The
//! horizontal offset is `round(size / 2)` with halves rounded up, so an odd
//! axis of 3 cells spans world coordinates -2..=0.

use glam::{IVec3, Vec3};

use super::grid::Grid;

/// Integer offset subtracted from array coordinates to reach world space.
#[inline]
pub fn world_offset(grid: &Grid) -> IVec3 {
    IVec3::new((grid.size_x() + 1) / 2, 0, (grid.size_z() + 1) / 2)
}

/// Convert array coordinates to a world-space position.
pub fn to_world(grid: &Grid, x: i32, y: i32, z: i32) -> Vec3 {
    (IVec3::new(x, y, z) - world_offset(grid)).as_vec3()
}

/// Round one world component and shift it into array space.
///
/// Non-finite input maps to `i32::MIN`, which is outside every grid.
#[inline]
fn axis_to_array(world: f32, offset: i32) -> i32 {
    if !world.is_finite() {
        return i32::MIN;
    }
    (world.round() as i32).saturating_add(offset)
}

/// Convert a world-space position to array coordinates.
///
/// Each component is rounded to the nearest integer with halves rounded away
/// from zero before the offset is applied. The result may lie outside the grid;
/// components too large for `i32` saturate and non-finite ones map to `i32::MIN`.
pub fn to_array(grid: &Grid, world: Vec3) -> IVec3 {
    let offset = world_offset(grid);
    IVec3::new(
        axis_to_array(world.x, offset.x),
        axis_to_array(world.y, offset.y),
        axis_to_array(world.z, offset.z),
    )
}
