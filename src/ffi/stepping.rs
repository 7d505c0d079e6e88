//! Stepping and change-set readback.

use super::{VL_CREATED, VL_DESTROYED};
use crate::automaton::Rules;
use crate::state::Simulation;
use glam::IVec3;

fn changes_of(sim: &Simulation, kind: u8) -> Option<&[IVec3]> {
    let changes = sim.last_changes();
    match kind {
        VL_CREATED => Some(changes.created.as_slice()),
        VL_DESTROYED => Some(changes.destroyed.as_slice()),
        _ => None,
    }
}

/// Advances layers `0..=current_layer` by one generation.
///
/// The change-set is kept in the simulation until the next step; read it back
/// with `vl_change_count` and `vl_copy_changes`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// Total number of created plus destroyed cells, or 0 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn vl_step(
    ptr: *mut Simulation,
    underpopulation: u8,
    overpopulation: u8,
    respawn_lower: u8,
    respawn_upper: u8,
    current_layer: i32,
) -> u64 {
    if ptr.is_null() {
        return 0;
    }

    let sim = &mut *ptr;
    let rules = Rules::new(underpopulation, overpopulation, respawn_lower, respawn_upper);
    sim.step(&rules, current_layer).len() as u64
}

/// Number of cells in one half of the last change-set.
///
/// `kind` is `VL_CREATED` (0) or `VL_DESTROYED` (1).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The cell count, or 0 on null pointer or unknown kind.
#[no_mangle]
pub unsafe extern "C" fn vl_change_count(ptr: *const Simulation, kind: u8) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    changes_of(&*ptr, kind).map_or(0, |cells| cells.len() as u64)
}

/// Copies cell coordinates from the last change-set into a flat buffer.
///
/// # Layout
/// Each cell is written as three consecutive `i32` values `x, y, z` in array
/// space. At most `capacity` cells are written.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
/// - `out_buf` must point to a buffer of at least `capacity * 3` `i32` values
///
/// # Returns
/// Number of cells written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn vl_copy_changes(
    ptr: *const Simulation,
    kind: u8,
    out_buf: *mut i32,
    capacity: u64,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let Some(cells) = changes_of(&*ptr, kind) else {
        return 0;
    };

    let count = cells.len().min(capacity as usize);
    let out_slice = std::slice::from_raw_parts_mut(out_buf, count * 3);
    for (chunk, cell) in out_slice.chunks_exact_mut(3).zip(cells) {
        chunk.copy_from_slice(&cell.to_array());
    }

    count as u64
}
