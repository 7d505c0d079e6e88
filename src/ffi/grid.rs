//! Cell access, layer growth and layer selection.

use super::{VL_NULL_POINTER, VL_OK};
use crate::state::Simulation;

/// Appends one dead layer on top of the grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The new layer count, or -1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn vl_add_layer(ptr: *mut Simulation) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    let sim = &mut *ptr;
    sim.add_layer();
    sim.grid().size_y()
}

/// Gets the number of layers in the grid.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The layer count, or 0 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn vl_size_y(ptr: *const Simulation) -> i32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).grid().size_y()
}

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 if the coordinates are outside the grid.
#[no_mangle]
pub unsafe extern "C" fn vl_set_cell(
    ptr: *mut Simulation,
    x: i32,
    y: i32,
    z: i32,
    alive: u8,
) -> i32 {
    if ptr.is_null() {
        return VL_NULL_POINTER;
    }

    let sim = &mut *ptr;
    match sim.set_cell(x, y, z, alive != 0) {
        Ok(()) => VL_OK,
        Err(err) => err.code(),
    }
}

/// Gets the state of a cell.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 1 if alive, 0 if dead, -1 if out of bounds or null pointer.
#[no_mangle]
pub unsafe extern "C" fn vl_get_cell(ptr: *const Simulation, x: i32, y: i32, z: i32) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    match (*ptr).get_cell(x, y, z) {
        Some(cell) => cell as i32,
        None => -1,
    }
}

/// Selects the active layer, clamped to the valid range.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The layer actually selected, or -1 on null pointer.
#[no_mangle]
pub unsafe extern "C" fn vl_select_layer(ptr: *mut Simulation, layer: i32) -> i32 {
    if ptr.is_null() {
        return -1;
    }
    (*ptr).select_layer(layer)
}

/// Flips the cell at `(x, active layer, z)`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The new state (1 alive, 0 dead), or -1 if out of bounds or null pointer.
#[no_mangle]
pub unsafe extern "C" fn vl_toggle_cell(ptr: *mut Simulation, x: i32, z: i32) -> i32 {
    if ptr.is_null() {
        return -1;
    }

    match (*ptr).toggle_cell(x, z) {
        Ok(cell) => cell as i32,
        Err(_) => -1,
    }
}
