//! C FFI layer for renderer/UI hosts.
//!
//! This module exports C ABI functions. All functions are marked with
//! `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in `Simulation` and the `automaton` module. These
//! functions are thin wrappers that handle null checks, pointer safety, and
//! error-to-status-code conversion.

pub mod grid;
pub mod lifecycle;
pub mod stepping;

pub use grid::{
    vl_add_layer, vl_get_cell, vl_select_layer, vl_set_cell, vl_size_y, vl_toggle_cell,
};
pub use lifecycle::{vl_create, vl_destroy, vl_get_generation, vl_initialize};
pub use stepping::{vl_change_count, vl_copy_changes, vl_step};

/// Operation succeeded.
pub const VL_OK: i32 = 0;
/// A required pointer argument was null.
pub const VL_NULL_POINTER: i32 = 1;

/// Change-set selector for created cells.
pub const VL_CREATED: u8 = 0;
/// Change-set selector for destroyed cells.
pub const VL_DESTROYED: u8 = 1;
