//! Session creation, destruction, reinitialization and generation queries.

use super::{VL_NULL_POINTER, VL_OK};
use crate::state::Simulation;

/// Creates a new simulation with a single dead layer.
///
/// # Returns
/// A pointer to a new Simulation, or null if a dimension is not positive.
///
/// # Safety
/// The returned pointer must eventually be freed with `vl_destroy()`.
#[no_mangle]
pub extern "C" fn vl_create(size_x: i32, size_z: i32) -> *mut Simulation {
    match Simulation::new(size_x, size_z) {
        Ok(sim) => Box::into_raw(Box::new(sim)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Destroys a simulation and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `vl_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn vl_destroy(ptr: *mut Simulation) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Replaces the grid with an empty single-layer grid and resets the active layer.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 3 if a dimension is not positive.
#[no_mangle]
pub unsafe extern "C" fn vl_initialize(ptr: *mut Simulation, size_x: i32, size_z: i32) -> i32 {
    if ptr.is_null() {
        return VL_NULL_POINTER;
    }

    let sim = &mut *ptr;
    match sim.initialize(size_x, size_z) {
        Ok(()) => VL_OK,
        Err(err) => err.code(),
    }
}

/// Gets the number of steps taken since the last (re)initialization.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Simulation, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn vl_get_generation(ptr: *const Simulation) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_create_and_destroy() {
        unsafe {
            let sim = vl_create(8, 8);
            assert!(!sim.is_null());

            // Should not crash
            vl_destroy(sim);
        }
    }

    #[test]
    fn test_create_invalid_dimension() {
        assert!(vl_create(0, 8).is_null());
        assert!(vl_create(8, -1).is_null());
    }

    #[test]
    fn test_initial_generation() {
        unsafe {
            let sim = vl_create(4, 4);
            assert_eq!(vl_get_generation(sim), 0);
            vl_destroy(sim);
        }
    }

    #[test]
    fn test_initialize() {
        unsafe {
            let sim = vl_create(4, 4);

            assert_eq!(vl_initialize(sim, 10, 6), VL_OK);
            assert_eq!((*sim).grid().size_x(), 10);
            assert_eq!((*sim).grid().size_z(), 6);

            assert_eq!(vl_initialize(sim, 0, 6), 3);
            assert_eq!((*sim).grid().size_x(), 10);

            vl_destroy(sim);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            // Should not crash
            vl_destroy(ptr::null_mut());
            assert_eq!(vl_get_generation(ptr::null()), 0);
            assert_eq!(vl_initialize(ptr::null_mut(), 4, 4), VL_NULL_POINTER);
        }
    }
}
