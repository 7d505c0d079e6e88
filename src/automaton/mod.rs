//! Core automaton logic and grid operations.
//!
//! This module contains the grid data model, neighbor counting, the rule
//! table and generation stepping. The `Simulation` session and the FFI layer
//! in `ffi/` call these functions.

pub mod coords;
pub mod grid;
pub mod neighbors;
pub mod rules;
pub mod stepping;

pub use coords::{to_array, to_world, world_offset};
pub use grid::{CellState, Grid};
pub use neighbors::count_neighbors;
pub use rules::{Decision, Rules};
pub use stepping::{step_automaton, ChangeSet};
