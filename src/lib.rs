//! Voxel Life - 3D Game of Life engine
//!
//! A bounded, vertically growable voxel grid stepped with configurable
//! survival and birth thresholds over the 26-cell Moore neighborhood. Each
//! step reports which cells were created or destroyed so a renderer can
//! mirror the change.
//!
//! The Rust API lives in [`Simulation`] and the [`automaton`] module; the
//! `ffi` module exposes the same operations over a C ABI.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;


pub use automaton::{CellState, ChangeSet, Decision, Grid, Rules};
pub use config::SimulationConfig;
pub use error::{GridError, Result};
pub use state::Simulation;
