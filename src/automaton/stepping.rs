//! Generation stepping with caller-supplied birth/death thresholds.
//!
//! A step runs in two passes. The first pass reads the grid and records every
//! cell that could change into a snapshot; the second pass applies the rules to
//! the snapshot and writes the grid. All neighbor counts therefore see the
//! generation-N grid, whatever order cells are visited in.

use glam::IVec3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::grid::{CellState, Grid};
use super::neighbors::count_neighbors;
use super::rules::{Decision, Rules};

/// Cells whose state changed during one step, in array coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub created: Vec<IVec3>,
    pub destroyed: Vec<IVec3>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.destroyed.is_empty()
    }

    /// Total number of cells that changed.
    pub fn len(&self) -> usize {
        self.created.len() + self.destroyed.len()
    }
}

/// A cell recorded before any mutation of the current generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SnapshotEntry {
    coord: IVec3,
    neighbors: u8,
    alive: bool,
}

/// Record every candidate cell of layer `y`.
///
/// Dead cells without neighbors cannot spawn and are left out.
fn snapshot_layer(grid: &Grid, y: i32) -> Vec<SnapshotEntry> {
    let mut entries = Vec::new();

    for z in 0..grid.size_z() {
        for x in 0..grid.size_x() {
            let neighbors = count_neighbors(grid, x, y, z);
            let alive = grid.get(x, y, z).is_some_and(|cell| cell.is_alive());
            if neighbors == 0 && !alive {
                continue;
            }
            entries.push(SnapshotEntry {
                coord: IVec3::new(x, y, z),
                neighbors,
                alive,
            });
        }
    }

    entries
}

#[cfg(not(feature = "parallel"))]
fn snapshot(grid: &Grid, top: i32) -> Vec<SnapshotEntry> {
    (0..=top).flat_map(|y| snapshot_layer(grid, y)).collect()
}

#[cfg(feature = "parallel")]
fn snapshot(grid: &Grid, top: i32) -> Vec<SnapshotEntry> {
    // Read-only pass; layers come back in order so the result matches the serial build.
    let layers: Vec<Vec<SnapshotEntry>> = (0..=top)
        .into_par_iter()
        .map(|y| snapshot_layer(grid, y))
        .collect();
    layers.into_iter().flatten().collect()
}

/// Step layers `0..=current_layer` forward by one generation.
///
/// Layers above `current_layer` are neither evaluated nor modified. A
/// `current_layer` past the top of the grid steps the whole grid; a negative
/// one steps nothing.
#[cfg_attr(
    feature = "trace",
    tracing::instrument(skip(grid), fields(size = ?grid.size()))
)]
pub fn step_automaton(grid: &mut Grid, rules: &Rules, current_layer: i32) -> ChangeSet {
    let top = current_layer.min(grid.top_layer());
    let mut changes = ChangeSet::default();
    if top < 0 {
        return changes;
    }

    let entries = snapshot(grid, top);

    for entry in entries {
        match rules.decide(entry.alive, entry.neighbors) {
            Decision::Die => {
                grid.write(entry.coord, CellState::Dead);
                changes.destroyed.push(entry.coord);
            }
            Decision::Spawn => {
                grid.write(entry.coord, CellState::Alive);
                changes.created.push(entry.coord);
            }
            Decision::Survive | Decision::StayDead => {}
        }
    }

    #[cfg(feature = "trace")]
    tracing::debug!(
        created = changes.created.len(),
        destroyed = changes.destroyed.len(),
        "step complete"
    );

    changes
}
