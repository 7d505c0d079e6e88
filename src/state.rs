//! Simulation session: the grid plus the state the caller steers it with.

use glam::Vec3;

use crate::automaton::{self, CellState, ChangeSet, Grid, Rules};
use crate::config::SimulationConfig;
use crate::error::{GridError, Result};

/// A running 3D life simulation.
///
/// Owns a single [`Grid`]. All mutation goes through `&mut self`, so callers
/// sharing a session across threads must serialize access themselves.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    current_layer: i32,
    generation: u64,
    rules: Rules,
    last_changes: ChangeSet,
}

impl Simulation {
    /// Create a session with a single dead layer and default rules.
    pub fn new(size_x: i32, size_z: i32) -> Result<Self> {
        Self::with_config(&SimulationConfig::new(size_x, size_z))
    }

    pub fn with_config(config: &SimulationConfig) -> Result<Self> {
        Ok(Simulation {
            grid: Grid::new(config.size_x, config.size_z)?,
            current_layer: 0,
            generation: 0,
            rules: config.rules,
            last_changes: ChangeSet::default(),
        })
    }

    /// Replace the grid with an empty single-layer one and reset the active layer.
    ///
    /// On error the current grid is kept.
    #[cfg_attr(feature = "trace", tracing::instrument(skip(self)))]
    pub fn initialize(&mut self, size_x: i32, size_z: i32) -> Result<()> {
        self.grid = Grid::new(size_x, size_z)?;
        self.current_layer = 0;
        self.generation = 0;
        self.last_changes = ChangeSet::default();
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current_layer(&self) -> i32 {
        self.current_layer
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: Rules) {
        self.rules = rules;
    }

    /// Changes reported by the most recent step.
    pub fn last_changes(&self) -> &ChangeSet {
        &self.last_changes
    }

    /// Grow the grid by one dead layer.
    pub fn add_layer(&mut self) {
        self.grid.add_layer();
    }

    pub fn get_cell(&self, x: i32, y: i32, z: i32) -> Option<CellState> {
        self.grid.get(x, y, z)
    }

    pub fn set_cell(&mut self, x: i32, y: i32, z: i32, alive: bool) -> Result<()> {
        self.grid.set(x, y, z, alive)
    }

    /// Highest layer that can be selected for stepping.
    pub fn max_layer(&self) -> i32 {
        (self.grid.size_y() - 2).max(0)
    }

    /// Select the active layer, clamped to `[0, max_layer]`. Returns the selection.
    pub fn select_layer(&mut self, layer: i32) -> i32 {
        self.current_layer = layer.clamp(0, self.max_layer());
        self.current_layer
    }

    pub fn raise_layer(&mut self) -> i32 {
        self.select_layer(self.current_layer.saturating_add(1))
    }

    pub fn lower_layer(&mut self) -> i32 {
        self.select_layer(self.current_layer.saturating_sub(1))
    }

    /// Flip the cell at `(x, current_layer, z)` and return its new state.
    pub fn toggle_cell(&mut self, x: i32, z: i32) -> Result<CellState> {
        let y = self.current_layer;
        let cell = self
            .grid
            .get(x, y, z)
            .ok_or(GridError::OutOfBounds { x, y, z })?;
        let alive = !cell.is_alive();
        self.grid.set(x, y, z, alive)?;
        Ok(CellState::from(alive))
    }

    /// Flip the cell under a picked world-space point on the active layer.
    ///
    /// The vertical component of `point` is ignored.
    pub fn toggle_at_world(&mut self, point: Vec3) -> Result<CellState> {
        let coord = automaton::to_array(&self.grid, point);
        self.toggle_cell(coord.x, coord.z)
    }

    /// Advance layers `0..=current_layer` by one generation.
    pub fn step(&mut self, rules: &Rules, current_layer: i32) -> ChangeSet {
        let changes = automaton::step_automaton(&mut self.grid, rules, current_layer);
        self.generation += 1;
        self.last_changes = changes.clone();
        changes
    }

    /// Step with the session's rules and active layer.
    pub fn advance(&mut self) -> ChangeSet {
        let rules = self.rules;
        self.step(&rules, self.current_layer)
    }
}
