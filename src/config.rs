//! Simulation construction parameters.

use crate::automaton::Rules;

/// Parameters used to (re)initialize a [`Simulation`](crate::Simulation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub size_x: i32,
    pub size_z: i32,
    /// Rules used by [`Simulation::advance`](crate::Simulation::advance).
    pub rules: Rules,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            size_x: 100,
            size_z: 100,
            rules: Rules::default(),
        }
    }
}

impl SimulationConfig {
    pub fn new(size_x: i32, size_z: i32) -> Self {
        SimulationConfig {
            size_x,
            size_z,
            ..Default::default()
        }
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
}
