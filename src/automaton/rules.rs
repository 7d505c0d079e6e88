//! Birth and death thresholds.

/// Outcome of applying the rules to a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Die,
    Survive,
    Spawn,
    StayDead,
}

/// The four thresholds of a survival/birth rule.
///
/// All bounds are inclusive. Nothing constrains the values against each other:
/// `respawn_lower > respawn_upper` is an empty birth range, so no cell spawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rules {
    /// An alive cell with fewer neighbors than this dies.
    pub underpopulation: u8,
    /// An alive cell with more neighbors than this dies.
    pub overpopulation: u8,
    pub respawn_lower: u8,
    pub respawn_upper: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            underpopulation: 2,
            overpopulation: 3,
            respawn_lower: 3,
            respawn_upper: 3,
        }
    }
}

impl Rules {
    pub fn new(
        underpopulation: u8,
        overpopulation: u8,
        respawn_lower: u8,
        respawn_upper: u8,
    ) -> Self {
        Rules {
            underpopulation,
            overpopulation,
            respawn_lower,
            respawn_upper,
        }
    }

    /// Decide the fate of a cell given its state and live-neighbor count.
    pub fn decide(&self, alive: bool, neighbors: u8) -> Decision {
        if alive {
            if neighbors < self.underpopulation || neighbors > self.overpopulation {
                Decision::Die
            } else {
                Decision::Survive
            }
        } else if (self.respawn_lower..=self.respawn_upper).contains(&neighbors) {
            Decision::Spawn
        } else {
            Decision::StayDead
        }
    }
}
