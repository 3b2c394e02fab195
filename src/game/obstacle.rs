use serde::{Deserialize, Serialize};

use crate::game::types::Direction;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ObstacleState {
    Blocking,
    Repaired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    Repaired,
    AlreadyRepaired,
}

/// The damaged maintenance droid. Guards one exit of the location it sits in
/// until repaired; repair is one-way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Obstacle {
    /// Exit direction this obstacle stands in front of.
    pub guards: Direction,
    state: ObstacleState,
}

impl Obstacle {
    pub fn new(guards: Direction) -> Self {
        Self {
            guards,
            state: ObstacleState::Blocking,
        }
    }

    pub fn state(&self) -> ObstacleState {
        self.state
    }

    pub fn is_blocking(&self) -> bool {
        self.state == ObstacleState::Blocking
    }

    pub fn repair(&mut self) -> RepairOutcome {
        match self.state {
            ObstacleState::Blocking => {
                self.state = ObstacleState::Repaired;
                RepairOutcome::Repaired
            }
            ObstacleState::Repaired => RepairOutcome::AlreadyRepaired,
        }
    }

    /// Text key for the examine description in the current state.
    pub fn examine_key(&self) -> &'static str {
        match self.state {
            ObstacleState::Blocking => "obstacle.droid.examine_blocking",
            ObstacleState::Repaired => "obstacle.droid.examine_repaired",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repair_is_one_way_and_idempotent() {
        let mut droid = Obstacle::new(Direction::East);
        assert!(droid.is_blocking());
        assert_eq!(droid.repair(), RepairOutcome::Repaired);
        assert!(!droid.is_blocking());
        assert_eq!(droid.repair(), RepairOutcome::AlreadyRepaired);
        assert_eq!(droid.state(), ObstacleState::Repaired);
    }
}
