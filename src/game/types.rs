use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index of a location inside the [`World`](crate::game::World) arena.
pub type LocationId = usize;

/// Compass directions understood by the station map.
///
/// Variant order is the display order used when listing exits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a word is not one of the four compass directions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a direction: {0}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Case-insensitive; accepts full names and single-letter abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// The two collectable items. Items carry no state of their own; possession
/// lives in boolean flags on the player and the locations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    DiagnosticTool,
    EnergyCrystal,
}

impl Item {
    /// Text catalog prefix, e.g. `items.diagnostic_tool`.
    pub fn text_key(&self) -> &'static str {
        match self {
            Item::DiagnosticTool => "items.diagnostic_tool",
            Item::EnergyCrystal => "items.energy_crystal",
        }
    }

    /// Match a player-supplied noun ("tool", "diagnostic tool", "crystal", ...).
    pub fn from_noun(noun: &str) -> Option<Item> {
        let noun = noun.trim().to_ascii_lowercase();
        match noun.as_str() {
            "tool" | "diagnostic tool" | "diagnostic" => Some(Item::DiagnosticTool),
            "crystal" | "energy crystal" | "energy" => Some(Item::EnergyCrystal),
            _ => None,
        }
    }
}
