//! Orbital Station Escape game engine.
//!
//! The [`World`] owns every [`Location`] in an arena; the [`Player`] refers to
//! its position by [`LocationId`]. [`GameSession`] interprets one input line at
//! a time and [`run_console`] drives a session over async I/O.

pub mod commands;
pub mod console;
pub mod errors;
pub mod location;
pub mod obstacle;
pub mod player;
pub mod rules;
pub mod text;
pub mod types;
pub mod world;

pub use commands::{
    parse_command, CommandReply, GameCommand, GameSession, SessionState, SessionStats,
    SessionSummary,
};
pub use console::{run_console, ConsoleOptions};
pub use errors::{CannotUseReason, GameError, TextError, WinBlocker};
pub use location::Location;
pub use obstacle::{Obstacle, ObstacleState, RepairOutcome};
pub use player::Player;
pub use rules::Rules;
pub use text::{render_template, TextCatalog, TextProvider, DEFAULT_TEXTS};
pub use types::{Direction, Item, LocationId, ParseDirectionError};
pub use world::{World, DOCKING_BAY, MAINTENANCE_TUNNELS};
