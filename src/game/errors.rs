use thiserror::Error;

use crate::game::types::{Direction, Item};

/// Recoverable outcomes of a player command that did not succeed.
///
/// None of these end the session; the interpreter turns each one into a
/// player-facing message through [`GameError::text_key`] and
/// [`GameError::text_args`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Movement direction has no mapped destination.
    #[error("no exit to the {0}")]
    NoExit(Direction),

    /// Movement prevented by an active obstacle. The hazard counter has
    /// already been incremented when this is returned.
    #[error("{direction} exit is blocked (hazards now {hazard_count})")]
    Blocked {
        direction: Direction,
        hazard_count: u32,
    },

    /// Pickup attempted where the item is not present.
    #[error("no {0:?} at this location")]
    NothingHere(Item),

    /// Tool use attempted without its prerequisites.
    #[error("cannot use tool: {0}")]
    CannotUse(CannotUseReason),

    /// Unparseable or unrecognized input.
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    /// `win` issued while the win preconditions are unmet.
    #[error("cannot win yet: {0}")]
    CannotWinYet(WinBlocker),

    /// A command arrived after the session already ended.
    #[error("session is over")]
    SessionOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CannotUseReason {
    #[error("no tool in inventory")]
    NoTool,
    #[error("no obstacle at this location")]
    NoObstacle,
    #[error("obstacle already repaired")]
    AlreadyRepaired,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WinBlocker {
    /// Player is not standing in the terminal location (carries its name).
    #[error("not at {0}")]
    WrongLocation(String),
    #[error("energy crystal not carried")]
    MissingCrystal,
}

impl GameError {
    /// Key into the text catalog for the player-facing message.
    pub fn text_key(&self) -> &'static str {
        match self {
            GameError::NoExit(_) => "ui.no_exit",
            GameError::Blocked { .. } => "game.droid_blocking",
            GameError::NothingHere(Item::DiagnosticTool) => "game.no_tool_here",
            GameError::NothingHere(Item::EnergyCrystal) => "game.no_crystal_here",
            GameError::CannotUse(CannotUseReason::NoTool) => "game.no_tool",
            GameError::CannotUse(CannotUseReason::NoObstacle) => "game.no_droid_here",
            GameError::CannotUse(CannotUseReason::AlreadyRepaired) => {
                "game.droid_already_repaired"
            }
            GameError::UnknownCommand(_) => "ui.unknown_command",
            GameError::CannotWinYet(WinBlocker::WrongLocation(_)) => "game.cannot_win_location",
            GameError::CannotWinYet(WinBlocker::MissingCrystal) => "game.cannot_win_crystal",
            GameError::SessionOver => "ui.session_over",
        }
    }

    /// Placeholder values for the message template.
    pub fn text_args(&self) -> Vec<(&'static str, String)> {
        match self {
            GameError::NoExit(direction) => vec![("direction", direction.to_string())],
            GameError::Blocked {
                direction,
                hazard_count,
            } => vec![
                ("direction", direction.to_string()),
                ("hazards", hazard_count.to_string()),
            ],
            GameError::UnknownCommand(command) => vec![("command", command.clone())],
            GameError::CannotWinYet(WinBlocker::WrongLocation(terminal)) => {
                vec![("location", terminal.clone())]
            }
            _ => Vec::new(),
        }
    }
}

/// Errors raised while loading text resources.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid text resource json: {0}")]
    Json(#[from] serde_json::Error),

    /// A leaf in the resource tree was not a string.
    #[error("text resource {key} must be a string")]
    InvalidValue { key: String },
}
