//! Command parsing and the session interpreter.
//!
//! [`parse_command`] turns one raw input line into a [`GameCommand`];
//! [`GameSession::process`] dispatches it against the player and world and
//! always answers with a [`CommandReply`]. Nothing a player types can abort a
//! session: failures come back as a reply carrying a [`GameError`].

use log::{debug, info};
use std::fmt;

use crate::game::errors::GameError;
use crate::game::player::Player;
use crate::game::rules::Rules;
use crate::game::text::TextProvider;
use crate::game::types::{Direction, Item};
use crate::game::world::World;
use crate::logutil::escape_log;

/// Parsed form of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Move(Direction),         // NORTH, N, GO NORTH, MOVE NORTH
    PickUp(Item),            // PICK UP TOOL, PICKUP CRYSTAL, TAKE TOOL, GET CRYSTAL
    UseTool,                 // USE TOOL, USE TOOL ON DROID, FIX DROID
    Examine(Option<String>), // EXAMINE DROID, X TOOL, LOOK CRYSTAL
    Status,                  // STATUS, SCORE
    Inventory,               // INVENTORY, INV, I
    Look,                    // LOOK, L
    Help,                    // HELP, H, ?
    Win,
    Quit,                    // QUIT, EXIT, Q
    Unknown(String),
}

/// Parse raw input. Matching is case-insensitive and ignores surrounding
/// and repeated whitespace.
pub fn parse_command(input: &str) -> GameCommand {
    let normalized = input.trim().to_lowercase();
    let words: Vec<&str> = normalized.split_whitespace().collect();

    if let [word] = words.as_slice() {
        if let Ok(direction) = word.parse::<Direction>() {
            return GameCommand::Move(direction);
        }
    }

    match words.as_slice() {
        [] => GameCommand::Unknown(String::new()),

        ["go" | "move", dir] => match dir.parse() {
            Ok(d) => GameCommand::Move(d),
            Err(_) => GameCommand::Unknown(normalized.clone()),
        },

        ["pick", "up", rest @ ..] | ["pickup" | "take" | "get", rest @ ..] if !rest.is_empty() => {
            match Item::from_noun(&rest.join(" ")) {
                Some(item) => GameCommand::PickUp(item),
                None => GameCommand::Unknown(normalized.clone()),
            }
        }

        ["use", "tool"]
        | ["use", "diagnostic", "tool"]
        | ["use", "tool", "on", "droid"]
        | ["fix", "droid"] => GameCommand::UseTool,

        ["look" | "l"] => GameCommand::Look,
        ["examine" | "x"] => GameCommand::Examine(None),
        ["examine" | "x" | "look" | "l", rest @ ..] => GameCommand::Examine(Some(rest.join(" "))),

        ["status" | "score"] => GameCommand::Status,
        ["inventory" | "inv" | "i"] => GameCommand::Inventory,
        ["help" | "h" | "?"] => GameCommand::Help,
        ["win"] => GameCommand::Win,
        ["quit" | "exit" | "q"] => GameCommand::Quit,

        _ => GameCommand::Unknown(normalized.clone()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    Won,
    Lost,
    Quit,
}

impl SessionState {
    pub fn is_over(&self) -> bool {
        !matches!(self, SessionState::Playing)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionState::Playing => "playing",
            SessionState::Won => "won",
            SessionState::Lost => "lost",
            SessionState::Quit => "quit",
        })
    }
}

/// Result of one processed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub message: String,
    pub error: Option<GameError>,
}

impl CommandReply {
    fn ok(message: String) -> Self {
        Self {
            message,
            error: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub commands: u32,
    pub unknown_commands: u32,
    pub blocked_moves: u32,
}

/// Final accounting of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub state: SessionState,
    pub score: u32,
    pub hazards: u32,
    pub stats: SessionStats,
}

/// One run of the game: the world, the player and the collaborators the
/// interpreter needs.
pub struct GameSession {
    world: World,
    player: Player,
    rules: Rules,
    texts: Box<dyn TextProvider>,
    echo_status: bool,
    state: SessionState,
    stats: SessionStats,
}

impl GameSession {
    pub fn new(world: World, rules: Rules, texts: Box<dyn TextProvider>) -> Self {
        let player = Player::new(world.start());
        info!(
            target: "station_escape::session",
            "session.start locations={} hazard_limit={:?}",
            world.len(),
            rules.hazard_limit
        );
        Self {
            world,
            player,
            rules,
            texts,
            echo_status: true,
            state: SessionState::Playing,
            stats: SessionStats::default(),
        }
    }

    /// Session on the canonical station map.
    pub fn orbital_station(rules: Rules, texts: Box<dyn TextProvider>) -> Self {
        let world = World::orbital_station(texts.as_ref());
        Self::new(world, rules, texts)
    }

    /// Append the status line to replies that change score or hazards.
    pub fn with_echo_status(mut self, echo: bool) -> Self {
        self.echo_status = echo;
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn texts(&self) -> &dyn TextProvider {
        self.texts.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            state: self.state,
            score: self.player.score,
            hazards: self.player.hazard_count,
            stats: self.stats,
        }
    }

    /// Description of the player's current location.
    pub fn look(&self) -> String {
        match self.world.location(self.player.current_location) {
            Some(here) => here.describe(self.texts.as_ref()),
            None => self.texts.resolve("ui.nowhere", &[]),
        }
    }

    /// Opening screen: banner followed by the first look.
    pub fn welcome(&self) -> String {
        format!("{}\n\n{}", self.texts.resolve("ui.banner", &[]), self.look())
    }

    /// Interpret one input line.
    pub fn process(&mut self, input: &str) -> CommandReply {
        self.stats.commands = self.stats.commands.saturating_add(1);
        if self.is_over() {
            return self.failure(GameError::SessionOver);
        }

        let command = parse_command(input);
        debug!("command parsed: input={} command={:?}", escape_log(input), command);

        let result = match command {
            GameCommand::Move(direction) => self.handle_move(direction),
            GameCommand::PickUp(item) => self.handle_pick_up(item),
            GameCommand::UseTool => self.handle_use_tool(),
            GameCommand::Examine(target) => Ok(self.handle_examine(target.as_deref())),
            GameCommand::Status => Ok(self.player.status(self.texts.as_ref())),
            GameCommand::Inventory => Ok(self.handle_inventory()),
            GameCommand::Look => Ok(self.look()),
            GameCommand::Help => Ok(self.texts.resolve("ui.help", &[])),
            GameCommand::Win => self.handle_win(),
            GameCommand::Quit => {
                self.state = SessionState::Quit;
                Ok(self.texts.resolve("ui.goodbye", &[]))
            }
            GameCommand::Unknown(raw) => Err(GameError::UnknownCommand(raw)),
        };

        match result {
            Ok(message) => CommandReply::ok(message),
            Err(err) => self.failure(err),
        }
    }

    fn handle_move(&mut self, direction: Direction) -> Result<String, GameError> {
        self.player.move_to(&self.world, direction)?;
        let moved = self
            .texts
            .resolve("ui.moved", &[("direction", direction.as_str())]);
        Ok(format!("{}\n\n{}", moved, self.look()))
    }

    fn handle_pick_up(&mut self, item: Item) -> Result<String, GameError> {
        let (points, key) = match item {
            Item::DiagnosticTool => (
                self.player.pick_up_tool(&mut self.world, &self.rules)?,
                "game.tool_taken",
            ),
            Item::EnergyCrystal => (
                self.player.pick_up_crystal(&mut self.world, &self.rules)?,
                "game.crystal_taken",
            ),
        };
        let message = self
            .texts
            .resolve(key, &[("points", points.to_string().as_str())]);
        Ok(self.with_status(message))
    }

    fn handle_use_tool(&mut self) -> Result<String, GameError> {
        let points = self
            .player
            .use_tool_on_obstacle(&mut self.world, &self.rules)?;
        let message = self
            .texts
            .resolve("game.droid_repaired", &[("points", points.to_string().as_str())]);
        Ok(self.with_status(message))
    }

    fn handle_examine(&self, target: Option<&str>) -> String {
        let target = match target {
            Some(t) if !t.trim().is_empty() => t.trim(),
            _ => return self.texts.resolve("ui.examine_what", &[]),
        };
        let here = self.world.location(self.player.current_location);

        if let Some(item) = Item::from_noun(target) {
            if self.player.carries(item) || here.map_or(false, |l| l.has_item(item)) {
                return self
                    .texts
                    .resolve(&format!("{}.examine", item.text_key()), &[]);
            }
        } else if matches!(target, "droid" | "robot" | "maintenance droid") {
            if let Some(obstacle) = here.and_then(|l| l.obstacle.as_ref()) {
                return self.texts.resolve(obstacle.examine_key(), &[]);
            }
        }
        self.texts.resolve("ui.not_seen", &[("target", target)])
    }

    fn handle_inventory(&self) -> String {
        let items = self.player.inventory();
        if items.is_empty() {
            return self.texts.resolve("ui.inventory_empty", &[]);
        }
        let mut out = self.texts.resolve("ui.inventory_header", &[]);
        for item in items {
            let name = self
                .texts
                .resolve(&format!("{}.name", item.text_key()), &[]);
            let description = self
                .texts
                .resolve(&format!("{}.description", item.text_key()), &[]);
            out.push('\n');
            out.push_str(&self.texts.resolve(
                "ui.inventory_line",
                &[("name", name.as_str()), ("description", description.as_str())],
            ));
        }
        out
    }

    fn handle_win(&mut self) -> Result<String, GameError> {
        let bonus = self.player.claim_victory(&self.world, &self.rules)?;
        self.state = SessionState::Won;
        info!(
            target: "station_escape::session",
            "session.won score={} hazards={}",
            self.player.score,
            self.player.hazard_count
        );
        Ok(self.final_report("game.win", Some(bonus)))
    }

    fn failure(&mut self, err: GameError) -> CommandReply {
        let args = err.text_args();
        let borrowed: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let mut message = self.texts.resolve(err.text_key(), &borrowed);

        match &err {
            GameError::UnknownCommand(_) => {
                self.stats.unknown_commands = self.stats.unknown_commands.saturating_add(1);
            }
            GameError::Blocked { .. } => {
                self.stats.blocked_moves = self.stats.blocked_moves.saturating_add(1);
                message = self.with_status(message);
                if self.rules.hazards_exhausted(self.player.hazard_count) {
                    self.state = SessionState::Lost;
                    info!(
                        target: "station_escape::session",
                        "session.lost hazards={} limit={:?}",
                        self.player.hazard_count,
                        self.rules.hazard_limit
                    );
                    message.push('\n');
                    message.push_str(&self.final_report("game.lost", None));
                }
            }
            _ => {}
        }

        CommandReply {
            message,
            error: Some(err),
        }
    }

    fn with_status(&self, message: String) -> String {
        if self.echo_status {
            format!("{}\n{}", message, self.player.status(self.texts.as_ref()))
        } else {
            message
        }
    }

    fn final_report(&self, key: &str, bonus: Option<u32>) -> String {
        self.texts.resolve(
            key,
            &[
                ("points", bonus.unwrap_or(0).to_string().as_str()),
                ("score", self.player.score.to_string().as_str()),
                ("hazards", self.player.hazard_count.to_string().as_str()),
            ],
        )
    }
}
