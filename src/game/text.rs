//! Player-facing copy.
//!
//! All text the game prints is looked up by a dotted key path
//! (`ui.no_exit`, `game.droid_repaired`, ...) through the [`TextProvider`]
//! trait, so the game logic never hardcodes wording. [`TextCatalog`] ships the
//! built-in English copy and can be overlaid with a JSON file whose objects
//! are flattened into dotted keys, e.g.
//!
//! ```json
//! { "ui": { "no_exit": "No way through there." } }
//! ```
//!
//! Templates use `{name}` placeholders which are filled from the arguments
//! passed to [`TextProvider::resolve`].

use log::warn;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::game::errors::TextError;

/// Source of user-facing strings.
pub trait TextProvider {
    /// Raw template for `key`, if known.
    fn template(&self, key: &str) -> Option<&str>;

    /// Resolve `key` and substitute `{placeholder}` arguments. Unknown keys
    /// resolve to the key itself so a missing string never breaks a turn.
    fn resolve(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.template(key) {
            Some(template) => render_template(template, args),
            None => {
                warn!("missing text key {}", key);
                key.to_string()
            }
        }
    }
}

/// Fill `{name}` placeholders. Placeholders without a matching argument are
/// left untouched.
pub fn render_template(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

const BANNER: &str = "\
╔══════════════════════════════════════════════════╗
              ORBITAL STATION ESCAPE
╚══════════════════════════════════════════════════╝
You're a technician on a space station experiencing
multiple system failures. Navigate the station,
collect items, and escape before it's too late!

Type 'help' for a list of commands.";

const HELP: &str = "\
Available Commands:
  north/south/east/west - Move in a direction (also: go <dir>, n/s/e/w)
  pick up tool          - Pick up the diagnostic tool
  use tool / fix droid  - Use the diagnostic tool on the droid
  pick up crystal       - Pick up the energy crystal
  examine <thing>       - Take a closer look at an item or the droid
  status/score          - Show your current score and hazard count
  inventory/i           - Show items in your inventory
  look                  - Look around the current location
  win                   - Power the escape pod once you have the crystal
  help                  - Show this help message
  quit/exit             - Quit the game";

/// Built-in English copy.
pub const DEFAULT_TEXTS: &[(&str, &str)] = &[
    ("ui.banner", BANNER),
    ("ui.help", HELP),
    ("ui.nowhere", "There is nothing here. You are adrift."),
    ("ui.status", "(SCORE: {score} | HAZARDS: {hazards})"),
    ("ui.moved", "You head {direction}."),
    ("ui.no_exit", "You can't go that way."),
    ("ui.inventory_empty", "You are not carrying anything."),
    ("ui.inventory_header", "You are carrying:"),
    ("ui.inventory_line", "- {name}: {description}"),
    (
        "ui.unknown_command",
        "I don't understand that command. Type 'help' for a list of commands.",
    ),
    ("ui.examine_what", "Examine what? Try 'examine tool' or 'examine droid'."),
    ("ui.not_seen", "You don't see any {target} here."),
    ("ui.goodbye", "Thanks for playing!"),
    ("ui.session_over", "The mission is over. Thanks for playing!"),
    (
        "game.droid_blocking",
        "The droid blocks your path! It needs to be repaired first.",
    ),
    ("game.tool_taken", "You grab the diagnostic tool. [+{points}]"),
    ("game.no_tool_here", "There's no tool here to pick up."),
    ("game.crystal_taken", "You grab the energy crystal. [+{points}]"),
    ("game.no_crystal_here", "There's no crystal here to pick up."),
    ("game.no_tool", "You don't have a tool to use."),
    ("game.no_droid_here", "There's nothing to use the tool on here."),
    (
        "game.droid_already_repaired",
        "The droid is already functioning properly.",
    ),
    (
        "game.droid_repaired",
        "DROID REBOOT: The droid beeps and moves aside. [+{points}]",
    ),
    (
        "game.cannot_win_location",
        "You can't win yet! The escape pod is in the {location}.",
    ),
    (
        "game.cannot_win_crystal",
        "You can't win yet! The escape pod needs the energy crystal.",
    ),
    (
        "game.win",
        "You slot the energy crystal into the escape pod and launch clear of the station. [+{points}]\nMission complete! Final Score: {score} | Hazards: {hazards}",
    ),
    (
        "game.lost",
        "The droid's sparks overload your suit systems. Mission failed.\nFinal Score: {score} | Hazards: {hazards}",
    ),
    ("location.items", "<< ITEMS: {items}"),
    ("location.no_items", "~No items available~"),
    ("location.obstacle", "<< OBSTACLE: {obstacle}"),
    ("location.no_obstacle", "~No obstacles~"),
    ("location.exits", "<< EXITS: {exits}"),
    ("location.no_exits", "none"),
    ("locations.maintenance_tunnels.name", "Maintenance Tunnels"),
    (
        "locations.maintenance_tunnels.description",
        "Flickering lights reveal a sparking droid blocking the east tunnel.",
    ),
    (
        "locations.maintenance_tunnels.description_clear",
        "Flickering lights play over a powered-down droid. The east tunnel is clear.",
    ),
    ("locations.docking_bay.name", "Docking Bay"),
    (
        "locations.docking_bay.description",
        "Debris floats with no gravity, near a shattered window. An escape pod waits, dark and unpowered.",
    ),
    ("items.diagnostic_tool.name", "Diagnostic Tool"),
    (
        "items.diagnostic_tool.description",
        "A handheld device with various probes and readouts.",
    ),
    (
        "items.diagnostic_tool.examine",
        "This diagnostic tool seems designed to interface with maintenance droids. It has several probes and a small display showing system diagnostics.",
    ),
    ("items.energy_crystal.name", "Energy Crystal"),
    (
        "items.energy_crystal.description",
        "A glowing crystal pulsing with unstable energy.",
    ),
    (
        "items.energy_crystal.examine",
        "The crystal pulses with an unstable, vibrant energy. It feels warm to the touch and occasionally emits small sparks.",
    ),
    (
        "obstacle.droid.present",
        "A damaged maintenance droid is blocking the path {direction}.",
    ),
    (
        "obstacle.droid.examine_blocking",
        "The droid is sparking and beeping erratically. It shoves you back when you try to pass.",
    ),
    (
        "obstacle.droid.examine_repaired",
        "The droid is powered down and no longer blocking the path.",
    ),
];

/// Key/template table backing [`TextProvider`].
#[derive(Debug, Clone)]
pub struct TextCatalog {
    entries: HashMap<String, String>,
}

impl Default for TextCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCatalog {
    /// Catalog holding the built-in copy.
    pub fn new() -> Self {
        let entries = DEFAULT_TEXTS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }

    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Parse a JSON resource table (nested objects or flat dotted keys).
    pub fn from_json_str(json: &str) -> Result<Self, TextError> {
        let value: Value = serde_json::from_str(json)?;
        let mut entries = HashMap::new();
        match value {
            Value::Object(_) => flatten_into("", &value, &mut entries)?,
            _ => {
                return Err(TextError::InvalidValue {
                    key: "<root>".to_string(),
                })
            }
        }
        Ok(Self { entries })
    }

    /// Overlay the catalog with the strings in a JSON file. Returns how many
    /// keys the file supplied.
    pub fn load_overrides<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, TextError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let overrides = Self::from_json_str(&contents)?;
        let count = overrides.len();
        self.merge(overrides);
        Ok(count)
    }

    pub fn merge(&mut self, other: TextCatalog) {
        self.entries.extend(other.entries);
    }

    pub fn insert(&mut self, key: &str, template: &str) {
        self.entries.insert(key.to_string(), template.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flat, key-sorted JSON dump; loadable again with [`Self::load_overrides`].
    pub fn to_json_pretty(&self) -> Result<String, TextError> {
        let sorted: BTreeMap<&String, &String> = self.entries.iter().collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }
}

impl TextProvider for TextCatalog {
    fn template(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

fn flatten_into(
    prefix: &str,
    value: &Value,
    out: &mut HashMap<String, String>,
) -> Result<(), TextError> {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten_into(&key, v, out)?;
            }
            Ok(())
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
            Ok(())
        }
        _ => Err(TextError::InvalidValue {
            key: prefix.to_string(),
        }),
    }
}
