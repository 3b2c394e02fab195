use std::collections::BTreeMap;

use crate::game::obstacle::Obstacle;
use crate::game::text::TextProvider;
use crate::game::types::{Direction, Item, LocationId};

/// A node of the station map.
///
/// Every location carries the full set of fields; absent items and obstacles
/// are simply `false`/`None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub description: String,
    /// Shown instead of `description` once this location's obstacle has been
    /// repaired.
    pub cleared_description: Option<String>,
    pub exits: BTreeMap<Direction, LocationId>,
    pub has_tool: bool,
    pub has_crystal: bool,
    /// True only while `obstacle` is present and blocking.
    pub obstacle_present: bool,
    pub obstacle: Option<Obstacle>,
}

impl Location {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            cleared_description: None,
            exits: BTreeMap::new(),
            has_tool: false,
            has_crystal: false,
            obstacle_present: false,
            obstacle: None,
        }
    }

    pub fn with_tool(mut self) -> Self {
        self.has_tool = true;
        self
    }

    pub fn with_crystal(mut self) -> Self {
        self.has_crystal = true;
        self
    }

    pub fn with_obstacle(mut self, obstacle: Obstacle) -> Self {
        self.obstacle_present = obstacle.is_blocking();
        self.obstacle = Some(obstacle);
        self
    }

    pub fn with_cleared_description(mut self, description: &str) -> Self {
        self.cleared_description = Some(description.to_string());
        self
    }

    /// Register a one-way exit. Re-adding a direction overwrites the earlier
    /// target; the replaced target is returned.
    pub fn add_exit(&mut self, direction: Direction, target: LocationId) -> Option<LocationId> {
        self.exits.insert(direction, target)
    }

    pub fn exit(&self, direction: Direction) -> Option<LocationId> {
        self.exits.get(&direction).copied()
    }

    /// Clears the tool flag; reports whether a tool was actually here.
    pub fn remove_tool(&mut self) -> bool {
        std::mem::replace(&mut self.has_tool, false)
    }

    /// Clears the crystal flag; reports whether a crystal was actually here.
    pub fn remove_crystal(&mut self) -> bool {
        std::mem::replace(&mut self.has_crystal, false)
    }

    pub fn set_obstacle_present(&mut self, present: bool) {
        self.obstacle_present = present;
    }

    pub fn has_item(&self, item: Item) -> bool {
        match item {
            Item::DiagnosticTool => self.has_tool,
            Item::EnergyCrystal => self.has_crystal,
        }
    }

    /// The obstacle, if it is here and still blocking.
    pub fn blocking_obstacle(&self) -> Option<&Obstacle> {
        self.obstacle
            .as_ref()
            .filter(|o| self.obstacle_present && o.is_blocking())
    }

    /// Whether leaving through `direction` is currently prevented.
    pub fn blocks(&self, direction: Direction) -> bool {
        self.blocking_obstacle()
            .map_or(false, |o| o.guards == direction)
    }

    fn current_description(&self) -> &str {
        match (&self.obstacle, &self.cleared_description) {
            (Some(o), Some(cleared)) if !o.is_blocking() => cleared,
            _ => &self.description,
        }
    }

    /// Deterministic multi-line description: name, narrative, items,
    /// obstacle and exits (in compass order).
    pub fn describe(&self, texts: &dyn TextProvider) -> String {
        let mut out = String::new();
        out.push_str(&format!("=== {} ===\n", self.name.to_uppercase()));
        out.push_str(self.current_description());
        out.push('\n');

        // Tool wins if both flags are somehow set.
        let items = if self.has_tool {
            texts.resolve("items.diagnostic_tool.name", &[])
        } else if self.has_crystal {
            texts.resolve("items.energy_crystal.name", &[])
        } else {
            texts.resolve("location.no_items", &[])
        };
        out.push_str(&texts.resolve("location.items", &[("items", items.as_str())]));
        out.push('\n');

        let obstacle = match self.blocking_obstacle() {
            Some(o) => texts.resolve("obstacle.droid.present", &[("direction", o.guards.as_str())]),
            None => texts.resolve("location.no_obstacle", &[]),
        };
        out.push_str(&texts.resolve("location.obstacle", &[("obstacle", obstacle.as_str())]));
        out.push('\n');

        let exits = if self.exits.is_empty() {
            texts.resolve("location.no_exits", &[])
        } else {
            self.exits
                .keys()
                .map(|d| d.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push_str(&texts.resolve("location.exits", &[("exits", exits.as_str())]));
        out
    }
}
