//! Player state and the validated transitions the interpreter drives.
//!
//! Every operation validates first and mutates only once all checks pass.
//! The one deliberate side effect on a failure path is the hazard increment
//! of a blocked move.

use serde::{Deserialize, Serialize};

use crate::game::errors::{CannotUseReason, GameError, WinBlocker};
use crate::game::obstacle::RepairOutcome;
use crate::game::rules::Rules;
use crate::game::text::TextProvider;
use crate::game::types::{Direction, Item, LocationId};
use crate::game::world::World;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Index into the world; the world owns the location.
    pub current_location: LocationId,
    pub has_tool: bool,
    pub has_crystal: bool,
    pub score: u32,
    pub hazard_count: u32,
}

impl Player {
    pub fn new(start: LocationId) -> Self {
        Self {
            current_location: start,
            has_tool: false,
            has_crystal: false,
            score: 0,
            hazard_count: 0,
        }
    }

    /// Attempt to leave through `direction`; returns the new location.
    pub fn move_to(&mut self, world: &World, direction: Direction) -> Result<LocationId, GameError> {
        let here = world
            .location(self.current_location)
            .ok_or(GameError::NoExit(direction))?;
        let destination = here
            .exit(direction)
            .filter(|&id| world.contains(id))
            .ok_or(GameError::NoExit(direction))?;
        if here.blocks(direction) {
            self.hazard_count = self.hazard_count.saturating_add(1);
            return Err(GameError::Blocked {
                direction,
                hazard_count: self.hazard_count,
            });
        }
        self.current_location = destination;
        Ok(destination)
    }

    /// Returns the points granted.
    pub fn pick_up_tool(&mut self, world: &mut World, rules: &Rules) -> Result<u32, GameError> {
        let removed = world
            .location_mut(self.current_location)
            .map_or(false, |here| here.remove_tool());
        if !removed {
            return Err(GameError::NothingHere(Item::DiagnosticTool));
        }
        self.has_tool = true;
        self.grant(rules.tool_points);
        Ok(rules.tool_points)
    }

    /// Returns the points granted.
    pub fn pick_up_crystal(&mut self, world: &mut World, rules: &Rules) -> Result<u32, GameError> {
        let removed = world
            .location_mut(self.current_location)
            .map_or(false, |here| here.remove_crystal());
        if !removed {
            return Err(GameError::NothingHere(Item::EnergyCrystal));
        }
        self.has_crystal = true;
        self.grant(rules.crystal_points);
        Ok(rules.crystal_points)
    }

    /// Repair the obstacle in the current location. Returns the points
    /// granted; a second attempt fails with `AlreadyRepaired`.
    pub fn use_tool_on_obstacle(
        &mut self,
        world: &mut World,
        rules: &Rules,
    ) -> Result<u32, GameError> {
        if !self.has_tool {
            return Err(GameError::CannotUse(CannotUseReason::NoTool));
        }
        let location = world
            .location_mut(self.current_location)
            .ok_or(GameError::CannotUse(CannotUseReason::NoObstacle))?;
        let obstacle = location
            .obstacle
            .as_mut()
            .ok_or(GameError::CannotUse(CannotUseReason::NoObstacle))?;
        match obstacle.repair() {
            RepairOutcome::AlreadyRepaired => {
                Err(GameError::CannotUse(CannotUseReason::AlreadyRepaired))
            }
            RepairOutcome::Repaired => {
                location.set_obstacle_present(false);
                self.grant(rules.repair_points);
                Ok(rules.repair_points)
            }
        }
    }

    /// Check the win predicates: standing in the terminal location while
    /// carrying the crystal. On success the completion bonus is added and
    /// returned.
    pub fn claim_victory(&mut self, world: &World, rules: &Rules) -> Result<u32, GameError> {
        if self.current_location != world.terminal() {
            let terminal = world
                .location(world.terminal())
                .map(|l| l.name.clone())
                .unwrap_or_default();
            return Err(GameError::CannotWinYet(WinBlocker::WrongLocation(terminal)));
        }
        if !self.has_crystal {
            return Err(GameError::CannotWinYet(WinBlocker::MissingCrystal));
        }
        self.grant(rules.win_bonus);
        Ok(rules.win_bonus)
    }

    /// Scores pin at `u32::MAX` rather than wrap.
    fn grant(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Carried items in a fixed order.
    pub fn inventory(&self) -> Vec<Item> {
        let mut items = Vec::with_capacity(2);
        if self.has_tool {
            items.push(Item::DiagnosticTool);
        }
        if self.has_crystal {
            items.push(Item::EnergyCrystal);
        }
        items
    }

    pub fn carries(&self, item: Item) -> bool {
        match item {
            Item::DiagnosticTool => self.has_tool,
            Item::EnergyCrystal => self.has_crystal,
        }
    }

    /// `(SCORE: n | HAZARDS: m)`, derived purely from the two counters.
    pub fn status(&self, texts: &dyn TextProvider) -> String {
        texts.resolve(
            "ui.status",
            &[
                ("score", self.score.to_string().as_str()),
                ("hazards", self.hazard_count.to_string().as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::location::Location;
    use crate::game::text::TextCatalog;
    use crate::game::world::{DOCKING_BAY, MAINTENANCE_TUNNELS};

    fn station() -> (World, Player, Rules) {
        let world = World::orbital_station(&TextCatalog::new());
        let player = Player::new(world.start());
        (world, player, Rules::default())
    }

    #[test]
    fn missing_exit_changes_nothing() {
        let (world, mut player, _) = station();
        for dir in [Direction::North, Direction::South, Direction::West] {
            assert_eq!(player.move_to(&world, dir), Err(GameError::NoExit(dir)));
        }
        assert_eq!(player.current_location, MAINTENANCE_TUNNELS);
        assert_eq!(player.hazard_count, 0);
    }

    #[test]
    fn blocked_move_counts_hazards_every_time() {
        let (world, mut player, _) = station();
        for expected in 1..=3 {
            let err = player.move_to(&world, Direction::East).unwrap_err();
            assert_eq!(
                err,
                GameError::Blocked {
                    direction: Direction::East,
                    hazard_count: expected
                }
            );
        }
        assert_eq!(player.current_location, MAINTENANCE_TUNNELS);
        assert_eq!(player.hazard_count, 3);
    }

    #[test]
    fn tool_use_reasons_are_distinguished() {
        let (mut world, mut player, rules) = station();
        assert_eq!(
            player.use_tool_on_obstacle(&mut world, &rules),
            Err(GameError::CannotUse(CannotUseReason::NoTool))
        );
        player.pick_up_tool(&mut world, &rules).unwrap();
        assert_eq!(player.use_tool_on_obstacle(&mut world, &rules), Ok(20));
        assert_eq!(
            player.use_tool_on_obstacle(&mut world, &rules),
            Err(GameError::CannotUse(CannotUseReason::AlreadyRepaired))
        );
        assert_eq!(player.score, 30);

        player.move_to(&world, Direction::East).unwrap();
        assert_eq!(
            player.use_tool_on_obstacle(&mut world, &rules),
            Err(GameError::CannotUse(CannotUseReason::NoObstacle))
        );
    }

    #[test]
    fn pickups_never_double_grant() {
        let (mut world, mut player, rules) = station();
        assert_eq!(player.pick_up_tool(&mut world, &rules), Ok(10));
        assert_eq!(
            player.pick_up_tool(&mut world, &rules),
            Err(GameError::NothingHere(Item::DiagnosticTool))
        );
        assert_eq!(
            player.pick_up_crystal(&mut world, &rules),
            Err(GameError::NothingHere(Item::EnergyCrystal))
        );
        assert_eq!(player.score, 10);
        assert!(!world.location(MAINTENANCE_TUNNELS).unwrap().has_tool);
    }

    #[test]
    fn victory_requires_location_and_crystal() {
        let (mut world, mut player, rules) = station();
        assert!(matches!(
            player.claim_victory(&world, &rules),
            Err(GameError::CannotWinYet(WinBlocker::WrongLocation(ref name))) if name == "Docking Bay"
        ));

        player.current_location = DOCKING_BAY;
        assert_eq!(
            player.claim_victory(&world, &rules),
            Err(GameError::CannotWinYet(WinBlocker::MissingCrystal))
        );

        player.pick_up_crystal(&mut world, &rules).unwrap();
        assert_eq!(player.claim_victory(&world, &rules), Ok(30));
        assert_eq!(player.score, 80);
    }

    #[test]
    fn oversized_point_values_saturate() {
        let (mut world, mut player, _) = station();
        let rules = Rules {
            tool_points: u32::MAX,
            ..Rules::default()
        };
        assert_eq!(player.pick_up_tool(&mut world, &rules), Ok(u32::MAX));
        assert_eq!(player.use_tool_on_obstacle(&mut world, &rules), Ok(20));
        assert_eq!(player.score, u32::MAX);
    }

    #[test]
    fn dangling_exit_is_no_exit() {
        let mut world = World::new();
        let a = world.add_location(Location::new("A", "a"));
        world.location_mut(a).unwrap().add_exit(Direction::North, 7);
        let mut player = Player::new(a);
        assert_eq!(
            player.move_to(&world, Direction::North),
            Err(GameError::NoExit(Direction::North))
        );
        assert_eq!(player.current_location, a);

        let mut stray = Player::new(4);
        assert_eq!(
            stray.move_to(&world, Direction::North),
            Err(GameError::NoExit(Direction::North))
        );
        assert_eq!(
            stray.pick_up_tool(&mut world, &Rules::default()),
            Err(GameError::NothingHere(Item::DiagnosticTool))
        );
    }

    #[test]
    fn status_reflects_counters() {
        let mut player = Player::new(0);
        player.score = 42;
        player.hazard_count = 2;
        assert_eq!(player.status(&TextCatalog::new()), "(SCORE: 42 | HAZARDS: 2)");
    }
}
