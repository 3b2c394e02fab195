//! The station map: an arena of [`Location`]s addressed by [`LocationId`].
//!
//! The world owns every location (and, through them, the obstacle). Exits
//! and the player refer to locations by index only.

use log::warn;

use crate::game::location::Location;
use crate::game::obstacle::Obstacle;
use crate::game::text::TextProvider;
use crate::game::types::{Direction, LocationId};

/// Starting location of the canonical station.
pub const MAINTENANCE_TUNNELS: LocationId = 0;
/// Terminal location of the canonical station (where `win` is evaluated).
pub const DOCKING_BAY: LocationId = 1;

#[derive(Debug, Clone)]
pub struct World {
    locations: Vec<Location>,
    start: LocationId,
    terminal: LocationId,
}

impl World {
    /// Empty world; the first added location becomes both start and terminal
    /// until changed.
    pub fn new() -> Self {
        Self {
            locations: Vec::new(),
            start: 0,
            terminal: 0,
        }
    }

    pub fn add_location(&mut self, location: Location) -> LocationId {
        let id = self.locations.len();
        self.locations.push(location);
        id
    }

    /// One-way edge `from --direction--> to`. Overwrites an existing exit in
    /// the same direction. Edges touching an unknown id are dropped; returns
    /// whether the edge was registered.
    pub fn add_exit(&mut self, from: LocationId, direction: Direction, to: LocationId) -> bool {
        if to >= self.locations.len() {
            warn!("world.add_exit dropped: {} -> {} ({}) has no target", from, to, direction);
            return false;
        }
        match self.locations.get_mut(from) {
            Some(location) => {
                location.add_exit(direction, to);
                true
            }
            None => {
                warn!("world.add_exit dropped: unknown source {} ({})", from, direction);
                false
            }
        }
    }

    /// Reciprocal pair of exits. Nothing is registered unless both ids exist.
    pub fn connect(&mut self, a: LocationId, direction: Direction, b: LocationId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            warn!("world.connect dropped: {} <-> {} ({})", a, b, direction);
            return false;
        }
        self.add_exit(a, direction, b) && self.add_exit(b, direction.opposite(), a)
    }

    pub fn contains(&self, id: LocationId) -> bool {
        id < self.locations.len()
    }

    pub fn set_start(&mut self, id: LocationId) {
        self.start = id;
    }

    pub fn set_terminal(&mut self, id: LocationId) {
        self.terminal = id;
    }

    pub fn start(&self) -> LocationId {
        self.start
    }

    pub fn terminal(&self) -> LocationId {
        self.terminal
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn location_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations.get_mut(id)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The canonical two-room station: the player starts in the maintenance
    /// tunnels next to the diagnostic tool, with a damaged droid guarding the
    /// east tunnel. The docking bay beyond holds the energy crystal and the
    /// escape pod.
    pub fn orbital_station(texts: &dyn TextProvider) -> Self {
        let mut world = World::new();

        let tunnels = Location::new(
            &texts.resolve("locations.maintenance_tunnels.name", &[]),
            &texts.resolve("locations.maintenance_tunnels.description", &[]),
        )
        .with_cleared_description(&texts.resolve(
            "locations.maintenance_tunnels.description_clear",
            &[],
        ))
        .with_tool()
        .with_obstacle(Obstacle::new(Direction::East));

        let bay = Location::new(
            &texts.resolve("locations.docking_bay.name", &[]),
            &texts.resolve("locations.docking_bay.description", &[]),
        )
        .with_crystal();

        let tunnels = world.add_location(tunnels);
        let bay = world.add_location(bay);
        world.connect(tunnels, Direction::East, bay);
        world.set_start(tunnels);
        world.set_terminal(bay);
        debug_assert_eq!((tunnels, bay), (MAINTENANCE_TUNNELS, DOCKING_BAY));
        world
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
