//! A player's fleet and its placement rules.

use log::{debug, warn};
use rand::Rng;

use crate::common::{FleetError, PlaceError, PlaceReason};
use crate::config::{BOARD_SIZE, PLACEMENT_ATTEMPTS, STANDARD_FLEET};
use crate::heading::Heading;
use crate::position::{Coordinate, Position};
use crate::ship::{Ship, ShipKind};
use crate::ui;

/// Full-fleet restarts tried by [`Fleet::random`] before giving up.
const FLEET_ATTEMPTS: usize = 20;

/// Ships on one side of the board. Every ship lies inside the board and no
/// two ships overlap or touch.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    /// Build the standard fleet at random legal positions.
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, FleetError> {
        let mut last_err = None;
        for _ in 0..FLEET_ATTEMPTS {
            match Self::try_random(rng) {
                Ok(fleet) => return Ok(fleet),
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err.unwrap_or(FleetError::UnableToPlace {
            kind: STANDARD_FLEET[0],
        }))
    }

    fn try_random<R: Rng>(rng: &mut R) -> Result<Self, FleetError> {
        let mut fleet = Fleet::new();
        for kind in STANDARD_FLEET {
            let ship = fleet.random_placement(rng, kind)?;
            fleet.ships.push(ship);
        }
        Ok(fleet)
    }

    /// Returns a ship of `kind` at a random spot that this fleet would accept.
    /// Does not add it.
    pub fn random_placement<R: Rng>(&self, rng: &mut R, kind: ShipKind) -> Result<Ship, FleetError> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let heading = Heading::ALL[rng.random_range(0..Heading::ALL.len())];
            let origin = Position::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            let Ok(ship) = Ship::new(kind, heading, origin) else {
                continue;
            };
            if self.check(&ship).is_none() {
                return Ok(ship);
            }
        }
        Err(FleetError::UnableToPlace { kind })
    }

    fn check(&self, ship: &Ship) -> Option<PlaceReason> {
        let last = BOARD_SIZE - 1;
        if ship.left_most() < 0
            || ship.right_most() > last
            || ship.top_most() < 0
            || ship.bottom_most() > last
        {
            return Some(PlaceReason::OutOfBounds);
        }
        if self.ships.iter().any(|other| other.too_close_to(ship)) {
            return Some(PlaceReason::TooClose);
        }
        None
    }

    /// Add a ship, handing it back with the reason if it is off the board or
    /// too close to a ship already in the fleet.
    pub fn try_add_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        if let Some(reason) = self.check(&ship) {
            warn!("rejected {}: {}", ship, reason);
            return Err(PlaceError::new(reason, ship));
        }
        debug!("placed {}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Add a ship. Returns `false` and leaves the fleet unchanged if the ship
    /// was rejected.
    pub fn add_ship(&mut self, ship: Ship) -> bool {
        self.try_add_ship(ship).is_ok()
    }

    /// All ships in insertion order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub(crate) fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Ships whose category name matches exactly.
    pub fn ships_like(&self, category: &str) -> Vec<&Ship> {
        self.ships.iter().filter(|s| s.category() == category).collect()
    }

    /// Ships with at least one cell not yet hit.
    pub fn floating_ships(&self) -> Vec<&Ship> {
        self.ships.iter().filter(|s| s.still_floating()).collect()
    }

    /// First ship (in insertion order) occupying `pos`.
    pub fn ship_at<C: Coordinate + ?Sized>(&self, pos: &C) -> Option<&Ship> {
        self.ship_index_at(pos).map(|i| &self.ships[i])
    }

    pub(crate) fn ship_index_at<C: Coordinate + ?Sized>(&self, pos: &C) -> Option<usize> {
        self.ships.iter().position(|s| s.occupies(pos))
    }

    pub fn print_all_ships(&self) {
        print!("{}", ui::render_ship_list(self.ships.iter()));
    }

    pub fn print_floating_ships(&self) {
        print!("{}", ui::render_ship_list(self.ships.iter().filter(|s| s.still_floating())));
    }

    pub fn print_ships_by_category(&self, category: &str) {
        print!("{}", ui::render_ship_list(self.ships.iter().filter(|s| s.category() == category)));
    }

    pub fn print_status(&self) {
        print!("{}", ui::render_status(self));
    }
}
