//! Common types for Battleship: errors and shot outcomes.

use thiserror::Error;

use crate::heading::Heading;
use crate::position::Position;
use crate::ship::{Ship, ShipKind};

/// Detailed result of firing at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Coordinate outside the accepted firing range; nothing recorded.
    Invalid,
    /// Coordinate already fired at; nothing recorded.
    Repeated,
    /// Recorded, no ship there.
    Miss,
    /// Recorded, hit a ship that is still floating.
    Hit,
    /// Recorded, sank the ship at this index in the fleet.
    Sunk(usize),
}

/// Errors raised while building a ship.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShipError {
    /// The ship's shape is not defined for the requested heading.
    #[error("{kind:?} cannot be laid out with heading '{heading}'")]
    UnsupportedHeading { kind: ShipKind, heading: Heading },
    /// Some cell of the shape falls outside the representable coordinate range.
    #[error("{kind:?} at {origin} does not fit in the coordinate range")]
    OffGrid { kind: ShipKind, origin: Position },
}

/// Why a fleet refused a ship.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaceReason {
    /// Part of the ship lies outside the board.
    #[error("ship does not fit on the board")]
    OutOfBounds,
    /// The ship overlaps or touches a ship already in the fleet.
    #[error("ship is too close to another ship")]
    TooClose,
}

/// A rejected placement. Hands the ship back to the caller.
#[derive(Debug, Error)]
#[error("could not place {ship}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: PlaceReason,
    ship: Ship,
}

impl PlaceError {
    pub(crate) fn new(reason: PlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    pub fn reason(&self) -> PlaceReason {
        self.reason
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Recover the ship that was not placed.
    pub fn into_ship(self) -> Ship {
        self.ship
    }
}

/// Errors from building whole fleets.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// No legal spot was found for the ship within the attempt budget.
    #[error("unable to place a {kind:?} on the board")]
    UnableToPlace { kind: ShipKind },
}
