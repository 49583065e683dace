use crate::ship::ShipKind;

/// Side length of the square board. Valid cell indices are `0..BOARD_SIZE`.
pub const BOARD_SIZE: i32 = 10;

/// Number of ships a full fleet is meant to hold. Advisory; placement does not
/// enforce it.
pub const FLEET_SIZE: usize = 10;

/// Composition of the standard fleet, largest ships first so random placement
/// has the most room for the awkward shapes.
pub const STANDARD_FLEET: [ShipKind; FLEET_SIZE] = [
    ShipKind::Galleon,
    ShipKind::Frigate,
    ShipKind::Carrack,
    ShipKind::Carrack,
    ShipKind::Caravel,
    ShipKind::Caravel,
    ShipKind::Caravel,
    ShipKind::Barge,
    ShipKind::Barge,
    ShipKind::Barge,
];

/// Total number of ship cells in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1;

/// Upper bound on random origin/heading draws per ship before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 100;
