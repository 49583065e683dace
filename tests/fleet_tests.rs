use battleship::{
    Fleet, Heading, PlaceReason, Position, Ship, ShipKind, BOARD_SIZE, FLEET_SIZE, STANDARD_FLEET,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn ship(kind: ShipKind, heading: Heading, row: i32, col: i32) -> Ship {
    Ship::new(kind, heading, Position::new(row, col)).unwrap()
}

#[test]
fn new_fleet_is_empty() {
    let fleet = Fleet::new();
    assert!(fleet.is_empty());
    assert!(fleet.ships().is_empty());
    assert!(fleet.floating_ships().is_empty());
    assert!(fleet.ships_like("any").is_empty());
}

#[test]
fn accepts_ship_inside_board() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(ship(ShipKind::Frigate, Heading::East, 0, 0)));
    assert!(fleet.add_ship(ship(ShipKind::Barge, Heading::North, 9, 9)));
    assert_eq!(fleet.len(), 2);
}

#[test]
fn rejects_ships_leaving_the_board() {
    let mut fleet = Fleet::new();
    let outside = [
        ship(ShipKind::Carrack, Heading::East, 0, -1),
        ship(ShipKind::Carrack, Heading::East, 0, BOARD_SIZE - 2),
        ship(ShipKind::Carrack, Heading::North, -1, 0),
        ship(ShipKind::Carrack, Heading::North, BOARD_SIZE - 2, 0),
        ship(ShipKind::Galleon, Heading::South, 0, 0),
        ship(ShipKind::Galleon, Heading::East, 0, 1),
    ];
    for s in outside {
        let err = fleet.try_add_ship(s.clone()).unwrap_err();
        assert_eq!(err.reason(), PlaceReason::OutOfBounds);
        assert_eq!(err.into_ship(), s);
    }
    assert!(fleet.is_empty());
}

#[test]
fn rejects_touching_and_overlapping_ships() {
    let mut fleet = Fleet::new();
    assert!(fleet.add_ship(ship(ShipKind::Caravel, Heading::East, 4, 4)));
    let diagonal = ship(ShipKind::Barge, Heading::North, 5, 6);
    let overlap = ship(ShipKind::Frigate, Heading::North, 2, 5);
    for s in [diagonal, overlap] {
        let err = fleet.try_add_ship(s).unwrap_err();
        assert_eq!(err.reason(), PlaceReason::TooClose);
    }
    assert!(!fleet.add_ship(ship(ShipKind::Barge, Heading::North, 3, 3)));
    assert!(fleet.add_ship(ship(ShipKind::Barge, Heading::North, 6, 4)));
    assert_eq!(fleet.len(), 2);
}

#[test]
fn filters_by_category() {
    let mut fleet = Fleet::new();
    fleet.add_ship(ship(ShipKind::Galleon, Heading::North, 0, 0));
    fleet.add_ship(ship(ShipKind::Frigate, Heading::East, 5, 0));
    fleet.add_ship(ship(ShipKind::Galleon, Heading::North, 0, 6));
    assert_eq!(fleet.ships_like("Galeao").len(), 2);
    assert_eq!(fleet.ships_like("Fragata").len(), 1);
    assert!(fleet.ships_like("Nau").is_empty());
    assert!(fleet.ships_like("galeao").is_empty());
}

#[test]
fn floating_ships_exclude_sunk() {
    let mut fleet = Fleet::new();
    fleet.add_ship(ship(ShipKind::Barge, Heading::North, 0, 0));
    fleet.add_ship(ship(ShipKind::Barge, Heading::North, 5, 5));
    let mut game = battleship::Game::new(fleet);
    game.fire(&(0, 0));
    let floating = game.fleet().floating_ships();
    assert_eq!(floating.len(), 1);
    assert_eq!(floating[0].origin(), Position::new(5, 5));
}

#[test]
fn ship_at_finds_occupant() {
    let mut fleet = Fleet::new();
    fleet.add_ship(ship(ShipKind::Caravel, Heading::East, 4, 4));
    assert_eq!(fleet.ship_at(&(4, 5)).map(Ship::category), Some("Caravela"));
    assert!(fleet.ship_at(&Position::new(5, 5)).is_none());
}

#[test]
fn printing_helpers_do_not_panic() {
    let mut fleet = Fleet::new();
    fleet.add_ship(ship(ShipKind::Frigate, Heading::East, 0, 0));
    fleet.add_ship(ship(ShipKind::Galleon, Heading::North, 2, 0));
    fleet.print_all_ships();
    fleet.print_floating_ships();
    fleet.print_ships_by_category("Galeao");
    fleet.print_ships_by_category("");
    fleet.print_status();
}

#[test]
fn status_lists_categories() {
    let mut fleet = Fleet::new();
    fleet.add_ship(ship(ShipKind::Frigate, Heading::East, 0, 0));
    let status = battleship::ui::render_status(&fleet);
    assert!(status.contains("Fragata (4): 1/1 afloat"));
    assert!(!status.contains("Galeao"));
}

#[test]
fn random_fleet_is_standard_and_legal() {
    let mut rng = SmallRng::seed_from_u64(42);
    let fleet = Fleet::random(&mut rng).unwrap();
    assert_eq!(fleet.len(), FLEET_SIZE);
    let kinds: Vec<ShipKind> = fleet.ships().iter().map(Ship::kind).collect();
    assert_eq!(kinds, STANDARD_FLEET.to_vec());
    let cells: usize = fleet.ships().iter().map(Ship::size).sum();
    assert_eq!(cells, TOTAL_SHIP_CELLS);
}

#[test]
fn random_fleet_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);
    let a = Fleet::random(&mut rng1).unwrap();
    let b = Fleet::random(&mut rng2).unwrap();
    assert_eq!(a.ships(), b.ships());
}

#[test]
fn random_placement_respects_existing_ships() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut fleet = Fleet::new();
    fleet.add_ship(ship(ShipKind::Frigate, Heading::North, 3, 3));
    for _ in 0..20 {
        let candidate = fleet.random_placement(&mut rng, ShipKind::Carrack).unwrap();
        assert!(!candidate.too_close_to(&fleet.ships()[0]));
    }
}
