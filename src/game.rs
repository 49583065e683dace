//! Shot resolution against a fleet.

use log::{debug, info, warn};

use crate::common::ShotOutcome;
use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::position::{Coordinate, Position};
use crate::ship::Ship;
use crate::ui;

/// Marker used for fired cells when printing the shot board.
const SHOT_MARKER: char = 'X';
/// Marker used for ship cells when printing the fleet.
const SHIP_MARKER: char = '#';

/// A match in progress: the fleet being fired at plus the shot history.
///
/// There is no terminal state; callers check [`Game::remaining_ships`] (or
/// [`Game::is_over`]) to decide when the match is finished.
#[derive(Debug, Clone)]
pub struct Game {
    fleet: Fleet,
    shots: Vec<Position>,
    hits: usize,
    sunk_ships: usize,
    invalid_shots: usize,
    repeated_shots: usize,
}

impl Game {
    /// Start a match against `fleet`. All counters start at zero.
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            shots: Vec::new(),
            hits: 0,
            sunk_ships: 0,
            invalid_shots: 0,
            repeated_shots: 0,
        }
    }

    /// Whether a coordinate is accepted as a shot.
    ///
    /// The accepted range is `0..=BOARD_SIZE` on both axes: one past the last
    /// cell is recorded as an ordinary miss.
    pub fn is_valid_shot<C: Coordinate + ?Sized>(pos: &C) -> bool {
        (0..=BOARD_SIZE).contains(&pos.row()) && (0..=BOARD_SIZE).contains(&pos.column())
    }

    /// Fire at `pos` and report what happened.
    pub fn fire_outcome<C: Coordinate + ?Sized>(&mut self, pos: &C) -> ShotOutcome {
        let shot = Position::new(pos.row(), pos.column());
        if !Self::is_valid_shot(&shot) {
            warn!("invalid shot at {}", shot);
            self.invalid_shots += 1;
            return ShotOutcome::Invalid;
        }
        if self.shots.contains(&shot) {
            debug!("repeated shot at {}", shot);
            self.repeated_shots += 1;
            return ShotOutcome::Repeated;
        }
        let mut recorded = shot;
        recorded.shoot();
        self.shots.push(recorded);

        let Some(index) = self.fleet.ship_index_at(&shot) else {
            debug!("miss at {}", shot);
            return ShotOutcome::Miss;
        };
        self.hits += 1;
        let ship = &mut self.fleet.ships_mut()[index];
        ship.shoot(&shot);
        if ship.still_floating() {
            debug!("hit {} at {}", ship, shot);
            ShotOutcome::Hit
        } else {
            info!("sank {}", ship);
            self.sunk_ships += 1;
            ShotOutcome::Sunk(index)
        }
    }

    /// Fire at `pos`. Returns the ship only when this shot sank it; invalid,
    /// repeated, missed and non-sinking shots all return `None`.
    pub fn fire<C: Coordinate + ?Sized>(&mut self, pos: &C) -> Option<&Ship> {
        match self.fire_outcome(pos) {
            ShotOutcome::Sunk(index) => self.fleet.ships().get(index),
            _ => None,
        }
    }

    /// Number of ships still floating, counted afresh.
    pub fn remaining_ships(&self) -> usize {
        self.fleet.ships().iter().filter(|s| s.still_floating()).count()
    }

    /// True once every ship has been sunk.
    pub fn is_over(&self) -> bool {
        self.remaining_ships() == 0
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Recorded shots in firing order, without duplicates.
    pub fn shots(&self) -> &[Position] {
        &self.shots
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Recorded shots that hit nothing.
    pub fn misses(&self) -> usize {
        self.shots.len() - self.hits
    }

    pub fn sunk_ships(&self) -> usize {
        self.sunk_ships
    }

    pub fn invalid_shots(&self) -> usize {
        self.invalid_shots
    }

    pub fn repeated_shots(&self) -> usize {
        self.repeated_shots
    }

    /// Print a board with `marker` at each of `positions`.
    pub fn print_board(&self, positions: &[Position], marker: char) {
        print!("{}", ui::render_board(positions, marker));
    }

    /// Print the board with every recorded shot marked.
    pub fn print_valid_shots(&self) {
        self.print_board(&self.shots, SHOT_MARKER);
    }

    /// Print the board with every ship cell marked.
    pub fn print_fleet(&self) {
        let cells: Vec<Position> = self
            .fleet
            .ships()
            .iter()
            .flat_map(|s| s.positions().iter().copied())
            .collect();
        self.print_board(&cells, SHIP_MARKER);
    }
}
