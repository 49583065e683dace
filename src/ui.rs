//! Text rendering of boards, fleets and games.
//!
//! Everything here returns a `String`; the `print_*` helpers on [`Fleet`] and
//! [`Game`] write these to stdout.

use core::fmt::Write;

use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::game::Game;
use crate::position::Position;
use crate::ship::Ship;

const WATER: char = '.';
const HIT: char = 'X';
const MISS: char = 'o';
const SHIP: char = 'S';

fn column_label(c: i32) -> char {
    (b'A' + c as u8) as char
}

/// Format a cell the way players type it, e.g. `(4, 0)` as `A5`.
/// Cells off the grid fall back to `(row, column)`.
pub fn coord_label(pos: &Position) -> String {
    if in_grid(pos) {
        format!("{}{}", column_label(pos.column()), pos.row() + 1)
    } else {
        pos.to_string()
    }
}

fn in_grid(pos: &Position) -> bool {
    (0..BOARD_SIZE).contains(&pos.row()) && (0..BOARD_SIZE).contains(&pos.column())
}

fn render_grid(cell: impl Fn(i32, i32) -> char) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", column_label(c));
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let _ = write!(out, " {}", cell(r, c));
        }
        out.push('\n');
    }
    out
}

/// Render the board with `marker` on each of `positions`. Positions off the
/// grid are skipped.
pub fn render_board(positions: &[Position], marker: char) -> String {
    let mut grid = [[WATER; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for pos in positions.iter().filter(|p| in_grid(p)) {
        grid[pos.row() as usize][pos.column() as usize] = marker;
    }
    render_grid(|r, c| grid[r as usize][c as usize])
}

/// Render the shooter's view of a game: hits, misses, and optionally the
/// ships that have not been found yet.
pub fn render_game(game: &Game, reveal: bool) -> String {
    let fleet = game.fleet();
    let mut body = render_grid(|r, c| {
        let shot = game.shots().iter().any(|p| *p == (r, c));
        let ship = fleet.ship_at(&(r, c)).is_some();
        match (shot, ship) {
            (true, true) => HIT,
            (true, false) => MISS,
            (false, true) if reveal => SHIP,
            _ => WATER,
        }
    });
    if reveal {
        let _ = writeln!(body, "Legend: {}=Ship  {}=Hit  {}=Miss  {}=Water", SHIP, HIT, MISS, WATER);
    } else {
        let _ = writeln!(body, "Legend: {}=Hit  {}=Miss  {}=Unknown", HIT, MISS, WATER);
    }
    body
}

/// One ship per line, using the ship's display form.
pub fn render_ship_list<'a>(ships: impl Iterator<Item = &'a Ship>) -> String {
    let mut out = String::new();
    for ship in ships {
        let state = if ship.still_floating() { "afloat" } else { "sunk" };
        let _ = writeln!(out, "{} {}", ship, state);
    }
    out
}

/// Per-category summary of a fleet.
pub fn render_status(fleet: &Fleet) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Fleet: {} ships, {} afloat",
        fleet.len(),
        fleet.floating_ships().len()
    );
    for kind in crate::ship::ShipKind::ALL {
        let ships = fleet.ships_like(kind.category());
        if ships.is_empty() {
            continue;
        }
        let afloat = ships.iter().filter(|s| s.still_floating()).count();
        let _ = writeln!(
            out,
            "  {} ({}): {}/{} afloat",
            kind.category(),
            kind.size(),
            afloat,
            ships.len()
        );
    }
    out
}
