//! Board coordinates.

use core::fmt;
use core::hash::{Hash, Hasher};

/// Anything that can name a cell on the board by row and column.
pub trait Coordinate {
    fn row(&self) -> i32;
    fn column(&self) -> i32;
}

impl Coordinate for (i32, i32) {
    fn row(&self) -> i32 {
        self.0
    }

    fn column(&self) -> i32 {
        self.1
    }
}

/// A cell on the board together with its occupied/hit flags.
///
/// Equality and hashing only look at `(row, column)`; the flags never affect
/// identity, so a freshly built position compares equal to a hit one.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position {
    row: i32,
    column: i32,
    occupied: bool,
    hit: bool,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self {
            row,
            column,
            occupied: false,
            hit: false,
        }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Mark the cell as occupied by a ship.
    pub fn occupy(&mut self) {
        self.occupied = true;
    }

    /// Mark the cell as hit.
    pub fn shoot(&mut self) {
        self.hit = true;
    }

    /// True if `other` is one of the eight cells surrounding this one.
    /// A cell is never adjacent to itself.
    pub fn is_adjacent_to<C: Coordinate + ?Sized>(&self, other: &C) -> bool {
        let dr = self.row.abs_diff(other.row());
        let dc = self.column.abs_diff(other.column());
        dr.max(dc) == 1
    }
}

impl Coordinate for Position {
    fn row(&self) -> i32 {
        self.row
    }

    fn column(&self) -> i32 {
        self.column
    }
}

impl<C: Coordinate> PartialEq<C> for Position {
    fn eq(&self, other: &C) -> bool {
        self.row == other.row() && self.column == other.column()
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.column.hash(state);
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
