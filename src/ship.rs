//! Ship definitions and shape layout.

use core::fmt;

use crate::common::ShipError;
use crate::heading::Heading;
use crate::position::{Coordinate, Position};

/// The five ship categories. Only the shape rule differs between them; all
/// other ship behaviour is shared by [`Ship`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ShipKind {
    /// One cell.
    Barge,
    /// Straight run of two cells.
    Caravel,
    /// Straight run of three cells.
    Carrack,
    /// Straight run of four cells.
    Frigate,
    /// Five cells in a T-like pentomino.
    Galleon,
}

impl ShipKind {
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Barge,
        ShipKind::Caravel,
        ShipKind::Carrack,
        ShipKind::Frigate,
        ShipKind::Galleon,
    ];

    /// Category name shown to players and used for fleet filtering.
    pub const fn category(&self) -> &'static str {
        match self {
            ShipKind::Barge => "Barca",
            ShipKind::Caravel => "Caravela",
            ShipKind::Carrack => "Nau",
            ShipKind::Frigate => "Fragata",
            ShipKind::Galleon => "Galeao",
        }
    }

    /// Keyword accepted by [`build_ship`].
    pub const fn keyword(&self) -> &'static str {
        match self {
            ShipKind::Barge => "barca",
            ShipKind::Caravel => "caravela",
            ShipKind::Carrack => "nau",
            ShipKind::Frigate => "fragata",
            ShipKind::Galleon => "galeao",
        }
    }

    /// Number of cells a ship of this kind occupies.
    pub const fn size(&self) -> usize {
        match self {
            ShipKind::Barge => 1,
            ShipKind::Caravel => 2,
            ShipKind::Carrack => 3,
            ShipKind::Frigate => 4,
            ShipKind::Galleon => 5,
        }
    }

    /// Case-sensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        ShipKind::ALL.into_iter().find(|k| k.keyword() == keyword)
    }

    /// Offsets `(dr, dc)` from the origin for each cell of this kind.
    fn offsets(&self, heading: Heading) -> Result<Vec<(i32, i32)>, ShipError> {
        let len = self.size() as i32;
        let offsets = match (self, heading) {
            (ShipKind::Barge, _) => vec![(0, 0)],
            (ShipKind::Galleon, Heading::North) => vec![(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)],
            (ShipKind::Galleon, Heading::South) => vec![(0, 0), (1, 0), (2, -1), (2, 0), (2, 1)],
            (ShipKind::Galleon, Heading::East) => vec![(0, 0), (1, -2), (1, -1), (1, 0), (2, 0)],
            (ShipKind::Galleon, Heading::West) => vec![(0, 0), (1, 0), (1, 1), (1, 2), (2, 0)],
            // Straight ships always grow towards increasing row or column,
            // whichever way they face.
            (_, Heading::North | Heading::South) => (0..len).map(|i| (i, 0)).collect(),
            (_, Heading::East | Heading::West) => (0..len).map(|i| (0, i)).collect(),
            (kind, Heading::Unknown) => {
                return Err(ShipError::UnsupportedHeading {
                    kind: *kind,
                    heading,
                })
            }
        };
        Ok(offsets)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// A ship laid out on the board. Owns its cells and their hit state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ship {
    kind: ShipKind,
    heading: Heading,
    origin: Position,
    cells: Vec<Position>,
}

impl Ship {
    /// Lay out a ship of `kind` from `origin` facing `heading`.
    /// Multi-cell kinds have no shape for [`Heading::Unknown`].
    pub fn new(kind: ShipKind, heading: Heading, origin: Position) -> Result<Self, ShipError> {
        let origin = Position::new(origin.row(), origin.column());
        let cells = kind
            .offsets(heading)?
            .into_iter()
            .map(|(dr, dc)| {
                let row = origin.row().checked_add(dr)?;
                let column = origin.column().checked_add(dc)?;
                let mut cell = Position::new(row, column);
                cell.occupy();
                Some(cell)
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(ShipError::OffGrid { kind, origin })?;
        Ok(Ship {
            kind,
            heading,
            origin,
            cells,
        })
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn category(&self) -> &'static str {
        self.kind.category()
    }

    pub fn size(&self) -> usize {
        self.kind.size()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Cells of the ship, in layout order.
    pub fn positions(&self) -> &[Position] {
        &self.cells
    }

    pub fn top_most(&self) -> i32 {
        self.cells.iter().map(|p| p.row()).min().unwrap_or(self.origin.row())
    }

    pub fn bottom_most(&self) -> i32 {
        self.cells.iter().map(|p| p.row()).max().unwrap_or(self.origin.row())
    }

    pub fn left_most(&self) -> i32 {
        self.cells
            .iter()
            .map(|p| p.column())
            .min()
            .unwrap_or(self.origin.column())
    }

    pub fn right_most(&self) -> i32 {
        self.cells
            .iter()
            .map(|p| p.column())
            .max()
            .unwrap_or(self.origin.column())
    }

    /// True while at least one cell has not been hit.
    pub fn still_floating(&self) -> bool {
        self.cells.iter().any(|p| !p.is_hit())
    }

    pub fn occupies<C: Coordinate + ?Sized>(&self, pos: &C) -> bool {
        self.cells.iter().any(|p| p.row() == pos.row() && p.column() == pos.column())
    }

    /// True if any cell of this ship is one of the eight neighbours of `pos`.
    /// A cell the ship sits on is not a neighbour of itself.
    pub fn too_close_to_position<C: Coordinate + ?Sized>(&self, pos: &C) -> bool {
        self.cells.iter().any(|p| p.is_adjacent_to(pos))
    }

    /// True if the two ships overlap or touch, diagonals included.
    pub fn too_close_to(&self, other: &Ship) -> bool {
        other
            .cells
            .iter()
            .any(|p| self.occupies(p) || self.too_close_to_position(p))
    }

    /// Mark the cell at `pos` as hit. Shots that miss the ship are ignored.
    pub fn shoot<C: Coordinate + ?Sized>(&mut self, pos: &C) {
        for cell in self
            .cells
            .iter_mut()
            .filter(|p| p.row() == pos.row() && p.column() == pos.column())
        {
            cell.shoot();
        }
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.category(), self.heading, self.origin)
    }
}

/// Build a ship from its keyword (`"barca"`, `"caravela"`, `"nau"`,
/// `"fragata"`, `"galeao"`). An unknown keyword yields `Ok(None)`.
pub fn build_ship(
    keyword: &str,
    heading: Heading,
    origin: Position,
) -> Result<Option<Ship>, ShipError> {
    ShipKind::from_keyword(keyword)
        .map(|kind| Ship::new(kind, heading, origin))
        .transpose()
}
