//! Compass heading of a ship.

use core::fmt;

/// Direction a ship is laid out in. Each heading has a one-character code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Heading {
    North,
    South,
    East,
    West,
    Unknown,
}

impl Heading {
    /// The four real compass headings, excluding `Unknown`.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::South, Heading::East, Heading::West];

    /// Character code of this heading.
    pub fn direction_char(&self) -> char {
        match self {
            Heading::North => 'n',
            Heading::South => 's',
            Heading::East => 'e',
            Heading::West => 'o',
            Heading::Unknown => 'u',
        }
    }

    /// Map a character code back to a heading. Case sensitive; anything not
    /// recognised is `Unknown`.
    pub fn parse(c: char) -> Self {
        match c {
            'n' => Heading::North,
            's' => Heading::South,
            'e' => Heading::East,
            'o' => Heading::West,
            _ => Heading::Unknown,
        }
    }
}

impl From<char> for Heading {
    fn from(c: char) -> Self {
        Heading::parse(c)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.direction_char())
    }
}
