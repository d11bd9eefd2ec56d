//! Headings on the level grid.
//!
//! Headings are numbered 1–4 in turning order starting from
//! [`Direction::Forward`], which points down the rows (row + 1). A
//! [`Turn::Right`] advances the number by one, wrapping from 4 to 1.

use emag_core::Coord;

/// Which way the agent faces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    /// Row + 1.
    #[default]
    Forward = 1,
    /// Column + 1.
    Right = 2,
    /// Row - 1.
    Backward = 3,
    /// Column - 1.
    Left = 4,
}

/// Rotation needed to go from one heading to another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    None,
    /// A quarter turn to the next heading number.
    Right,
    /// A half turn.
    Around,
    /// A quarter turn to the previous heading number.
    Left,
}

impl Direction {
    /// Turning order.
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Right,
        Direction::Backward,
        Direction::Left,
    ];

    /// The heading with number `n` (1–4).
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Direction::Forward),
            2 => Some(Direction::Right),
            3 => Some(Direction::Backward),
            4 => Some(Direction::Left),
            _ => None,
        }
    }

    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Heading of the unit move from `from` to `to`, or `None` if the two
    /// coordinates are not 4-adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.step(from) == Some(to))
    }

    /// The coordinate one move away in this heading. `None` on underflow.
    pub fn step(self, c: Coord) -> Option<Coord> {
        match self {
            Direction::Forward => Some(Coord::new(c.row + 1, c.column)),
            Direction::Right => Some(Coord::new(c.row, c.column + 1)),
            Direction::Backward => c.row.checked_sub(1).map(|r| Coord::new(r, c.column)),
            Direction::Left => c.column.checked_sub(1).map(|col| Coord::new(c.row, col)),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Right => Direction::Left,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
        }
    }

    /// Rotation from `self` to `to`.
    pub const fn turn_to(self, to: Direction) -> Turn {
        match (to.number() + 4 - self.number()) % 4 {
            0 => Turn::None,
            1 => Turn::Right,
            2 => Turn::Around,
            _ => Turn::Left,
        }
    }
}
