//! The [`Cell`] type — one level position with a [`Kind`].

use std::hash::{Hash, Hasher};

use crate::geom::Coord;

/// Semantic category of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    #[default]
    Empty,
    Source,
    Target,
    Obstacle,
    Intelligence,
    Unknown,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 6] = [
        Kind::Empty,
        Kind::Source,
        Kind::Target,
        Kind::Obstacle,
        Kind::Intelligence,
        Kind::Unknown,
    ];

    /// Map a level character to its kind. Unrecognised characters are
    /// [`Kind::Unknown`].
    #[inline]
    pub const fn from_symbol(ch: char) -> Self {
        match ch {
            '.' => Kind::Empty,
            's' => Kind::Source,
            't' => Kind::Target,
            'o' => Kind::Obstacle,
            'i' => Kind::Intelligence,
            _ => Kind::Unknown,
        }
    }

    /// The level character for this kind, `None` for [`Kind::Unknown`].
    #[inline]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Kind::Empty => Some('.'),
            Kind::Source => Some('s'),
            Kind::Target => Some('t'),
            Kind::Obstacle => Some('o'),
            Kind::Intelligence => Some('i'),
            Kind::Unknown => None,
        }
    }

    /// Whether an agent may stand on this cell. Only obstacles block;
    /// unknown cells are passable.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Kind::Obstacle)
    }
}

impl From<char> for Kind {
    #[inline]
    fn from(ch: char) -> Self {
        Self::from_symbol(ch)
    }
}

/// A typed grid position.
///
/// Cells are created by [`Grid`](crate::Grid) and never change afterwards.
/// Two cells are equal when their coordinates are; the kind is not part of
/// identity.
#[derive(Copy, Clone, Debug)]
pub struct Cell {
    kind: Kind,
    coord: Coord,
}

impl Cell {
    #[inline]
    pub(crate) const fn new(kind: Kind, coord: Coord) -> Self {
        Self { kind, coord }
    }

    #[inline]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub const fn row(&self) -> usize {
        self.coord.row
    }

    #[inline]
    pub const fn column(&self) -> usize {
        self.coord.column
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn kinds_round_trip() {
        for kind in Kind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            let back: Kind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }
}
