//! Geometry primitives: [`Coord`] and [`Dims`].
//!
//! Levels are addressed by row and column, rows growing downwards. Flat
//! storage is row-major with the column count as stride.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid position. Ordered by row, then column (row-major scan order).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub column: usize,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, column: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn euclidean(self, other: Coord) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.column.abs_diff(other.column) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// Number of unit moves between `self` and `other` on a 4-connected grid.
    #[inline]
    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column)
    }

    /// The four cardinal neighbours in canonical order: down (row + 1),
    /// up (row - 1), right (column + 1), left (column - 1).
    ///
    /// Neighbours that would underflow are `None`; the upper bound is the
    /// caller's concern.
    #[inline]
    pub fn neighbors_4(self) -> [Option<Coord>; 4] {
        [
            Some(Self::new(self.row + 1, self.column)),
            self.row.checked_sub(1).map(|r| Self::new(r, self.column)),
            Some(Self::new(self.row, self.column + 1)),
            self.column.checked_sub(1).map(|c| Self::new(self.row, c)),
        ]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid extent: `rows` × `columns`, origin at (0, 0).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: usize,
    pub columns: usize,
}

impl Dims {
    /// Create a new extent.
    #[inline]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.columns
    }

    /// Whether the extent has no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Whether `c` lies inside the extent.
    #[inline]
    pub const fn contains(self, c: Coord) -> bool {
        c.row < self.rows && c.column < self.columns
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub const fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row * self.columns + c.column)
    }

    /// Convert a flat index back to a coordinate.
    ///
    /// `idx` must be `< self.len()`.
    #[inline]
    pub const fn coord(self, idx: usize) -> Coord {
        Coord::new(idx / self.columns, idx % self.columns)
    }

    /// Iterate over every coordinate in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Coord> {
        (0..self.len()).map(move |i| self.coord(i))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn coord_ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn euclidean_distance() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 4);
        assert_relative_eq!(a.euclidean(b), 5.0);
        assert_relative_eq!(b.euclidean(a), 5.0);
        assert_eq!(a.euclidean(a), 0.0);
        assert_eq!(a.manhattan(b), 7);
    }

    #[test]
    fn neighbors_at_origin_skip_underflow() {
        let n = Coord::ZERO.neighbors_4();
        assert_eq!(n[0], Some(Coord::new(1, 0)));
        assert_eq!(n[1], None);
        assert_eq!(n[2], Some(Coord::new(0, 1)));
        assert_eq!(n[3], None);
    }

    #[test]
    fn dims_index_round_trip_non_square() {
        // 2 rows, 5 columns: the stride must be the column count.
        let d = Dims::new(2, 5);
        assert_eq!(d.len(), 10);
        assert_eq!(d.index(Coord::new(1, 3)), Some(8));
        assert_eq!(d.coord(8), Coord::new(1, 3));
        assert_eq!(d.coord(4), Coord::new(0, 4));
        assert_eq!(d.index(Coord::new(0, 5)), None);
        assert_eq!(d.index(Coord::new(2, 0)), None);
        for (i, c) in d.iter().enumerate() {
            assert_eq!(d.index(c), Some(i));
        }
    }

    #[test]
    fn dims_empty() {
        assert!(Dims::new(0, 3).is_empty());
        assert!(Dims::new(3, 0).is_empty());
        assert!(!Dims::new(1, 1).is_empty());
        assert_eq!(Dims::new(3, 4).to_string(), "3x4");
    }
}
