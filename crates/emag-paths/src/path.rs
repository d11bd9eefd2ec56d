use emag_core::{Cell, Coord, Kind};

/// A solved route through a grid.
///
/// Cells are ordered from the source to the target, both included. Use
/// [`reversed`](Self::reversed) for target-first consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<'g> {
    cells: Vec<&'g Cell>,
    cost: f64,
}

impl<'g> Path<'g> {
    pub(crate) fn new(cells: Vec<&'g Cell>) -> Self {
        let cost = cells
            .windows(2)
            .map(|w| w[0].coord().euclidean(w[1].coord()))
            .sum();
        Self { cells, cost }
    }

    /// The cells of the route, source first.
    #[inline]
    pub fn cells(&self) -> &[&'g Cell] {
        &self.cells
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Total Euclidean length of the route.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of moves (one less than the cell count).
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&'g Cell> {
        self.cells.first().copied()
    }

    pub fn target(&self) -> Option<&'g Cell> {
        self.cells.last().copied()
    }

    /// Coordinates of the route, source first.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().map(|c| c.coord())
    }

    /// The same route walked from the target back to the source.
    pub fn reversed(&self) -> Path<'g> {
        let mut cells = self.cells.clone();
        cells.reverse();
        Self {
            cells,
            cost: self.cost,
        }
    }

    /// Intelligence pickups lying on the route, in walking order.
    pub fn intelligence_on_route(&self) -> impl Iterator<Item = &'g Cell> + '_ {
        self.cells
            .iter()
            .copied()
            .filter(|c| c.kind() == Kind::Intelligence)
    }

    /// Whether the route passes through `c`.
    pub fn contains(&self, c: Coord) -> bool {
        self.cells.iter().any(|cell| cell.coord() == c)
    }
}

impl<'g> IntoIterator for Path<'g> {
    type Item = &'g Cell;
    type IntoIter = std::vec::IntoIter<&'g Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
