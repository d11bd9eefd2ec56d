use emag_core::{Coord, Grid};

use crate::error::SearchError;
use crate::path::Path;
use crate::search::PathSearch;
use crate::traits::{AstarPather, Pather, WeightedPather};

impl Pather for Grid {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        self.neighbors_into(c, buf);
    }
}

impl WeightedPather for Grid {
    fn cost(&self, from: Coord, to: Coord) -> f64 {
        from.euclidean(to)
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Coord, to: Coord) -> f64 {
        from.euclidean(to)
    }
}

/// Solve a level from its source cell to its target cell.
pub trait FindPath {
    /// Shortest route from source to target, in a fresh workspace.
    fn find_path(&self) -> Result<Path<'_>, SearchError>;

    /// Shortest route from source to target, reusing `search`.
    fn find_path_with(&self, search: &mut PathSearch) -> Result<Path<'_>, SearchError>;
}

impl FindPath for Grid {
    fn find_path(&self) -> Result<Path<'_>, SearchError> {
        let mut search = PathSearch::new(self.dims());
        self.find_path_with(&mut search)
    }

    fn find_path_with(&self, search: &mut PathSearch) -> Result<Path<'_>, SearchError> {
        let (source, target) = match (self.source(), self.target()) {
            (Some(s), Some(t)) => (s, t),
            (s, t) => {
                return Err(SearchError::NoSourceOrTarget {
                    has_source: s.is_some(),
                    has_target: t.is_some(),
                });
            }
        };
        if search.dims() != self.dims() {
            return Err(SearchError::DimsMismatch {
                workspace: search.dims(),
                grid: self.dims(),
            });
        }

        let coords = search
            .astar_path(self, source.coord(), target.coord())
            .ok_or(SearchError::NoPathFound {
                from: source.coord(),
                to: target.coord(),
            })?;
        let cells = coords.into_iter().filter_map(|c| self.get(c)).collect();
        let path = Path::new(cells);
        log::debug!(
            "solved {} level: {} cells, cost {:.3}, {} expanded",
            self.dims(),
            path.len(),
            path.cost(),
            search.last_expanded()
        );
        Ok(path)
    }
}
