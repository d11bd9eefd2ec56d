//! The immutable level [`Grid`].
//!
//! A grid is parsed once from level text and never mutated afterwards. The
//! source and target cells are located during parsing, so every query is a
//! plain read and a `Grid` can be shared across threads freely.

use std::fmt;
use std::str::FromStr;

use crate::cell::{Cell, Kind};
use crate::geom::{Coord, Dims};
use crate::level::{LevelError, LevelSource};

/// A rectangular arrangement of typed cells, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    dims: Dims,
    cells: Vec<Cell>,
    source: Option<usize>,
    target: Option<usize>,
}

impl Grid {
    /// Parse level text.
    ///
    /// Rows are separated by `'\n'` (a trailing `'\r'` is tolerated) and a
    /// single trailing newline is ignored. Every row must have the width of
    /// the first one. Characters outside `. s t o i` become
    /// [`Kind::Unknown`] cells. A level may have at most one source and one
    /// target; having none is left to the path search to report.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        let mut cells: Vec<Cell> = Vec::with_capacity(text.len());
        let mut columns: Option<usize> = None;
        let mut rows = 0;
        let mut source: Option<usize> = None;
        let mut target: Option<usize> = None;

        for (row, line) in text.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let width = line.chars().count();
            if row == 0 && width == 0 {
                return Err(LevelError::Empty);
            }
            let expected = *columns.get_or_insert(width);
            if width != expected {
                return Err(LevelError::Ragged {
                    row,
                    expected,
                    found: width,
                });
            }

            for (column, ch) in line.chars().enumerate() {
                let coord = Coord::new(row, column);
                let kind = Kind::from_symbol(ch);
                match kind {
                    Kind::Source => {
                        if let Some(first) = source {
                            return Err(LevelError::DuplicateSource {
                                first: cells[first].coord(),
                                second: coord,
                            });
                        }
                        source = Some(cells.len());
                    }
                    Kind::Target => {
                        if let Some(first) = target {
                            return Err(LevelError::DuplicateTarget {
                                first: cells[first].coord(),
                                second: coord,
                            });
                        }
                        target = Some(cells.len());
                    }
                    _ => {}
                }
                cells.push(Cell::new(kind, coord));
            }
            rows += 1;
        }

        let dims = Dims::new(rows, columns.unwrap_or(0));
        let grid = Self {
            dims,
            cells,
            source,
            target,
        };
        log::debug!(
            "parsed {} level, {} pickups, source {:?}, target {:?}",
            dims,
            grid.intelligence_count(),
            grid.source().map(Cell::coord),
            grid.target().map(Cell::coord),
        );
        let unknown = grid.unknown_count();
        if unknown > 0 {
            log::warn!("{unknown} unrecognised symbols in {dims} level, treated as passable");
        }
        Ok(grid)
    }

    /// Fetch level text named `name` from `levels` and parse it.
    pub fn load<L: LevelSource + ?Sized>(levels: &L, name: &str) -> Result<Self, LevelError> {
        let text = levels.read_level(name)?;
        log::debug!("loaded level {name:?} ({} bytes)", text.len());
        Self::parse(&text)
    }

    /// The grid extent.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.dims.columns
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid. Use [`get`](Self::get)
    /// for a checked lookup.
    pub fn cell_at(&self, row: usize, column: usize) -> &Cell {
        let c = Coord::new(row, column);
        match self.dims.index(c) {
            Some(i) => &self.cells[i],
            None => panic!("cell {c} is out of bounds for a {} grid", self.dims),
        }
    }

    /// The cell at `c`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<&Cell> {
        self.dims.index(c).map(|i| &self.cells[i])
    }

    /// First cell of `kind` in row-major order.
    pub fn find_cell_of_kind(&self, kind: Kind) -> Option<&Cell> {
        self.cells.iter().find(|c| c.kind() == kind)
    }

    /// The source cell, if the level has one.
    #[inline]
    pub fn source(&self) -> Option<&Cell> {
        self.source.map(|i| &self.cells[i])
    }

    /// The target cell, if the level has one.
    #[inline]
    pub fn target(&self) -> Option<&Cell> {
        self.target.map(|i| &self.cells[i])
    }

    /// Number of intelligence pickups in the level.
    pub fn intelligence_count(&self) -> usize {
        self.intelligence_cells().count()
    }

    /// Number of cells whose symbol was not recognised.
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|c| c.kind() == Kind::Unknown).count()
    }

    /// Intelligence pickups in row-major order.
    pub fn intelligence_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.kind() == Kind::Intelligence)
    }

    /// Passable neighbours of `cell`: down, up, right, left, in that order.
    pub fn neighbors_of(&self, cell: &Cell) -> Vec<&Cell> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(cell.coord(), &mut buf);
        buf.into_iter().map(|c| &self.cells[self.index_of(c)]).collect()
    }

    /// Append the passable neighbours of `c` to `buf` in the same order as
    /// [`neighbors_of`](Self::neighbors_of). Positions outside the grid and
    /// obstacles are skipped.
    pub fn neighbors_into(&self, c: Coord, buf: &mut Vec<Coord>) {
        for n in c.neighbors_4().into_iter().flatten() {
            if let Some(i) = self.dims.index(n) {
                if self.cells[i].kind().is_passable() {
                    buf.push(n);
                }
            }
        }
    }

    /// Straight-line distance between two cells.
    #[inline]
    pub fn euclidean_distance(&self, a: &Cell, b: &Cell) -> f64 {
        a.coord().euclidean(b.coord())
    }

    #[inline]
    fn index_of(&self, c: Coord) -> usize {
        c.row * self.dims.columns + c.column
    }
}

impl FromStr for Grid {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    /// Renders the level text back; unknown cells are written as `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.dims.columns.max(1)).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.kind().symbol().unwrap_or('?'))?;
            }
        }
        Ok(())
    }
}
