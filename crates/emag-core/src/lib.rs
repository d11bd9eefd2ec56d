//! **emag-core** — level grids for the Emag puzzle game.
//!
//! This crate provides the grid model shared by the rest of the workspace:
//! row/column coordinates, typed cells, an immutable [`Grid`] parsed from
//! level text, and [`LevelSource`] loaders that fetch that text by name.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod level;

pub use cell::{Cell, Kind};
pub use geom::{Coord, Dims};
pub use grid::Grid;
pub use level::{DirLevels, LevelConfig, LevelError, LevelSource, MemoryLevels};
