//! A* path search for Emag level grids.
//!
//! The search itself is generic over the [`Pather`] trait hierarchy and runs
//! in a reusable [`PathSearch`] workspace. [`Grid`](emag_core::Grid)
//! implements the traits with 4-way adjacency and Euclidean costs, and the
//! [`FindPath`] extension solves a level from its source to its target:
//!
//! ```
//! use emag_core::Grid;
//! use emag_paths::FindPath;
//!
//! let grid = Grid::parse("s..\n.o.\n..t").unwrap();
//! let path = grid.find_path().unwrap();
//! assert_eq!(path.len(), 5);
//! assert_eq!(path.cost(), 4.0);
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |

mod astar;
mod error;
mod grid;
mod path;
mod search;
mod traits;

pub use error::SearchError;
pub use grid::FindPath;
pub use path::Path;
pub use search::PathSearch;
pub use traits::{AstarPather, Pather, WeightedPather};
