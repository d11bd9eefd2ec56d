//! Shared pieces of the `emag` command-line solver: configuration and route
//! rendering.

use std::fs;
use std::path::Path as FsPath;

use emag_core::{Grid, Kind, LevelConfig};
use emag_paths::Path;
use serde::Deserialize;

/// Marker drawn on plain cells the route passes through.
pub const ROUTE_MARK: char = '*';

/// Contents of an `emag.toml` file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub levels: LevelConfig,
}

impl Config {
    /// Parse a TOML configuration.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse the configuration file at `path`.
    pub fn load(path: &FsPath) -> Result<Self, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Render `grid` as level text with the route drawn over it.
///
/// Source, target and pickups keep their symbols; other route cells are
/// drawn as [`ROUTE_MARK`].
pub fn render_route(grid: &Grid, path: &Path<'_>) -> String {
    let mut out = String::with_capacity(grid.len() + grid.rows());
    for cell in grid.cells() {
        if cell.column() == 0 && cell.row() > 0 {
            out.push('\n');
        }
        let ch = match cell.kind() {
            Kind::Empty | Kind::Unknown if path.contains(cell.coord()) => ROUTE_MARK,
            kind => kind.symbol().unwrap_or('?'),
        };
        out.push(ch);
    }
    out
}

/// One-line summary of the route, e.g. `(0, 0) -> (0, 1) -> (0, 2)`.
pub fn describe_route(path: &Path<'_>) -> String {
    path.coords()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
