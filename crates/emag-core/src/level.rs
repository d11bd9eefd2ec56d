//! Named level loading and level errors.
//!
//! The grid model only ever consumes a string. Where that string comes from
//! is a [`LevelSource`]: a directory of `<name>.grid` files ([`DirLevels`])
//! or an in-memory table ([`MemoryLevels`]).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::geom::Coord;

/// File extension of level files.
pub const DEFAULT_EXTENSION: &str = "grid";

/// Reasons a level cannot become a [`Grid`](crate::Grid).
#[derive(Debug, Error)]
pub enum LevelError {
    /// No level with this name exists in the source.
    #[error("level {name:?} not found")]
    NotFound { name: String },
    /// The level exists but could not be read as UTF-8 text.
    #[error("level {name:?} could not be read")]
    Unreadable {
        name: String,
        #[source]
        source: io::Error,
    },
    /// The text has no rows or a zero-width first row.
    #[error("level is empty")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("second source at {second}, first at {first}")]
    DuplicateSource { first: Coord, second: Coord },
    #[error("second target at {second}, first at {first}")]
    DuplicateTarget { first: Coord, second: Coord },
}

/// Supplies level text by name.
pub trait LevelSource {
    /// Return the raw text of level `name`.
    fn read_level(&self, name: &str) -> Result<String, LevelError>;
}

impl<L: LevelSource + ?Sized> LevelSource for &L {
    fn read_level(&self, name: &str) -> Result<String, LevelError> {
        (**self).read_level(name)
    }
}

/// Where [`DirLevels`] looks for level files.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelConfig {
    /// Directory holding the level files.
    pub dir: PathBuf,
    /// Extension appended to level names, without the dot. Empty means
    /// names are used verbatim.
    pub extension: String,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("levels"),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Levels stored as files in one directory.
#[derive(Debug, Clone)]
pub struct DirLevels {
    config: LevelConfig,
}

impl DirLevels {
    /// Levels in `dir` with the default `grid` extension.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_config(LevelConfig {
            dir: dir.into(),
            ..LevelConfig::default()
        })
    }

    pub fn with_config(config: LevelConfig) -> Self {
        Self { config }
    }

    /// Set the file extension (builder).
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.extension = ext.into();
        self
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Path of the file that holds level `name`.
    pub fn path_of(&self, name: &str) -> PathBuf {
        let ext = self.config.extension.trim_start_matches('.');
        if ext.is_empty() {
            self.config.dir.join(name)
        } else {
            self.config.dir.join(format!("{name}.{ext}"))
        }
    }
}

impl LevelSource for DirLevels {
    fn read_level(&self, name: &str) -> Result<String, LevelError> {
        read_file(&self.path_of(name), name)
    }
}

/// Read a level file at `path`, reporting failures under `name`.
pub fn read_file(path: &Path, name: &str) -> Result<String, LevelError> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LevelError::NotFound {
                name: name.to_string(),
            }
        } else {
            LevelError::Unreadable {
                name: name.to_string(),
                source: e,
            }
        }
    })?;
    String::from_utf8(bytes).map_err(|e| LevelError::Unreadable {
        name: name.to_string(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })
}

/// Levels kept in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryLevels {
    levels: HashMap<String, String>,
}

impl MemoryLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a level (builder).
    pub fn with_level(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    /// Add or replace a level.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.levels.insert(name.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl LevelSource for MemoryLevels {
    fn read_level(&self, name: &str) -> Result<String, LevelError> {
        self.levels
            .get(name)
            .cloned()
            .ok_or_else(|| LevelError::NotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Grid, Kind};
    use std::error::Error as _;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("emag-{}-{tag}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn memory_levels_load() {
        let levels = MemoryLevels::new().with_level("one", "s.t");
        assert_eq!(levels.len(), 1);
        let g = Grid::load(&levels, "one").unwrap();
        assert_eq!(g.cell_at(0, 2).kind(), Kind::Target);
        assert!(matches!(
            Grid::load(&levels, "two"),
            Err(LevelError::NotFound { name }) if name == "two"
        ));
    }

    #[test]
    fn dir_levels_use_extension() {
        let dir = scratch_dir("ext");
        fs::write(dir.join("first.grid"), "s.\n.t\n").unwrap();
        fs::write(dir.join("second.txt"), "st").unwrap();

        let levels = DirLevels::new(&dir);
        assert_eq!(levels.path_of("first"), dir.join("first.grid"));
        let g = Grid::load(&levels, "first").unwrap();
        assert_eq!(g.rows(), 2);
        assert!(matches!(
            Grid::load(&levels, "second"),
            Err(LevelError::NotFound { .. })
        ));

        let txt = DirLevels::new(&dir).with_extension(".txt");
        assert_eq!(Grid::load(&txt, "second").unwrap().columns(), 2);

        let verbatim = DirLevels::new(&dir).with_extension("");
        assert_eq!(Grid::load(&verbatim, "second.txt").unwrap().columns(), 2);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn non_utf8_is_unreadable() {
        let dir = scratch_dir("utf8");
        fs::write(dir.join("bad.grid"), [0x73, 0xff, 0x74]).unwrap();

        let err = Grid::load(&DirLevels::new(&dir), "bad").unwrap_err();
        assert!(matches!(err, LevelError::Unreadable { .. }));
        assert!(err.source().is_some());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn default_config() {
        let cfg = LevelConfig::default();
        assert_eq!(cfg.dir, PathBuf::from("levels"));
        assert_eq!(cfg.extension, "grid");
    }

    #[test]
    fn error_messages() {
        let err = LevelError::Ragged {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 2 has 3 cells, expected 4");
        let err = LevelError::DuplicateSource {
            first: Coord::new(0, 0),
            second: Coord::new(1, 2),
        };
        assert_eq!(err.to_string(), "second source at (1, 2), first at (0, 0)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_fills_missing_fields() {
        let cfg: LevelConfig = serde_json::from_str(r#"{"dir": "maps"}"#).unwrap();
        assert_eq!(cfg.dir, PathBuf::from("maps"));
        assert_eq!(cfg.extension, DEFAULT_EXTENSION);
    }
}
