use emag_core::{Coord, Dims};
use thiserror::Error;

/// Why a level could not be solved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchError {
    /// The level lacks a source or a target cell.
    #[error("level has no {}", missing_endpoints(.has_source, .has_target))]
    NoSourceOrTarget { has_source: bool, has_target: bool },
    /// The target cannot be reached from the source.
    #[error("no path from {from} to {to}")]
    NoPathFound { from: Coord, to: Coord },
    /// A reused search workspace was sized for a different grid.
    #[error("search workspace is {workspace}, grid is {grid}")]
    DimsMismatch { workspace: Dims, grid: Dims },
}

fn missing_endpoints(has_source: &bool, has_target: &bool) -> &'static str {
    match (*has_source, *has_target) {
        (false, false) => "source or target",
        (false, true) => "source",
        _ => "target",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_endpoint() {
        let e = SearchError::NoSourceOrTarget {
            has_source: false,
            has_target: true,
        };
        assert_eq!(e.to_string(), "level has no source");
        let e = SearchError::NoSourceOrTarget {
            has_source: true,
            has_target: false,
        };
        assert_eq!(e.to_string(), "level has no target");
        let e = SearchError::NoPathFound {
            from: Coord::new(0, 0),
            to: Coord::new(2, 0),
        };
        assert_eq!(e.to_string(), "no path from (0, 0) to (2, 0)");
    }
}
