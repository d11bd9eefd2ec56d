//! The [`Agent`] and its capability meter.

use std::collections::HashSet;

use emag_core::{Coord, Grid, Kind};
use emag_paths::Path;
use thiserror::Error;

use crate::direction::{Direction, Turn};

/// Why the agent refused a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("level has no source to start from")]
    NoSource,
    #[error("{to} is not one move away from {from}")]
    NotAdjacent { from: Coord, to: Coord },
    #[error("{at} is blocked")]
    Blocked { at: Coord },
    #[error("route starts at {start}, agent stands at {at}")]
    WrongStart { start: Coord, at: Coord },
}

/// One move of the agent, as recorded by [`Agent::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub from: Coord,
    pub to: Coord,
    /// Heading after the move.
    pub heading: Direction,
    /// Rotation performed before moving.
    pub turn: Turn,
    /// Whether an intelligence pickup was collected on arrival.
    pub picked_up: bool,
    /// Capability after the move.
    pub capability: f64,
}

/// The walker of a level.
///
/// Each intelligence pickup raises the capability by
/// `1 / grid.intelligence_count()`, so collecting all of them fills the meter.
/// A level without pickups leaves the meter at zero.
#[derive(Debug, Clone)]
pub struct Agent {
    position: Coord,
    heading: Direction,
    collected: HashSet<Coord>,
    pickups: usize,
}

impl Agent {
    /// Place a new agent on the source of `grid`, facing forward.
    pub fn new(grid: &Grid) -> Result<Self, AgentError> {
        let source = grid.source().ok_or(AgentError::NoSource)?;
        Ok(Self {
            position: source.coord(),
            heading: Direction::default(),
            collected: HashSet::new(),
            pickups: grid.intelligence_count(),
        })
    }

    #[inline]
    pub fn position(&self) -> Coord {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Number of pickups collected so far.
    #[inline]
    pub fn collected(&self) -> usize {
        self.collected.len()
    }

    /// Capability gained per pickup, zero on levels without pickups.
    pub fn gain_per_pickup(&self) -> f64 {
        if self.pickups == 0 {
            0.0
        } else {
            1.0 / self.pickups as f64
        }
    }

    /// Capability meter in `[0, 1]`. Each pickup counts once.
    pub fn capability(&self) -> f64 {
        self.collected.len() as f64 * self.gain_per_pickup()
    }

    /// Face `direction`, returning the rotation it took.
    pub fn turn_to(&mut self, direction: Direction) -> Turn {
        let turn = self.heading.turn_to(direction);
        self.heading = direction;
        turn
    }

    /// Move one cell to `to`, turning to face it first.
    pub fn step(&mut self, grid: &Grid, to: Coord) -> Result<Step, AgentError> {
        let from = self.position;
        let heading = Direction::between(from, to).ok_or(AgentError::NotAdjacent { from, to })?;
        let cell = grid
            .get(to)
            .filter(|c| c.kind().is_passable())
            .ok_or(AgentError::Blocked { at: to })?;

        let turn = self.turn_to(heading);
        self.position = to;
        let picked_up = cell.kind() == Kind::Intelligence && self.collected.insert(to);
        if picked_up {
            log::debug!(
                "picked up intelligence at {to}, capability {:.2}",
                self.capability()
            );
        }

        Ok(Step {
            from,
            to,
            heading,
            turn,
            picked_up,
            capability: self.capability(),
        })
    }

    /// Follow `path` from its first cell, which must be the agent's
    /// position. Returns one [`Step`] per move.
    ///
    /// On error the agent is left on the last cell it reached.
    pub fn walk(&mut self, grid: &Grid, path: &Path<'_>) -> Result<Vec<Step>, AgentError> {
        let mut coords = path.coords();
        let Some(start) = coords.next() else {
            return Ok(Vec::new());
        };
        if start != self.position {
            return Err(AgentError::WrongStart {
                start,
                at: self.position,
            });
        }
        let steps = coords
            .map(|to| self.step(grid, to))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "walked {} steps to {}, {}/{} pickups",
            steps.len(),
            self.position,
            self.collected(),
            self.pickups
        );
        Ok(steps)
    }

    /// Whether the agent stands on the level's target.
    pub fn at_target(&self, grid: &Grid) -> bool {
        grid.target().is_some_and(|t| t.coord() == self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use emag_paths::FindPath;

    #[test]
    fn starts_on_source_facing_forward() {
        let grid = Grid::parse("..\n.s\nt.").unwrap();
        let agent = Agent::new(&grid).unwrap();
        assert_eq!(agent.position(), Coord::new(1, 1));
        assert_eq!(agent.heading(), Direction::Forward);
        assert_eq!(agent.capability(), 0.0);
        assert!(!agent.at_target(&grid));
    }

    #[test]
    fn no_source() {
        let grid = Grid::parse("..t").unwrap();
        assert_eq!(Agent::new(&grid).unwrap_err(), AgentError::NoSource);
    }

    #[test]
    fn walk_collects_every_pickup() {
        let grid = Grid::parse("si.\noio\nt..").unwrap();
        assert_eq!(grid.intelligence_count(), 2);
        let path = grid.find_path().unwrap();
        // Only the central column connects the two rows.
        let route: Vec<Coord> = path.coords().collect();
        assert_eq!(
            route,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(2, 1),
                Coord::new(2, 0),
            ]
        );

        let mut agent = Agent::new(&grid).unwrap();
        assert_relative_eq!(agent.gain_per_pickup(), 0.5);
        let steps = agent.walk(&grid, &path).unwrap();
        assert_eq!(steps.len(), 4);

        assert_eq!(steps[0].heading, Direction::Right);
        assert_eq!(steps[0].turn, Turn::Right);
        assert!(steps[0].picked_up);
        assert_relative_eq!(steps[0].capability, 0.5);

        assert_eq!(steps[1].heading, Direction::Forward);
        assert_eq!(steps[1].turn, Turn::Left);
        assert!(steps[1].picked_up);
        assert_relative_eq!(steps[1].capability, 1.0);

        assert_eq!(steps[3].heading, Direction::Left);
        assert!(!steps[3].picked_up);

        assert_eq!(agent.collected(), 2);
        assert_relative_eq!(agent.capability(), 1.0);
        assert!(agent.at_target(&grid));
    }

    #[test]
    fn pickups_count_once() {
        let grid = Grid::parse("sit").unwrap();
        let mut agent = Agent::new(&grid).unwrap();
        assert!(agent.step(&grid, Coord::new(0, 1)).unwrap().picked_up);
        agent.step(&grid, Coord::new(0, 0)).unwrap();
        let again = agent.step(&grid, Coord::new(0, 1)).unwrap();
        assert!(!again.picked_up);
        assert_eq!(again.turn, Turn::Around);
        assert_relative_eq!(agent.capability(), 1.0);
    }

    #[test]
    fn refuses_bad_moves() {
        let grid = Grid::parse("so.\n..t").unwrap();
        let mut agent = Agent::new(&grid).unwrap();
        assert_eq!(
            agent.step(&grid, Coord::new(0, 1)).unwrap_err(),
            AgentError::Blocked { at: Coord::new(0, 1) }
        );
        assert_eq!(
            agent.step(&grid, Coord::new(1, 1)).unwrap_err(),
            AgentError::NotAdjacent {
                from: Coord::ZERO,
                to: Coord::new(1, 1),
            }
        );
        // Out of bounds.
        let g = Grid::parse("ts").unwrap();
        let mut corner = Agent::new(&g).unwrap();
        assert_eq!(
            corner.step(&g, Coord::new(0, 2)).unwrap_err(),
            AgentError::Blocked { at: Coord::new(0, 2) }
        );
        assert_eq!(agent.position(), Coord::ZERO);
        assert_eq!(agent.heading(), Direction::Forward);
    }

    #[test]
    fn walk_must_start_at_agent() {
        let grid = Grid::parse("s..t").unwrap();
        let path = grid.find_path().unwrap();
        let back = path.reversed();
        let mut agent = Agent::new(&grid).unwrap();
        assert_eq!(
            agent.walk(&grid, &back).unwrap_err(),
            AgentError::WrongStart {
                start: Coord::new(0, 3),
                at: Coord::ZERO,
            }
        );
    }

    #[test]
    fn level_without_pickups() {
        let grid = Grid::parse("s.t").unwrap();
        let mut agent = Agent::new(&grid).unwrap();
        let path = grid.find_path().unwrap();
        let steps = agent.walk(&grid, &path).unwrap();
        assert!(steps.iter().all(|s| !s.picked_up && s.capability == 0.0));
        assert!(agent.at_target(&grid));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn step_round_trip() {
        let step = Step {
            from: Coord::new(0, 0),
            to: Coord::new(0, 1),
            heading: Direction::Right,
            turn: Turn::Left,
            picked_up: true,
            capability: 0.5,
        };
        let json = serde_json::to_string(&step).unwrap();
        let back: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }
}
