//! The agent that walks a solved Emag level.
//!
//! An [`Agent`] starts on the level's source facing [`Direction::Forward`],
//! turns to face each move, and fills its capability meter as it collects
//! intelligence pickups. Replaying a [`Path`](emag_paths::Path) yields one
//! [`Step`] per move for a presentation layer to animate.

pub mod agent;
pub mod direction;

pub use agent::{Agent, AgentError, Step};
pub use direction::{Direction, Turn};
