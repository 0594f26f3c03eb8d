//! Worker tasks that back the runtime orchestration.
//!
//! The arena worker runs matches, the ranking worker owns the leaderboard.

mod arena;
mod ranking;

pub use arena::{ArenaCommand, ArenaWorker, simulate_match};
pub use ranking::{RankingCommand, RankingWorker};
