//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration and workers.

pub mod errors;
pub mod events;
pub mod handle;
pub mod matches;

pub use errors::{Result, RuntimeError};
pub use events::MatchEvent;
pub use handle::RuntimeHandle;
pub use matches::{MatchId, MatchReport, MatchRequest};
