//! Async orchestration around the deterministic battle engine.
//!
//! This crate runs [`battle_core`] matches on a bounded blocking pool, owns the
//! leaderboard behind a single-writer worker, and broadcasts match events.
//! Consumers build a [`Runtime`] and talk to it through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`config`] loads [`RuntimeConfig`] from TOML
//! - [`logging`] installs the tracing subscriber
//! - [`tables`] shares the read-only skill and stat sheets
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod clock;
pub mod config;
pub mod logging;
pub mod runtime;
pub mod tables;

mod workers;

pub use api::{
    MatchEvent, MatchId, MatchReport, MatchRequest, Result, RuntimeError, RuntimeHandle,
};
pub use config::{ConfigError, RuntimeConfig};
pub use logging::{setup_logging, setup_logging_with};
pub use runtime::{Runtime, RuntimeBuilder};
pub use tables::BattleTables;
pub use workers::simulate_match;
