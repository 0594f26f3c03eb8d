//! High-level runtime orchestrator.
//!
//! The runtime owns background workers, wires up command/event channels, and
//! exposes a builder-based API for clients to run matches.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use battle_core::RankingBoard;

use crate::api::{MatchEvent, Result, RuntimeError, RuntimeHandle};
use crate::config::RuntimeConfig;
use crate::tables::BattleTables;
use crate::workers::{ArenaCommand, ArenaWorker, RankingCommand, RankingWorker};

/// Main runtime that orchestrates battle simulation
///
/// Runtime owns the workers; [`RuntimeHandle`] is the cloneable façade for
/// clients.
pub struct Runtime {
    handle: RuntimeHandle,
    arena_worker_handle: JoinHandle<()>,
    ranking_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to match events
    pub fn subscribe_events(&self) -> broadcast::Receiver<MatchEvent> {
        self.handle.subscribe()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Workers stop once every outstanding handle clone is dropped; in-flight
    /// matches still complete.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.arena_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;
        self.ranking_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    tables: BattleTables,
    board: Option<RankingBoard>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            tables: BattleTables::default(),
            board: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the skill and stat tables every match is resolved against
    pub fn tables(mut self, tables: BattleTables) -> Self {
        self.tables = tables;
        self
    }

    /// Seed the leaderboard (defaults to empty)
    pub fn ranking_board(mut self, board: RankingBoard) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the runtime and spawn its workers
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        self.config.validate()?;

        let (arena_tx, arena_rx) = mpsc::channel::<ArenaCommand>(self.config.command_buffer_size);
        let (ranking_tx, ranking_rx) =
            mpsc::channel::<RankingCommand>(self.config.command_buffer_size);
        let (event_tx, _event_rx) = broadcast::channel::<MatchEvent>(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(arena_tx, ranking_tx, event_tx.clone());

        tracing::info!(
            max_concurrent_matches = self.config.max_concurrent_matches,
            max_turns = self.config.battle.max_turns,
            "runtime starting"
        );

        let arena_worker = ArenaWorker::new(
            self.config.battle,
            self.tables,
            self.config.max_concurrent_matches,
            arena_rx,
            event_tx,
        );
        let arena_worker_handle = tokio::spawn(async move {
            arena_worker.run().await;
        });

        let ranking_worker = RankingWorker::new(self.board.unwrap_or_default(), ranking_rx);
        let ranking_worker_handle = tokio::spawn(async move {
            ranking_worker.run().await;
        });

        Ok(Runtime {
            handle,
            arena_worker_handle,
            ranking_worker_handle,
        })
    }
}
