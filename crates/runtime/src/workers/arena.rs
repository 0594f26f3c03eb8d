//! Arena worker that runs battles off the async executor.
//!
//! Each match is simulated on the blocking pool; a semaphore caps how many
//! run at once. Matches share only the read-only tables.

use std::sync::Arc;

use tokio::sync::{Semaphore, broadcast, mpsc, oneshot};
use tokio::task::JoinSet;
use tracing::{debug, info, info_span, warn};

use battle_core::{BattleConfig, Simulator};

use crate::api::{MatchEvent, MatchId, MatchReport, MatchRequest, Result, RuntimeError};
use crate::tables::BattleTables;

/// Commands accepted by the arena worker.
pub enum ArenaCommand {
    Simulate {
        request: MatchRequest,
        reply: oneshot::Sender<Result<MatchReport>>,
    },
}

pub struct ArenaWorker {
    config: Arc<BattleConfig>,
    tables: BattleTables,
    permits: Arc<Semaphore>,
    command_rx: mpsc::Receiver<ArenaCommand>,
    events: broadcast::Sender<MatchEvent>,
    matches: JoinSet<()>,
}

impl ArenaWorker {
    pub fn new(
        config: BattleConfig,
        tables: BattleTables,
        max_concurrent_matches: usize,
        command_rx: mpsc::Receiver<ArenaCommand>,
        events: broadcast::Sender<MatchEvent>,
    ) -> Self {
        info!(
            skills = tables.skills().len(),
            stats = tables.stats().len(),
            max_concurrent_matches,
            "ArenaWorker initialized"
        );

        Self {
            config: Arc::new(config),
            tables,
            permits: Arc::new(Semaphore::new(max_concurrent_matches)),
            command_rx,
            events,
            matches: JoinSet::new(),
        }
    }

    /// Main worker loop. Returns once every handle is dropped and all
    /// in-flight matches have replied.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                Some(joined) = self.matches.join_next(), if !self.matches.is_empty() => {
                    if let Err(error) = joined {
                        warn!(%error, "match task ended abnormally");
                    }
                }
                else => break,
            }
        }

        while let Some(joined) = self.matches.join_next().await {
            if let Err(error) = joined {
                warn!(%error, "match task ended abnormally");
            }
        }
        debug!("ArenaWorker stopped");
    }

    fn handle_command(&mut self, cmd: ArenaCommand) {
        match cmd {
            ArenaCommand::Simulate { request, reply } => {
                let config = Arc::clone(&self.config);
                let tables = self.tables.clone();
                let permits = Arc::clone(&self.permits);
                let events = self.events.clone();

                self.matches.spawn(async move {
                    let id = request.id;
                    let result = Self::run_limited(config, tables, permits, request).await;
                    Self::publish(&events, id, &result);
                    if reply.send(result).is_err() {
                        debug!(%id, "Simulate reply channel closed (caller dropped)");
                    }
                });
            }
        }
    }

    async fn run_limited(
        config: Arc<BattleConfig>,
        tables: BattleTables,
        permits: Arc<Semaphore>,
        request: MatchRequest,
    ) -> Result<MatchReport> {
        let _permit = permits
            .acquire_owned()
            .await
            .map_err(|_| RuntimeError::LimiterClosed)?;

        tokio::task::spawn_blocking(move || simulate_match(&config, &tables, request))
            .await
            .map_err(RuntimeError::WorkerJoin)?
    }

    fn publish(
        events: &broadcast::Sender<MatchEvent>,
        id: MatchId,
        result: &Result<MatchReport>,
    ) {
        let event = match result {
            Ok(report) => MatchEvent::Finished {
                id,
                outcome: report.outcome(),
                turns: report.log.turns(),
                digest: report.digest_hex(),
            },
            Err(error) => MatchEvent::Rejected {
                id,
                reason: render_error(error),
            },
        };
        if events.send(event).is_err() {
            tracing::trace!(%id, "no match event subscribers");
        }
    }
}

/// Runs one battle to completion on the current thread.
pub fn simulate_match(
    config: &BattleConfig,
    tables: &BattleTables,
    request: MatchRequest,
) -> Result<MatchReport> {
    let span = info_span!("match", id = %request.id, seed = request.seed);
    let _entered = span.enter();

    let simulator = Simulator::new(
        config.clone(),
        tables.as_battle_env(),
        &request.rows,
        request.seed,
    )
    .inspect_err(|error| warn!(%error, "match setup rejected"))?;

    let log = simulator.run();
    let digest = log.digest()?;

    Ok(MatchReport {
        id: request.id,
        log,
        digest,
    })
}

fn render_error(error: &RuntimeError) -> String {
    match error {
        RuntimeError::Setup(setup) => setup.to_string(),
        other => other.to_string(),
    }
}
