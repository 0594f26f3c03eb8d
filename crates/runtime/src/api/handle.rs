//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! running matches, feeding the leaderboard, and streaming match events.
use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::{AvatarId, OwnerId, RankingEntry, Timestamp, UpdateOutcome};

use super::errors::{Result, RuntimeError};
use super::events::MatchEvent;
use super::matches::{MatchReport, MatchRequest};
use crate::clock;
use crate::workers::{ArenaCommand, RankingCommand};

const ARENA: &str = "arena";
const RANKING: &str = "ranking";

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    arena_tx: mpsc::Sender<ArenaCommand>,
    ranking_tx: mpsc::Sender<RankingCommand>,
    events: broadcast::Sender<MatchEvent>,
}

impl RuntimeHandle {
    pub(crate) fn new(
        arena_tx: mpsc::Sender<ArenaCommand>,
        ranking_tx: mpsc::Sender<RankingCommand>,
        events: broadcast::Sender<MatchEvent>,
    ) -> Self {
        Self {
            arena_tx,
            ranking_tx,
            events,
        }
    }

    /// Run one match and wait for its report.
    pub async fn simulate(&self, request: MatchRequest) -> Result<MatchReport> {
        let reply_rx = self.submit(request).await?;
        Self::await_reply(ARENA, reply_rx).await?
    }

    /// Run several matches concurrently.
    ///
    /// Results are returned in request order; one rejected match does not
    /// affect the others.
    pub async fn simulate_batch(
        &self,
        requests: Vec<MatchRequest>,
    ) -> Result<Vec<Result<MatchReport>>> {
        let mut pending = Vec::with_capacity(requests.len());
        for request in requests {
            pending.push(self.submit(request).await?);
        }

        let mut reports = Vec::with_capacity(pending.len());
        for reply_rx in pending {
            reports.push(Self::await_reply(ARENA, reply_rx).await?);
        }
        Ok(reports)
    }

    /// Record an avatar snapshot on the leaderboard.
    pub async fn update_ranking(&self, snapshot: RankingEntry) -> Result<UpdateOutcome> {
        let (reply, reply_rx) = oneshot::channel();
        self.send_ranking(RankingCommand::Update { snapshot, reply })
            .await?;
        Self::await_reply(RANKING, reply_rx).await
    }

    /// Record progress stamped with the current wall-clock time.
    pub async fn record_progress(
        &self,
        owner: OwnerId,
        avatar: AvatarId,
        experience: u64,
    ) -> Result<UpdateOutcome> {
        self.update_ranking(RankingEntry::new(owner, avatar, experience, clock::now()))
            .await
    }

    pub async fn query_ranking(
        &self,
        limit: usize,
        as_of: Option<Timestamp>,
    ) -> Result<Vec<RankingEntry>> {
        let (reply, reply_rx) = oneshot::channel();
        self.send_ranking(RankingCommand::Query {
            limit,
            as_of,
            reply,
        })
        .await?;
        Self::await_reply(RANKING, reply_rx).await
    }

    /// Owner ids in leaderboard order.
    pub async fn ranked_owners(
        &self,
        limit: usize,
        as_of: Option<Timestamp>,
    ) -> Result<Vec<OwnerId>> {
        let (reply, reply_rx) = oneshot::channel();
        self.send_ranking(RankingCommand::Owners {
            limit,
            as_of,
            reply,
        })
        .await?;
        Self::await_reply(RANKING, reply_rx).await
    }

    pub async fn ranking_entry(&self, owner: OwnerId) -> Result<Option<RankingEntry>> {
        let (reply, reply_rx) = oneshot::channel();
        self.send_ranking(RankingCommand::Get { owner, reply })
            .await?;
        Self::await_reply(RANKING, reply_rx).await
    }

    /// Subscribe to match events.
    ///
    /// Only events published after subscribing are received.
    pub fn subscribe(&self) -> broadcast::Receiver<MatchEvent> {
        self.events.subscribe()
    }

    async fn submit(
        &self,
        request: MatchRequest,
    ) -> Result<oneshot::Receiver<Result<MatchReport>>> {
        let (reply, reply_rx) = oneshot::channel();
        self.arena_tx
            .send(ArenaCommand::Simulate { request, reply })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed { worker: ARENA })?;
        Ok(reply_rx)
    }

    async fn send_ranking(&self, cmd: RankingCommand) -> Result<()> {
        self.ranking_tx
            .send(cmd)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed { worker: RANKING })
    }

    async fn await_reply<T>(worker: &'static str, reply_rx: oneshot::Receiver<T>) -> Result<T> {
        reply_rx
            .await
            .map_err(|source| RuntimeError::ReplyChannelClosed { worker, source })
    }
}
