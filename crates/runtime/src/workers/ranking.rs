//! Ranking worker: the single writer of the leaderboard.
//!
//! Updates and queries are processed one at a time in arrival order, so a
//! query never observes a half-applied update.

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use battle_core::{OwnerId, RankingBoard, RankingEntry, Timestamp, UpdateOutcome};

pub enum RankingCommand {
    Update {
        snapshot: RankingEntry,
        reply: oneshot::Sender<UpdateOutcome>,
    },
    Query {
        limit: usize,
        as_of: Option<Timestamp>,
        reply: oneshot::Sender<Vec<RankingEntry>>,
    },
    Owners {
        limit: usize,
        as_of: Option<Timestamp>,
        reply: oneshot::Sender<Vec<OwnerId>>,
    },
    Get {
        owner: OwnerId,
        reply: oneshot::Sender<Option<RankingEntry>>,
    },
}

pub struct RankingWorker {
    board: RankingBoard,
    command_rx: mpsc::Receiver<RankingCommand>,
}

impl RankingWorker {
    pub fn new(board: RankingBoard, command_rx: mpsc::Receiver<RankingCommand>) -> Self {
        Self { board, command_rx }
    }

    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(entries = self.board.len(), "RankingWorker stopped");
    }

    fn handle_command(&mut self, cmd: RankingCommand) {
        match cmd {
            RankingCommand::Update { snapshot, reply } => {
                let owner = snapshot.owner;
                let outcome = self.board.update(snapshot);
                debug!(%owner, ?outcome, "ranking snapshot received");
                if reply.send(outcome).is_err() {
                    debug!("Update reply channel closed (caller dropped)");
                }
            }
            RankingCommand::Query {
                limit,
                as_of,
                reply,
            } => {
                if reply.send(self.board.query(limit, as_of)).is_err() {
                    debug!("Query reply channel closed (caller dropped)");
                }
            }
            RankingCommand::Owners {
                limit,
                as_of,
                reply,
            } => {
                if reply.send(self.board.owners(limit, as_of)).is_err() {
                    debug!("Owners reply channel closed (caller dropped)");
                }
            }
            RankingCommand::Get { owner, reply } => {
                if reply.send(self.board.get(&owner).cloned()).is_err() {
                    debug!("Get reply channel closed (caller dropped)");
                }
            }
        }
    }
}
