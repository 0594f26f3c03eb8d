//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, battle setup, and the ranking
//! board so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use battle_core::{LogError, RankingError, SetupError};

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{worker} worker command channel closed")]
    CommandChannelClosed { worker: &'static str },

    #[error("{worker} worker reply channel closed")]
    ReplyChannelClosed {
        worker: &'static str,
        #[source]
        source: oneshot::error::RecvError,
    },

    #[error("worker task join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("match concurrency limiter was closed")]
    LimiterClosed,

    #[error("battle setup rejected")]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error(transparent)]
    Ranking(#[from] RankingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
