use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use super::RankingError;
use super::entry::{RankKey, RankingEntry};
use super::ids::{OwnerId, Timestamp};

/// Outcome of [`RankingBoard::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Inserted,
    Replaced,
    /// The incoming snapshot was older than the retained one.
    Stale,
}

impl UpdateOutcome {
    pub const fn is_applied(self) -> bool {
        !matches!(self, Self::Stale)
    }
}

/// Latest-per-owner leaderboard.
///
/// Entries are indexed twice: by owner for deduplication and by rank key for
/// ordered queries. Both indexes change together in [`RankingBoard::update`].
#[derive(Clone, Debug, Default)]
pub struct RankingBoard {
    by_owner: BTreeMap<OwnerId, RankingEntry>,
    ordered: BTreeSet<RankKey>,
}

impl RankingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a snapshot, keeping at most one entry per owner.
    ///
    /// An existing entry is replaced unless the snapshot is older than it;
    /// equal timestamps let the newer call win.
    pub fn update(&mut self, snapshot: RankingEntry) -> UpdateOutcome {
        let outcome = match self.by_owner.get(&snapshot.owner) {
            Some(current) if snapshot.updated_at < current.updated_at => {
                return UpdateOutcome::Stale;
            }
            Some(current) => {
                self.ordered.remove(&current.rank_key());
                UpdateOutcome::Replaced
            }
            None => UpdateOutcome::Inserted,
        };

        self.ordered.insert(snapshot.rank_key());
        self.by_owner.insert(snapshot.owner, snapshot);
        outcome
    }

    /// Up to `limit` entries in leaderboard order, skipping entries updated
    /// after `as_of` when given.
    pub fn query(&self, limit: usize, as_of: Option<Timestamp>) -> Vec<RankingEntry> {
        self.ranked(as_of).take(limit).cloned().collect()
    }

    /// Owner ids in the same order as [`RankingBoard::query`].
    pub fn owners(&self, limit: usize, as_of: Option<Timestamp>) -> Vec<OwnerId> {
        self.ranked(as_of)
            .take(limit)
            .map(|entry| entry.owner)
            .collect()
    }

    pub fn get(&self, owner: &OwnerId) -> Option<&RankingEntry> {
        self.by_owner.get(owner)
    }

    pub fn len(&self) -> usize {
        self.by_owner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_owner.is_empty()
    }

    fn ranked(&self, as_of: Option<Timestamp>) -> impl Iterator<Item = &RankingEntry> {
        self.ordered
            .iter()
            .filter(move |(_, updated_at, _)| as_of.is_none_or(|limit| *updated_at <= limit))
            .filter_map(|(_, _, owner)| self.by_owner.get(owner))
    }
}

/// Thread-safe handle to a [`RankingBoard`].
///
/// Writers hold the lock for the whole update, so readers never observe a
/// half-applied replacement.
#[derive(Clone, Debug, Default)]
pub struct SharedRankingBoard {
    inner: Arc<RwLock<RankingBoard>>,
}

impl SharedRankingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_board(board: RankingBoard) -> Self {
        Self {
            inner: Arc::new(RwLock::new(board)),
        }
    }

    pub fn update(&self, snapshot: RankingEntry) -> Result<UpdateOutcome, RankingError> {
        let mut board = self
            .inner
            .write()
            .map_err(|_| RankingError::LockPoisoned)?;
        Ok(board.update(snapshot))
    }

    pub fn query(
        &self,
        limit: usize,
        as_of: Option<Timestamp>,
    ) -> Result<Vec<RankingEntry>, RankingError> {
        let board = self.inner.read().map_err(|_| RankingError::LockPoisoned)?;
        Ok(board.query(limit, as_of))
    }

    pub fn owners(
        &self,
        limit: usize,
        as_of: Option<Timestamp>,
    ) -> Result<Vec<OwnerId>, RankingError> {
        let board = self.inner.read().map_err(|_| RankingError::LockPoisoned)?;
        Ok(board.owners(limit, as_of))
    }

    pub fn get(&self, owner: &OwnerId) -> Result<Option<RankingEntry>, RankingError> {
        let board = self.inner.read().map_err(|_| RankingError::LockPoisoned)?;
        Ok(board.get(owner).cloned())
    }

    pub fn len(&self) -> Result<usize, RankingError> {
        let board = self.inner.read().map_err(|_| RankingError::LockPoisoned)?;
        Ok(board.len())
    }
}
