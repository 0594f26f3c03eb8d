use std::cmp::Reverse;

use super::ids::{AvatarId, OwnerId, Timestamp};

/// Latest known progress of an owner's avatar.
///
/// The same type is fed to [`RankingBoard::update`](super::RankingBoard::update)
/// as a snapshot and returned from queries as a retained entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingEntry {
    pub owner: OwnerId,
    pub avatar: AvatarId,
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub updated_at: Timestamp,
}

pub type AvatarSnapshot = RankingEntry;

impl RankingEntry {
    pub fn new(owner: OwnerId, avatar: AvatarId, experience: u64, updated_at: Timestamp) -> Self {
        Self {
            owner,
            avatar,
            name: String::new(),
            level: 1,
            experience,
            updated_at,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Leaderboard order: experience descending, then older snapshots first,
    /// then owner id.
    pub(super) fn rank_key(&self) -> RankKey {
        (Reverse(self.experience), self.updated_at, self.owner)
    }
}

pub(super) type RankKey = (Reverse<u64>, Timestamp, OwnerId);
