//! Shared read-only battle tables.

use std::sync::Arc;

use battle_core::{BattleEnv, Env, SkillSheet, StatSheet};

/// Skill and stat sheets shared by every match.
///
/// Cloning is cheap; the sheets are never mutated once the runtime starts.
#[derive(Clone, Debug, Default)]
pub struct BattleTables {
    skills: Arc<SkillSheet>,
    stats: Arc<StatSheet>,
}

impl BattleTables {
    pub fn new(skills: SkillSheet, stats: StatSheet) -> Self {
        Self {
            skills: Arc::new(skills),
            stats: Arc::new(stats),
        }
    }

    pub fn skills(&self) -> &SkillSheet {
        &self.skills
    }

    pub fn stats(&self) -> &StatSheet {
        &self.stats
    }

    /// Converts the sheets into the core crate's environment.
    pub fn as_battle_env(&self) -> BattleEnv<'_> {
        Env::with_all(self.skills.as_ref(), self.stats.as_ref()).into_battle_env()
    }
}
