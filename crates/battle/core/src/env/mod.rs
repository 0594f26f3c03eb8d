mod roster;
mod skills;
mod stats;

pub use roster::{CombatantRow, SkillSlotRow};
pub use skills::{SkillOracle, SkillRow, SkillSheet};
pub use stats::{StatOracle, StatRow, StatRowId, StatSheet};

/// Aggregates the read-only tables a battle is set up from.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, S, T>
where
    S: SkillOracle + ?Sized,
    T: StatOracle + ?Sized,
{
    skills: Option<&'a S>,
    stats: Option<&'a T>,
}

pub type BattleEnv<'a> = Env<'a, dyn SkillOracle + 'a, dyn StatOracle + 'a>;

impl<'a, S, T> Env<'a, S, T>
where
    S: SkillOracle + ?Sized,
    T: StatOracle + ?Sized,
{
    pub fn new(skills: Option<&'a S>, stats: Option<&'a T>) -> Self {
        Self { skills, stats }
    }

    pub fn with_all(skills: &'a S, stats: &'a T) -> Self {
        Self::new(Some(skills), Some(stats))
    }

    pub fn empty() -> Self {
        Self {
            skills: None,
            stats: None,
        }
    }

    pub fn skills(&self) -> Option<&'a S> {
        self.skills
    }

    pub fn stats(&self) -> Option<&'a T> {
        self.stats
    }
}

impl<'a, S, T> Env<'a, S, T>
where
    S: SkillOracle + 'a,
    T: StatOracle + 'a,
{
    pub fn into_battle_env(self) -> BattleEnv<'a> {
        let skills: Option<&'a dyn SkillOracle> = self.skills.map(|skills| skills as _);
        let stats: Option<&'a dyn StatOracle> = self.stats.map(|stats| stats as _);
        Env::new(skills, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{Skill, SkillCategory, SkillId};
    use crate::elemental::ElementalType;
    use crate::stats::BaseStats;

    #[test]
    fn env_exposes_backing_sheets() {
        let skills: SkillSheet = [Skill::new(
            SkillId(100000),
            SkillCategory::NormalAttack,
            0,
            ElementalType::Normal,
            1,
        )]
        .into_iter()
        .collect();
        let stats: StatSheet = [StatRow::new(StatRowId(1), BaseStats::default())]
            .into_iter()
            .collect();

        let env = Env::with_all(&skills, &stats).into_battle_env();

        let skill_oracle = env.skills().expect("skill oracle should be available");
        assert!(skill_oracle.skill(SkillId(100000)).is_some());
        assert!(skill_oracle.skill(SkillId(1)).is_none());
        assert_eq!(skill_oracle.all_skills().len(), 1);
        assert_eq!(
            env.stats()
                .expect("stat oracle should be available")
                .stats(StatRowId(1)),
            Some(BaseStats::default())
        );
    }

    #[test]
    fn empty_env_has_no_oracles() {
        let env = BattleEnv::empty();
        assert!(env.skills().is_none());
        assert!(env.stats().is_none());
    }
}
