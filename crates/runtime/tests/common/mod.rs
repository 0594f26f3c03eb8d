use battle_core::{
    BaseStats, CombatantId, CombatantRow, ElementalType, Side, Skill, SkillCategory, SkillId,
    SkillSheet, StatRow, StatRowId, StatSheet,
};
use battle_runtime::{BattleTables, MatchId, MatchRequest};

pub const KNIGHT: StatRowId = StatRowId(1);
pub const GOBLIN: StatRowId = StatRowId(2);

pub const CLEAVE: SkillId = SkillId(100003);
pub const SMITE: SkillId = SkillId(100001);

pub fn tables() -> BattleTables {
    let skills: SkillSheet = [
        Skill::new(SMITE, SkillCategory::BlowAttack, 12, ElementalType::Land, 1),
        Skill::new(CLEAVE, SkillCategory::AreaAttack, 4, ElementalType::Normal, 2),
    ]
    .into_iter()
    .collect();
    let stats: StatSheet = [
        StatRow::new(KNIGHT, BaseStats::new(180, 22, 3, 11, 15)),
        StatRow::new(GOBLIN, BaseStats::new(90, 12, 1, 9, 5)),
    ]
    .into_iter()
    .collect();
    BattleTables::new(skills, stats)
}

pub fn request(id: u64, seed: u64) -> MatchRequest {
    let rows = vec![
        CombatantRow::new(CombatantId(1), Side::Ally, KNIGHT, ElementalType::Land)
            .with_skill(SMITE, 35)
            .with_skill(CLEAVE, 20),
        CombatantRow::new(CombatantId(2), Side::Enemy, GOBLIN, ElementalType::Water),
        CombatantRow::new(CombatantId(3), Side::Enemy, GOBLIN, ElementalType::Wind)
            .with_skill(CLEAVE, 10),
    ];
    MatchRequest::new(MatchId(id), rows, seed)
}

/// A request whose roster has nobody on the enemy side.
pub fn one_sided_request(id: u64) -> MatchRequest {
    let rows = vec![CombatantRow::new(
        CombatantId(1),
        Side::Ally,
        KNIGHT,
        ElementalType::Fire,
    )];
    MatchRequest::new(MatchId(id), rows, 0)
}
