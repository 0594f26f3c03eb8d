use battle_core::{
    BaseStats, BattleConfig, BattleEvent, BattleWarning, CombatantId, CombatantRow, ElementalType,
    Env, Outcome, Phase, RosterIssue, SetupError, Side, Simulator, Skill, SkillCategory, SkillId,
    SkillSheet, StatRow, StatRowId, StatSheet, TargetRule,
};

const WARRIOR: StatRowId = StatRowId(1);
const SLIME: StatRowId = StatRowId(2);
const CLERIC: StatRowId = StatRowId(3);
const PACIFIST: StatRowId = StatRowId(4);

const BLOW: SkillId = SkillId(100001);
const DOUBLE: SkillId = SkillId(100002);
const AREA: SkillId = SkillId(100003);
const HEAL: SkillId = SkillId(200000);

fn skill_sheet() -> SkillSheet {
    [
        Skill::new(BLOW, SkillCategory::BlowAttack, 15, ElementalType::Fire, 1),
        Skill::new(DOUBLE, SkillCategory::DoubleAttack, 5, ElementalType::Normal, 2),
        Skill::new(AREA, SkillCategory::AreaAttack, 3, ElementalType::Water, 3),
        Skill::new(HEAL, SkillCategory::Heal, 0, ElementalType::Normal, 1)
            .with_target(TargetRule::SelfOnly),
    ]
    .into_iter()
    .collect()
}

fn stat_sheet() -> StatSheet {
    [
        StatRow::new(WARRIOR, BaseStats::new(200, 25, 4, 12, 20)),
        StatRow::new(SLIME, BaseStats::new(120, 14, 2, 8, 10)),
        StatRow::new(CLERIC, BaseStats::new(500, 30, 0, 10, 0)),
        StatRow::new(PACIFIST, BaseStats::new(100, 0, 0, 10, 0)),
    ]
    .into_iter()
    .collect()
}

fn skirmish() -> Vec<CombatantRow> {
    vec![
        CombatantRow::new(CombatantId(1), Side::Ally, WARRIOR, ElementalType::Fire)
            .with_skill(BLOW, 40)
            .with_skill(DOUBLE, 30),
        CombatantRow::new(CombatantId(2), Side::Ally, WARRIOR, ElementalType::Land)
            .with_skill(AREA, 50),
        CombatantRow::new(CombatantId(10), Side::Enemy, SLIME, ElementalType::Wind),
        CombatantRow::new(CombatantId(11), Side::Enemy, SLIME, ElementalType::Water)
            .with_skill(AREA, 25),
        CombatantRow::new(CombatantId(12), Side::Enemy, SLIME, ElementalType::Normal),
    ]
}

#[test]
fn same_inputs_give_identical_logs() {
    let skills = skill_sheet();
    let stats = stat_sheet();
    let rows = skirmish();

    let run = |seed| {
        let env = Env::with_all(&skills, &stats).into_battle_env();
        Simulator::new(BattleConfig::default(), env, &rows, seed)
            .expect("valid setup")
            .run()
    };

    let first = run(0xC0FFEE);
    let second = run(0xC0FFEE);
    assert_eq!(first, second);
    assert_eq!(first.to_bytes().unwrap(), second.to_bytes().unwrap());
    assert_eq!(first.digest().unwrap(), second.digest().unwrap());

    let other = run(0xBEEF);
    assert_ne!(first.digest().unwrap(), other.digest().unwrap());
}

#[test]
fn battle_reaches_an_outcome() {
    let skills = skill_sheet();
    let stats = stat_sheet();
    let env = Env::with_all(&skills, &stats).into_battle_env();

    let log = Simulator::new(BattleConfig::default(), env, &skirmish(), 42)
        .unwrap()
        .run();

    assert!(log.turns() > 0);
    assert!(log.turns() <= BattleConfig::DEFAULT_MAX_TURNS);
    assert!(log.skill_uses().count() > 0);
    if log.warnings().is_empty() {
        assert_ne!(log.outcome(), Outcome::Draw);
    }
    assert!(matches!(
        log.events().first(),
        Some(BattleEvent::RoundStarted { round: 1, .. })
    ));
}

#[test]
fn healers_hit_the_turn_ceiling() {
    let skills = skill_sheet();
    let stats = stat_sheet();
    let env = Env::with_all(&skills, &stats).into_battle_env();
    let rows = vec![
        CombatantRow::new(CombatantId(1), Side::Ally, CLERIC, ElementalType::Normal)
            .with_skill(HEAL, 100),
        CombatantRow::new(CombatantId(2), Side::Enemy, CLERIC, ElementalType::Normal)
            .with_skill(HEAL, 100),
    ];
    let config = BattleConfig::default().with_max_turns(50);

    let log = Simulator::new(config, env, &rows, 7).unwrap().run();

    assert_eq!(log.outcome(), Outcome::Draw);
    assert_eq!(log.turns(), 50);
    assert_eq!(
        log.warnings(),
        &[BattleWarning::TurnLimitExceeded { limit: 50 }]
    );
    assert!(
        log.skill_uses()
            .all(|used| used.category == SkillCategory::Heal)
    );
}

#[test]
fn harmless_fighters_draw_at_default_ceiling() {
    let skills = skill_sheet();
    let stats = stat_sheet();
    let env = Env::with_all(&skills, &stats).into_battle_env();
    let rows = vec![
        CombatantRow::new(CombatantId(1), Side::Ally, PACIFIST, ElementalType::Fire),
        CombatantRow::new(CombatantId(2), Side::Enemy, PACIFIST, ElementalType::Wind),
    ];

    let log = Simulator::new(BattleConfig::default(), env, &rows, 11)
        .unwrap()
        .run();

    assert_eq!(log.outcome(), Outcome::Draw);
    assert_eq!(log.turns(), BattleConfig::DEFAULT_MAX_TURNS);
    assert_eq!(
        log.warnings(),
        &[BattleWarning::TurnLimitExceeded {
            limit: BattleConfig::DEFAULT_MAX_TURNS
        }]
    );
    assert!(log.skill_uses().all(|used| used.total_effect() == 0));
    assert!(
        log.skill_uses()
            .flat_map(|used| &used.infos)
            .all(|info| info.applied_status.is_none())
    );
}

#[test]
fn missing_skill_row_fails_setup() {
    let skills = skill_sheet();
    let stats = stat_sheet();
    let env = Env::with_all(&skills, &stats).into_battle_env();
    let rows = vec![
        CombatantRow::new(CombatantId(1), Side::Ally, WARRIOR, ElementalType::Fire)
            .with_skill(SkillId(999), 10),
        CombatantRow::new(CombatantId(2), Side::Enemy, SLIME, ElementalType::Fire),
    ];

    let err = Simulator::new(BattleConfig::default(), env, &rows, 1)
        .err()
        .expect("unknown skill id");
    assert_eq!(
        err,
        SetupError::ConfigNotFound {
            table: "skill",
            id: 999
        }
    );
}

#[test]
fn missing_stat_row_fails_setup() {
    let skills = skill_sheet();
    let stats = stat_sheet();
    let env = Env::with_all(&skills, &stats).into_battle_env();
    let rows = vec![
        CombatantRow::new(CombatantId(1), Side::Ally, StatRowId(77), ElementalType::Fire),
        CombatantRow::new(CombatantId(2), Side::Enemy, SLIME, ElementalType::Fire),
    ];

    let err = Simulator::new(BattleConfig::default(), env, &rows, 1)
        .err()
        .expect("unknown stat row");
    assert_eq!(err, SetupError::ConfigNotFound { table: "stat", id: 77 });
}

#[test]
fn malformed_rosters_are_rejected() {
    let skills = skill_sheet();
    let stats = stat_sheet();

    let env = Env::with_all(&skills, &stats).into_battle_env();
    let err = Simulator::new(BattleConfig::default(), env, &[], 1).err().unwrap();
    assert_eq!(err, SetupError::InvalidRoster(RosterIssue::Empty));

    let env = Env::with_all(&skills, &stats).into_battle_env();
    let duplicated = vec![
        CombatantRow::new(CombatantId(1), Side::Ally, WARRIOR, ElementalType::Fire),
        CombatantRow::new(CombatantId(1), Side::Enemy, SLIME, ElementalType::Fire),
    ];
    let err = Simulator::new(BattleConfig::default(), env, &duplicated, 1)
        .err()
        .unwrap();
    assert_eq!(
        err,
        SetupError::InvalidRoster(RosterIssue::DuplicateId(CombatantId(1)))
    );

    let env = Env::with_all(&skills, &stats).into_battle_env();
    let knocked_out = vec![
        CombatantRow::new(CombatantId(1), Side::Ally, WARRIOR, ElementalType::Fire),
        CombatantRow::new(CombatantId(2), Side::Enemy, SLIME, ElementalType::Fire)
            .with_current_hp(0),
    ];
    let err = Simulator::new(BattleConfig::default(), env, &knocked_out, 1)
        .err()
        .unwrap();
    assert_eq!(
        err,
        SetupError::InvalidRoster(RosterIssue::MissingSide(Side::Enemy))
    );
}

#[test]
fn stepping_matches_running() {
    let skills = skill_sheet();
    let stats = stat_sheet();
    let rows = skirmish();

    let env = Env::with_all(&skills, &stats).into_battle_env();
    let mut stepped = Simulator::new(BattleConfig::default(), env, &rows, 99).unwrap();
    assert_eq!(stepped.phase(), Phase::Idle);
    while stepped.step() != Phase::Finished {}
    let stepped = stepped.run();

    let env = Env::with_all(&skills, &stats).into_battle_env();
    let ran = Simulator::new(BattleConfig::default(), env, &rows, 99)
        .unwrap()
        .run();

    assert_eq!(stepped, ran);
}
