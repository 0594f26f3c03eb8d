//! Turn scheduler and battle driver.
//!
//! A battle proceeds in rounds. At the start of each round the standing
//! combatants are ordered by descending effective speed (ties keep roster
//! order). Each of them then takes one turn unless they fell earlier in the
//! round. After every turn the acting combatant's status effects tick and the
//! terminal condition is checked.
mod errors;
mod select;
mod setup;

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::combat::{Skill, SkillUseResult, use_skill};
use crate::config::BattleConfig;
use crate::env::{BattleEnv, CombatantRow};
use crate::error::GameError;
use crate::log::{BattleEvent, BattleLog, BattleLogBuilder, BattleWarning, Outcome};
use crate::rng::{PcgRng, RandomSource};
use crate::state::{CombatantIndex, Restrictions, Roster, Side, StatusEffectKind};

pub use errors::{RosterIssue, SetupError};
pub use select::select_skill;
pub use setup::{build_roster, validate_roster};

/// Lifecycle of a [`Simulator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    /// Set up and validated; no turn taken yet.
    Idle,
    Running,
    /// An outcome is known; further steps do nothing.
    Finished,
}

/// Drives one battle from setup to a finished [`BattleLog`].
///
/// All randomness comes from the owned source, so the same tables, roster
/// and seed always produce the same log.
pub struct Simulator<R: RandomSource = PcgRng> {
    config: BattleConfig,
    roster: Roster,
    rng: R,
    log: BattleLogBuilder,
    queue: VecDeque<CombatantIndex>,
    round: u32,
    turns: u32,
    started: bool,
    outcome: Option<Outcome>,
    warnings: Vec<BattleWarning>,
}

impl Simulator<PcgRng> {
    /// Builds a battle from setup rows, seeding a [`PcgRng`] with `seed`.
    pub fn new(
        config: BattleConfig,
        env: BattleEnv<'_>,
        rows: &[CombatantRow],
        seed: u64,
    ) -> Result<Self, SetupError> {
        let roster = build_roster(env, rows)?;
        Self::from_roster(config, roster, PcgRng::new(seed), seed)
    }
}

impl<R: RandomSource> Simulator<R> {
    /// Builds a battle from a ready roster and an explicit random source.
    ///
    /// `seed` is only recorded in the log.
    pub fn from_roster(
        config: BattleConfig,
        roster: Roster,
        rng: R,
        seed: u64,
    ) -> Result<Self, SetupError> {
        validate_roster(&roster)?;
        Ok(Self {
            config,
            roster,
            rng,
            log: BattleLogBuilder::new(seed),
            queue: VecDeque::new(),
            round: 0,
            turns: 0,
            started: false,
            outcome: None,
            warnings: Vec::new(),
        })
    }

    pub fn phase(&self) -> Phase {
        if self.outcome.is_some() {
            Phase::Finished
        } else if self.started {
            Phase::Running
        } else {
            Phase::Idle
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[BattleEvent] {
        self.log.events()
    }

    /// Advances the battle by one combatant turn and returns the new phase.
    pub fn step(&mut self) -> Phase {
        if self.outcome.is_some() {
            return Phase::Finished;
        }

        if !self.started {
            self.started = true;
            info!(
                combatants = self.roster.len(),
                seed = self.log.seed(),
                "battle started"
            );
        }

        if let Some(outcome) = self.terminal_outcome() {
            self.finish(outcome);
            return Phase::Finished;
        }

        if self.turns >= self.config.max_turns {
            warn!(limit = self.config.max_turns, "turn limit reached, forcing draw");
            self.warnings.push(BattleWarning::TurnLimitExceeded {
                limit: self.config.max_turns,
            });
            self.finish(Outcome::Draw);
            return Phase::Finished;
        }

        if let Some(actor) = self.next_actor() {
            self.take_turn(actor);
            self.turns += 1;
        }

        if let Some(outcome) = self.terminal_outcome() {
            self.finish(outcome);
        }

        self.phase()
    }

    /// Runs the battle to completion and returns its log.
    pub fn run(mut self) -> BattleLog {
        let outcome = loop {
            if let Some(outcome) = self.outcome {
                break outcome;
            }
            self.step();
        };
        self.log.finish(outcome, self.turns, self.warnings)
    }

    fn terminal_outcome(&self) -> Option<Outcome> {
        Outcome::from_survivors(
            !self.roster.is_defeated(Side::Ally),
            !self.roster.is_defeated(Side::Enemy),
        )
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, turns = self.turns, rounds = self.round, "battle finished");
        self.outcome = Some(outcome);
    }

    /// Next standing combatant of the current round, starting a new round
    /// when the current one is exhausted.
    fn next_actor(&mut self) -> Option<CombatantIndex> {
        loop {
            while let Some(index) = self.queue.pop_front() {
                if self.roster[index].is_active() {
                    return Some(index);
                }
            }

            let order = self.roster.turn_order();
            if order.is_empty() {
                return None;
            }
            self.round += 1;
            debug!(round = self.round, "round started");
            self.log.append(BattleEvent::RoundStarted {
                round: self.round,
                order: order.iter().map(|index| self.roster[*index].id).collect(),
            });
            self.queue.extend(order);
        }
    }

    fn take_turn(&mut self, actor: CombatantIndex) {
        let combatant = &self.roster[actor];
        let actor_id = combatant.id;
        let restrictions = combatant.status.restrictions();

        if restrictions.contains(Restrictions::SKIP_TURN) {
            let cause = if combatant.status.has(StatusEffectKind::Stun) {
                StatusEffectKind::Stun
            } else {
                StatusEffectKind::Airborne
            };
            debug!(combatant = %actor_id, %cause, "turn skipped");
            self.log.append(BattleEvent::TurnSkipped {
                combatant: actor_id,
                cause,
            });
        } else {
            let skill = if restrictions.contains(Restrictions::NO_SKILLS) {
                Skill::default_attack(combatant.elemental)
            } else {
                select_skill(combatant, &mut self.rng)
            };
            let candidates = self
                .roster
                .live_on(skill.target.candidate_side(combatant.side));
            let standing: Vec<bool> = self.roster.iter().map(|(_, c)| c.is_active()).collect();

            match use_skill(
                &skill,
                actor,
                &candidates,
                &mut self.roster,
                &mut self.rng,
                &self.config,
            ) {
                Ok(result) => {
                    debug!(
                        caster = %actor_id,
                        skill = %skill.id,
                        category = %skill.category,
                        hits = result.infos.len(),
                        total = result.total_effect(),
                        "skill used"
                    );
                    self.log.append(BattleEvent::SkillUsed(result));
                    self.record_faints(&standing);
                }
                Err(error) => {
                    warn!(%error, code = error.error_code(), "skill fizzled");
                    self.log.append(BattleEvent::SkillUsed(SkillUseResult::empty(
                        actor_id,
                        skill.id,
                        skill.category,
                    )));
                }
            }
        }

        let tick = self.roster[actor].tick_status();
        if tick.damage_taken > 0 {
            self.log.append(BattleEvent::StatusTick {
                combatant: actor_id,
                damage: tick.damage_taken,
            });
        }
        for kind in tick.expired {
            self.log.append(BattleEvent::StatusExpired {
                combatant: actor_id,
                kind,
            });
        }
        if tick.fainted {
            debug!(combatant = %actor_id, "fainted from status damage");
            self.log.append(BattleEvent::Fainted {
                combatant: actor_id,
            });
        }
    }

    /// Logs everyone who was standing before the skill and is down now.
    fn record_faints(&mut self, standing: &[bool]) {
        let fallen: Vec<_> = self
            .roster
            .iter()
            .filter(|(index, c)| standing[index.0] && !c.is_active())
            .map(|(_, c)| c.id)
            .collect();
        for combatant in fallen {
            debug!(%combatant, "fainted");
            self.log.append(BattleEvent::Fainted { combatant });
        }
    }
}
