//! Skill resolution.
//!
//! Damage is computed as attack (plus skill power), then critical, then the
//! elemental multiplier, then defense mitigation. Heals skip the critical and
//! elemental steps.
mod damage;
pub mod on_hit;
mod resolve;
mod result;
mod skill;

pub use damage::{base_effect, calculate_damage};
pub use on_hit::{roll_on_hit_status, status_for_roll};
pub use resolve::{SkillError, use_skill};
pub use result::{SkillInfo, SkillUseResult};
pub use skill::{Skill, SkillCategory, SkillId, TargetRule};
