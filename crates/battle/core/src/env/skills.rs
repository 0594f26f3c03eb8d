use std::collections::BTreeMap;

use crate::combat::{Skill, SkillId};

/// Skill rows are loaded as-is; the combat layer consumes them directly.
pub type SkillRow = Skill;

/// Read-only lookup of skill rows.
pub trait SkillOracle {
    fn skill(&self, id: SkillId) -> Option<Skill>;

    fn all_skills(&self) -> Vec<Skill> {
        Vec::new()
    }
}

/// In-memory skill table keyed by id.
#[derive(Clone, Debug, Default)]
pub struct SkillSheet {
    rows: BTreeMap<SkillId, SkillRow>,
}

impl SkillSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row, returning the row it replaced.
    pub fn insert(&mut self, row: SkillRow) -> Option<SkillRow> {
        self.rows.insert(row.id, row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<SkillRow> for SkillSheet {
    fn from_iter<I: IntoIterator<Item = SkillRow>>(iter: I) -> Self {
        let mut sheet = Self::new();
        for row in iter {
            sheet.insert(row);
        }
        sheet
    }
}

impl SkillOracle for SkillSheet {
    fn skill(&self, id: SkillId) -> Option<Skill> {
        self.rows.get(&id).cloned()
    }

    fn all_skills(&self) -> Vec<Skill> {
        self.rows.values().cloned().collect()
    }
}
