use std::collections::BTreeMap;
use std::fmt;

use crate::stats::BaseStats;

/// Identifier of a stat row (for example a character level or monster kind).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatRowId(pub u32);

impl fmt::Display for StatRowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatRow {
    pub id: StatRowId,
    pub stats: BaseStats,
}

impl StatRow {
    pub const fn new(id: StatRowId, stats: BaseStats) -> Self {
        Self { id, stats }
    }
}

/// Read-only lookup of base stats.
pub trait StatOracle {
    fn stats(&self, id: StatRowId) -> Option<BaseStats>;
}

/// In-memory stat table keyed by row id.
#[derive(Clone, Debug, Default)]
pub struct StatSheet {
    rows: BTreeMap<StatRowId, BaseStats>,
}

impl StatSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, row: StatRow) -> Option<BaseStats> {
        self.rows.insert(row.id, row.stats)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<StatRow> for StatSheet {
    fn from_iter<I: IntoIterator<Item = StatRow>>(iter: I) -> Self {
        let mut sheet = Self::new();
        for row in iter {
            sheet.insert(row);
        }
        sheet
    }
}

impl StatOracle for StatSheet {
    fn stats(&self, id: StatRowId) -> Option<BaseStats> {
        self.rows.get(&id).copied()
    }
}
