// Tue Jan 13 2026 - Alex

use super::RawName;
use indexmap::IndexSet;

/// Distinct raw names in first-seen order plus how many lines repeated one.
#[derive(Debug, Clone, Default)]
pub struct DistinctNames {
    pub names: Vec<RawName>,
    pub input_lines: usize,
    pub duplicate_lines: usize,
}

impl DistinctNames {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub struct Deduplicator;

impl Deduplicator {
    /// Exact-text comparison: `Escherichia coli` and `Escherichia_coli` stay distinct.
    pub fn distinct(input: &[RawName]) -> DistinctNames {
        let mut seen: IndexSet<&RawName> = IndexSet::with_capacity(input.len());
        for name in input {
            seen.insert(name);
        }

        let names: Vec<RawName> = seen.into_iter().cloned().collect();
        let duplicate_lines = input.len() - names.len();

        DistinctNames {
            names,
            input_lines: input.len(),
            duplicate_lines,
        }
    }
}
