// Tue Jan 13 2026 - Alex

use super::PipelineError;
use crate::names::{DistinctNames, RawName, ResolvedName};
use crate::resolver::{LookupErrorKind, ResolutionOutcome, ResolutionRecord};
use indexmap::IndexMap;
use log::warn;
use serde::Serialize;
use std::collections::BTreeMap;

/// Collects completed records into one slot per distinct raw name.
///
/// Slots are created up front in first-seen input order, so the finished
/// batch has the same row order whatever order the workers completed in.
pub struct ResolutionAggregator {
    slots: IndexMap<RawName, Option<ResolutionRecord>>,
    input_lines: usize,
    duplicate_lines: usize,
    received: usize,
}

impl ResolutionAggregator {
    pub fn new(distinct: &DistinctNames) -> Self {
        let slots = distinct
            .names
            .iter()
            .map(|name| (name.clone(), None))
            .collect();

        Self {
            slots,
            input_lines: distinct.input_lines,
            duplicate_lines: distinct.duplicate_lines,
            received: 0,
        }
    }

    /// Writes are keyed by raw name; a repeated key overwrites its slot.
    pub fn accept(&mut self, record: ResolutionRecord) {
        self.received += 1;

        match self.slots.get_mut(&record.raw) {
            Some(slot) => {
                *slot = Some(record);
            }
            None => {
                warn!("Record for unscheduled name {:?}", record.raw.as_str());
                self.slots.insert(record.raw.clone(), Some(record));
            }
        }
    }

    pub fn received(&self) -> usize {
        self.received
    }

    pub fn pending(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_none()).count()
    }

    pub fn finish(self) -> Result<ResolutionBatch, PipelineError> {
        let missing = self.pending();
        if missing > 0 {
            return Err(PipelineError::Incomplete(missing));
        }

        let records: IndexMap<RawName, ResolutionRecord> = self
            .slots
            .into_iter()
            .filter_map(|(raw, slot)| slot.map(|record| (raw, record)))
            .collect();

        let stats = BatchStats::from_records(&records, self.input_lines, self.duplicate_lines);
        Ok(ResolutionBatch { records, stats })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub input_lines: usize,
    pub distinct_names: usize,
    pub duplicate_lines: usize,
    pub resolved: usize,
    pub fallback: usize,
    pub fallback_by_kind: BTreeMap<LookupErrorKind, usize>,
}

impl BatchStats {
    fn from_records(
        records: &IndexMap<RawName, ResolutionRecord>,
        input_lines: usize,
        duplicate_lines: usize,
    ) -> Self {
        let mut stats = BatchStats {
            input_lines,
            distinct_names: records.len(),
            duplicate_lines,
            ..Default::default()
        };

        for record in records.values() {
            match record.outcome {
                ResolutionOutcome::Resolved => stats.resolved += 1,
                ResolutionOutcome::Fallback(kind) => {
                    stats.fallback += 1;
                    *stats.fallback_by_kind.entry(kind).or_insert(0) += 1;
                }
            }
        }

        stats
    }
}

/// Outcome of one run: one record per distinct raw name.
#[derive(Debug, Clone, Default)]
pub struct ResolutionBatch {
    records: IndexMap<RawName, ResolutionRecord>,
    stats: BatchStats,
}

impl ResolutionBatch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> &BatchStats {
        &self.stats
    }

    pub fn get(&self, raw: &str) -> Option<&ResolvedName> {
        self.records.values().find(|r| r.raw.as_str() == raw).map(|r| &r.resolved)
    }

    pub fn records(&self) -> impl Iterator<Item = &ResolutionRecord> {
        self.records.values()
    }

    pub fn mapping(&self) -> impl Iterator<Item = (&RawName, &ResolvedName)> {
        self.records.iter().map(|(raw, record)| (raw, &record.resolved))
    }

    /// One entry per distinct raw name; equal resolved names are not collapsed.
    pub fn resolved_names(&self) -> Vec<&ResolvedName> {
        self.records.values().map(|record| &record.resolved).collect()
    }
}
