//! Firing history — what fired, when, and whether it was applied.
//! In-memory ring buffer, no persistence.

use std::collections::VecDeque;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// One schedule firing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiringRecord {
    pub schedule_id: Uuid,
    pub schedule_name: String,
    pub device_name: String,
    /// Start of the minute the schedule fired in.
    pub fired_at: NaiveDateTime,
    pub outcome: FiringOutcome,
}

/// Result of applying a fired action to its device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FiringOutcome {
    /// Fired but not yet applied.
    Pending,
    Applied,
    Failed(String),
}

/// Ring buffer of recent firings, oldest first.
#[derive(Debug)]
pub struct FiringHistory {
    records: VecDeque<FiringRecord>,
    limit: usize,
}

impl FiringHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            records: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Record a firing, dropping the oldest record past the limit.
    pub fn record(&mut self, record: FiringRecord) {
        self.records.push_back(record);
        while self.records.len() > self.limit {
            self.records.pop_front();
        }
    }

    /// Set the outcome of a recorded firing. Returns false if the record
    /// has already rotated out.
    pub fn resolve(&mut self, schedule_id: Uuid, fired_at: NaiveDateTime, outcome: FiringOutcome) -> bool {
        match self
            .records
            .iter_mut()
            .rev()
            .find(|r| r.schedule_id == schedule_id && r.fired_at == fired_at)
        {
            Some(record) => {
                record.outcome = outcome;
                true
            }
            None => false,
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &FiringRecord> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&FiringRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for FiringHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(name: &str, minute: u32) -> FiringRecord {
        FiringRecord {
            schedule_id: Uuid::new_v4(),
            schedule_name: name.into(),
            device_name: "Lamp".into(),
            fired_at: NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(7, minute, 0)
                .unwrap(),
            outcome: FiringOutcome::Pending,
        }
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut history = FiringHistory::new(2);
        history.record(record("a", 0));
        history.record(record("b", 1));
        history.record(record("c", 2));
        let names: Vec<_> = history.records().map(|r| r.schedule_name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn test_resolve() {
        let mut history = FiringHistory::default();
        let r = record("a", 0);
        let (id, at) = (r.schedule_id, r.fired_at);
        history.record(r);
        assert!(history.resolve(id, at, FiringOutcome::Applied));
        assert_eq!(history.last().unwrap().outcome, FiringOutcome::Applied);
        assert!(!history.resolve(Uuid::new_v4(), at, FiringOutcome::Applied));
    }
}
