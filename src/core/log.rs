//! Transition logging.
//!
//! An instance keeps an immutable record of the transitions it has taken.
//! Recording returns a new log rather than mutating in place.

use super::id::{EventId, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one successful transition.
///
/// Written only after every hook for the transition has completed, so a
/// failed or panicking transition leaves no record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// State the machine left.
    pub from: StateId,
    /// Event that triggered the transition.
    pub event: EventId,
    /// State the machine entered.
    pub to: StateId,
    /// When the transition completed.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of an instance's successful transitions.
///
/// # Example
///
/// ```rust
/// use fstate::core::{TransitionLog, TransitionRecord};
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: "idle".into(),
///     event: "start".into(),
///     to: "running".into(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.last().unwrap().to.as_str(), "running");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new log. The original is unchanged.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The recorded transitions, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any transition has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The path of states traversed: the first record's `from`, then each
    /// record's `to` in order. Empty when no transition has been recorded.
    pub fn path(&self) -> Vec<&StateId> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }
}
