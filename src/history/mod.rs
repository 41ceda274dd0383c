//! Session History
//!
//! Append-only ledger of completed assessment attempts.

use crate::audio::AssessmentMode;
use crate::evaluation::EvaluationReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed assessment attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier
    pub id: String,
    /// When the attempt completed
    pub timestamp: DateTime<Utc>,
    /// Which rubric was applied
    pub mode: AssessmentMode,
    /// The recognized speech
    pub transcript: String,
    /// Overall score as reported by the judge
    pub score: f64,
    /// The full judge report
    pub report: EvaluationReport,
}

impl HistoryEntry {
    /// Record a completed attempt
    pub fn new(mode: AssessmentMode, transcript: String, report: EvaluationReport) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            mode,
            score: report.score,
            transcript,
            report,
        }
    }
}

/// Session-scoped assessment history.
///
/// Owned by exactly one client session, created empty when the session
/// begins, and discarded with it. Nothing is ever written to disk:
/// history deliberately does not survive a restart.
#[derive(Debug, Default)]
pub struct Session {
    entries: Vec<HistoryEntry>,
}

impl Session {
    /// Create an empty session ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the tail of the ledger. Not idempotent: every
    /// call adds a distinct record.
    pub fn append(&mut self, entry: HistoryEntry) {
        tracing::debug!(mode = ?entry.mode, score = entry.score, "History entry appended");
        self.entries.push(entry);
    }

    /// Entries in insertion (chronological) order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recent entry, if any
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Get number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
