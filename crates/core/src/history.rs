//! Solution History
//!
//! An in-memory, session-local log of solved problems. The store is a plain
//! struct with no global state; the owning layer decides where it lives and
//! how it is shared. Records are kept newest-first and are only ever added
//! at the front or removed all at once.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The difficulty level a problem was submitted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Basic,
    #[default]
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Basic => write!(f, "Basic"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

/// One stored question/answer pair.
///
/// The answer holds whatever text the solver produced, including the
/// formatted `Error: ...` string when the completion call failed. A record
/// is never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub question: String,
    pub answer: String,
    pub difficulty: Difficulty,
}

/// The ordered collection of solution records for one session.
///
/// Internally newest-first: index 0 is always the most recent submission.
/// For display, the newest record carries the highest number, so the record
/// at position `i` of `N` is shown as number `N - i`.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<SolutionRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new record at the front, shifting existing records back.
    pub fn record(&mut self, question: String, answer: String, difficulty: Difficulty) {
        self.records.insert(
            0,
            SolutionRecord {
                question,
                answer,
                difficulty,
            },
        );
    }

    /// Empties the store.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates newest-first, pairing each record with its display number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &SolutionRecord)> {
        let total = self.records.len();
        self.records
            .iter()
            .enumerate()
            .map(move |(i, record)| (total - i, record))
    }

    /// Serializes all records into a flat text blob, oldest-first.
    ///
    /// Each record becomes a `Q<n>:` / `A<n>:` line pair followed by a blank
    /// line, numbered 1..N in submission order. An empty store produces an
    /// empty string.
    pub fn export(&self) -> String {
        let mut out = String::new();
        for (n, record) in self.records.iter().rev().enumerate() {
            out.push_str(&format!("Q{}: {}\n", n + 1, record.question));
            out.push_str(&format!("A{}: {}\n\n", n + 1, record.answer));
        }
        out
    }
}
