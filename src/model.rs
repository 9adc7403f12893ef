//! State types shared between the service, the store, and the HTTP API
//!
//! The serde shapes here are also the on-disk layout of the state file and the
//! wire shape of `GET /state` — all three are deliberately identical.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered score on the leaderboard. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub name: String,
    /// Stored for contacting winners; not shown in the public table
    pub phone: String,
    /// Completion time in whole seconds
    pub time: u64,
    /// Registration timestamp (ISO 8601 on the wire)
    pub date: DateTime<Utc>,
}

/// A submitted time awaiting a name/phone (registration) or dismissal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingEntry {
    /// Opaque unique id handed back to the submitting client
    pub id: String,
    /// Completion time in whole seconds, rounded at submission
    pub time: u64,
}

/// The full persisted state: leaderboard plus pending entries
///
/// Invariants after any observable operation:
/// - `highscores` sorted ascending by `time`, length ≤ 10, ties in insertion order
/// - `pending` ids unique, insertion order preserved for display
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighscoreState {
    #[serde(default)]
    pub highscores: Vec<Score>,
    #[serde(default)]
    pub pending: Vec<PendingEntry>,
}
