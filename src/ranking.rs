//! Leaderboard ranking
//!
//! Enforces the leaderboard invariant: sorted ascending by time, at most
//! [`MAX_SCORES`] entries, ties kept in insertion order. Runs after every
//! insertion and again on every snapshot, so a leaderboard damaged by an
//! earlier partial write heals on the next read.

use crate::model::Score;

/// Maximum number of scores kept on the leaderboard
pub const MAX_SCORES: usize = 10;

/// Stable-sort scores ascending by time and truncate to the top 10.
///
/// Idempotent and total: empty or undersized input is simply sorted.
pub fn rerank(scores: &mut Vec<Score>) {
    scores.sort_by_key(|s| s.time);
    scores.truncate(MAX_SCORES);
}
