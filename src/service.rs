//! Score service: pending registry and leaderboard orchestration
//!
//! `ScoreService` owns the in-memory state behind a single mutex. Every
//! mutating operation holds that mutex across both the collection update and
//! the persistence write, so the axum runtime's concurrent request handling
//! never observes a half-applied transition (pending entry gone but score not
//! yet ranked, or the reverse).
//!
//! Write-failure policy: if a save fails mid-mutation the in-memory state has
//! already changed and remains authoritative; the failure is logged, the
//! operation still reports success, and a later successful save catches the
//! file up. Known durability weakness, accepted for a low-stakes leaderboard.

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{HighscoreState, PendingEntry, Score};
use crate::ranking::rerank;
use crate::store::Store;

/// Service owning the highscore state and its persistence
pub struct ScoreService {
    store: Store,
    state: Mutex<HighscoreState>,
}

impl ScoreService {
    /// Load state from the store and wrap it in a service.
    ///
    /// Reranks whatever the file contained, so a hand-edited or stale file is
    /// normalized before the first request.
    pub fn open(store: Store) -> Result<Self> {
        let mut state = store.load()?;
        rerank(&mut state.highscores);
        Ok(Self {
            store,
            state: Mutex::new(state),
        })
    }

    /// Record a new completion time, returning the pending entry id.
    ///
    /// The time is rounded to whole seconds here, at submission, so the ranked
    /// value is exactly what was measured no matter how long the name/phone
    /// prompt stays open afterwards.
    pub async fn submit(&self, time: f64) -> Result<String> {
        if !time.is_finite() || time < 0.0 {
            return Err(Error::InvalidInput(
                "time must be a non-negative number of seconds".to_string(),
            ));
        }

        let entry = PendingEntry {
            id: Uuid::new_v4().to_string(),
            time: time.round() as u64,
        };
        let id = entry.id.clone();

        let mut state = self.state.lock().await;
        state.pending.push(entry);
        self.persist(&state);
        info!("Submitted pending time {}s (id {})", time.round(), id);
        Ok(id)
    }

    /// Look up a pending entry by exact id match.
    pub async fn find_pending(&self, id: &str) -> Option<PendingEntry> {
        let state = self.state.lock().await;
        state.pending.iter().find(|p| p.id == id).cloned()
    }

    /// Turn a pending entry into a ranked score.
    ///
    /// Fails with `NotFound` for an unknown id and `InvalidInput` when the
    /// trimmed name or phone is empty; neither failure changes any state.
    pub async fn register(&self, id: &str, name: &str, phone: &str) -> Result<Score> {
        let mut state = self.state.lock().await;

        let idx = state
            .pending
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(format!("pending score {}", id)))?;

        let name = name.trim();
        let phone = phone.trim();
        if name.is_empty() || phone.is_empty() {
            return Err(Error::InvalidInput(
                "name and phone are required".to_string(),
            ));
        }

        let pending = state.pending.remove(idx);
        let score = Score {
            name: name.to_string(),
            phone: phone.to_string(),
            time: pending.time,
            date: Utc::now(),
        };
        state.highscores.push(score.clone());
        rerank(&mut state.highscores);
        self.persist(&state);
        info!("Registered score {}s for {}", score.time, score.name);
        Ok(score)
    }

    /// Discard a pending entry. Returns whether anything was removed.
    ///
    /// Persists only when a removal actually happened, so repeated dismissals
    /// of the same id do not rewrite the file.
    pub async fn dismiss(&self, id: &str) -> bool {
        let mut state = self.state.lock().await;
        let before = state.pending.len();
        state.pending.retain(|p| p.id != id);
        let removed = state.pending.len() != before;
        if removed {
            self.persist(&state);
            info!("Dismissed pending score {}", id);
        }
        removed
    }

    /// Return a copy of the full state for transport.
    ///
    /// Reranks first, healing any drift from a partial prior write.
    pub async fn snapshot(&self) -> HighscoreState {
        let mut state = self.state.lock().await;
        rerank(&mut state.highscores);
        state.clone()
    }

    // Log-and-continue save: the in-memory state is authoritative once a
    // mutation has been applied, even if the file write fails.
    fn persist(&self, state: &HighscoreState) {
        if let Err(e) = self.store.save(state) {
            error!(
                "Could not write state file {}: {}",
                self.store.path().display(),
                e
            );
        }
    }
}
