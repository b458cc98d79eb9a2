use tracing::warn;

use pawdeck_types::{Player, PlayerDraft, PlayerId};

use crate::backend::{FetchOutcome, RosterBackend};

/// Fail-soft facade over a [`RosterBackend`].
///
/// This is the boundary the view layer talks to: every failure is caught
/// here, logged with the operation and id, and degraded to a sentinel.
/// Callers treat a sentinel as "operation did not happen" and keep their
/// current view state.
pub struct Roster<B> {
    backend: B,
}

impl<B: RosterBackend> Roster<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// `None` means "no data" and must not be confused with an empty
    /// collection, which comes back as `Some(vec![])`.
    pub fn list_all(&mut self) -> Option<Vec<Player>> {
        match self.backend.list_all() {
            Ok(players) => Some(players),
            Err(err) => {
                warn!(error = %err, "roster listing failed");
                None
            }
        }
    }

    pub fn fetch_one(&mut self, id: PlayerId) -> Option<Player> {
        match self.backend.fetch_one(id) {
            Ok(FetchOutcome::Found(player)) => Some(player),
            Ok(FetchOutcome::NotFound) => {
                warn!(player = %id, "player not in roster");
                None
            }
            Err(err) => {
                warn!(player = %id, error = %err, "player fetch failed");
                None
            }
        }
    }

    /// On `true` the caller owes exactly one full list refresh.
    pub fn create(&mut self, draft: &PlayerDraft) -> bool {
        match self.backend.create(draft) {
            Ok(()) => true,
            Err(err) => {
                warn!(name = %draft.name, error = %err, "player create failed");
                false
            }
        }
    }

    /// On `true` the caller owes exactly one full list refresh.
    pub fn remove(&mut self, id: PlayerId) -> bool {
        match self.backend.remove(id) {
            Ok(()) => true,
            Err(err) => {
                warn!(player = %id, error = %err, "player remove failed");
                false
            }
        }
    }
}
