use pawdeck_types::{Player, PlayerDraft, PlayerId};

use crate::Result;

/// Outcome of a single-player lookup.
///
/// An unknown id is a well-formed answer from the API, not a failure, so it
/// gets its own leg instead of being folded into the error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(Player),
    NotFound,
}

/// The four operations of the remote collection.
///
/// Implementations return typed errors; the fail-soft policy lives one
/// layer up in [`crate::Roster`], which is the only surface the view code
/// talks to.
pub trait RosterBackend {
    /// Read the full collection, in server order.
    fn list_all(&mut self) -> Result<Vec<Player>>;

    /// Read a single record by id.
    fn fetch_one(&mut self, id: PlayerId) -> Result<FetchOutcome>;

    /// Persist a draft. The created record is not returned; callers are
    /// expected to re-list immediately.
    fn create(&mut self, draft: &PlayerDraft) -> Result<()>;

    /// Delete a record by id.
    fn remove(&mut self, id: PlayerId) -> Result<()>;
}
