use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned roster identifier (opaque to the client)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PlayerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// One roster entry as served by the remote collection.
///
/// Players are immutable on the client side: the working set is replaced
/// wholesale by a fresh fetch after every write, never patched in place.
/// Unknown wire fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
}

/// User-submitted payload for a not-yet-persisted player.
///
/// Serializes to the create-request body; the server assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDraft {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
}

impl PlayerDraft {
    /// All four fields are required; whitespace-only counts as blank.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.breed.trim().is_empty()
            && !self.status.trim().is_empty()
            && !self.image_url.trim().is_empty()
    }
}
