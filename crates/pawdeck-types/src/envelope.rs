//! Response envelopes for the remote roster API.
//!
//! The collection wraps payloads in a `data` object; the single-player
//! endpoint additionally carries a `success` flag. Write endpoints report
//! outcome through the HTTP status alone, so no envelope exists for them.

use serde::Deserialize;

use crate::Player;

/// `GET /players/` → `{ "data": { "players": [ ... ] } }`
#[derive(Debug, Deserialize)]
pub struct RosterEnvelope {
    pub data: RosterData,
}

#[derive(Debug, Deserialize)]
pub struct RosterData {
    pub players: Vec<Player>,
}

/// `GET /players/{id}` → `{ "success": bool, "data": { "player": { ... } } }`
///
/// An unknown id comes back with `success: false` and no player, which is a
/// well-formed response rather than a decode failure.
#[derive(Debug, Deserialize)]
pub struct PlayerEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<PlayerData>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerData {
    #[serde(default)]
    pub player: Option<Player>,
}

impl PlayerEnvelope {
    /// The player carried by a successful lookup, if any.
    pub fn into_player(self) -> Option<Player> {
        if !self.success {
            return None;
        }
        self.data.and_then(|d| d.player)
    }
}
