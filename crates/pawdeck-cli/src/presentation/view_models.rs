//! Plain data handed from presenters to renderers.
//!
//! View models are renderer-agnostic: the console printer and the board
//! draw code consume the same structures, and the JSON output format is
//! just their serde form.

use serde::Serialize;

use pawdeck_types::PlayerId;

/// One card on the roster surface. Both controls ("view details" and
/// "remove") bind to `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardViewModel {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
}

/// The full roster surface: one card per record, in fetch order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RosterViewModel {
    pub cards: Vec<CardViewModel>,
}

impl RosterViewModel {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

/// The single-player detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailViewModel {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
}
