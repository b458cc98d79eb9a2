use pawdeck_types::{Player, PlayerDraft, PlayerId};

use crate::backend::{FetchOutcome, RosterBackend};
use crate::Result;

/// In-process roster for offline mode and tests.
///
/// Behaves like the remote collection: ids are assigned on create and the
/// insertion order is the listing order.
pub struct MemoryRoster {
    players: Vec<Player>,
    next_id: u64,
}

impl MemoryRoster {
    pub fn empty() -> Self {
        Self {
            players: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_players(players: Vec<Player>) -> Self {
        let next_id = players.iter().map(|p| p.id.raw()).max().unwrap_or(0) + 1;
        Self { players, next_id }
    }

    /// A small starter roster so offline mode feels connected.
    pub fn seeded() -> Self {
        let seed = [
            ("Maple", "Corgi", "field", "https://images.pawdeck.dev/maple.png"),
            ("Ziggy", "Beagle", "bench", "https://images.pawdeck.dev/ziggy.png"),
            ("Biscuit", "Golden Retriever", "field", "https://images.pawdeck.dev/biscuit.png"),
        ];

        let players = seed
            .iter()
            .enumerate()
            .map(|(i, (name, breed, status, image_url))| Player {
                id: PlayerId::new(i as u64 + 1),
                name: name.to_string(),
                breed: breed.to_string(),
                status: status.to_string(),
                image_url: image_url.to_string(),
            })
            .collect();

        Self::with_players(players)
    }
}

impl RosterBackend for MemoryRoster {
    fn list_all(&mut self) -> Result<Vec<Player>> {
        Ok(self.players.clone())
    }

    fn fetch_one(&mut self, id: PlayerId) -> Result<FetchOutcome> {
        Ok(match self.players.iter().find(|p| p.id == id) {
            Some(player) => FetchOutcome::Found(player.clone()),
            None => FetchOutcome::NotFound,
        })
    }

    fn create(&mut self, draft: &PlayerDraft) -> Result<()> {
        let player = Player {
            id: PlayerId::new(self.next_id),
            name: draft.name.trim().to_string(),
            breed: draft.breed.trim().to_string(),
            status: draft.status.trim().to_string(),
            image_url: draft.image_url.trim().to_string(),
        };
        self.next_id += 1;
        self.players.push(player);
        Ok(())
    }

    fn remove(&mut self, id: PlayerId) -> Result<()> {
        self.players.retain(|p| p.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_fresh_ids_past_the_seed() {
        let mut roster = MemoryRoster::seeded();
        let before = roster.list_all().unwrap().len();

        roster
            .create(&PlayerDraft {
                name: "Rex".to_string(),
                breed: "Lab".to_string(),
                status: "bench".to_string(),
                image_url: "http://x/y.png".to_string(),
            })
            .unwrap();

        let players = roster.list_all().unwrap();
        assert_eq!(players.len(), before + 1);
        let rex = players.last().unwrap();
        assert_eq!(rex.name, "Rex");
        assert!(players[..before].iter().all(|p| p.id != rex.id));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut roster = MemoryRoster::seeded();
        let id = roster.list_all().unwrap()[0].id;

        roster.remove(id).unwrap();
        roster.remove(id).unwrap();

        assert_eq!(roster.fetch_one(id).unwrap(), FetchOutcome::NotFound);
    }
}
