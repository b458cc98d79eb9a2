use pawdeck_client::{FetchOutcome, HttpRoster, MemoryRoster, Result, RosterBackend};
use pawdeck_types::{Player, PlayerDraft, PlayerId};

/// Backend chosen at startup: the live API, or the seeded in-memory roster
/// when running offline.
pub enum RosterTransport {
    Http(HttpRoster),
    Memory(MemoryRoster),
}

impl RosterBackend for RosterTransport {
    fn list_all(&mut self) -> Result<Vec<Player>> {
        match self {
            RosterTransport::Http(roster) => roster.list_all(),
            RosterTransport::Memory(roster) => roster.list_all(),
        }
    }

    fn fetch_one(&mut self, id: PlayerId) -> Result<FetchOutcome> {
        match self {
            RosterTransport::Http(roster) => roster.fetch_one(id),
            RosterTransport::Memory(roster) => roster.fetch_one(id),
        }
    }

    fn create(&mut self, draft: &PlayerDraft) -> Result<()> {
        match self {
            RosterTransport::Http(roster) => roster.create(draft),
            RosterTransport::Memory(roster) => roster.create(draft),
        }
    }

    fn remove(&mut self, id: PlayerId) -> Result<()> {
        match self {
            RosterTransport::Http(roster) => roster.remove(id),
            RosterTransport::Memory(roster) => roster.remove(id),
        }
    }
}
