use std::time::Duration;

use reqwest::blocking::Client;

use pawdeck_types::{Player, PlayerDraft, PlayerEnvelope, PlayerId, RosterEnvelope};

use crate::backend::{FetchOutcome, RosterBackend};
use crate::{Error, Result};

/// Gateway against the live roster API.
pub struct HttpRoster {
    client: Client,
    endpoint: String,
}

impl HttpRoster {
    /// `endpoint` is the API root including the cohort segment; trailing
    /// slashes are tolerated.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pawdeck/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| Error::transport("client", e))?;

        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Ok(Self { client, endpoint })
    }

    fn players_url(&self) -> String {
        format!("{}/players/", self.endpoint)
    }

    fn player_url(&self, id: PlayerId) -> String {
        format!("{}/players/{}", self.endpoint, id)
    }
}

impl RosterBackend for HttpRoster {
    fn list_all(&mut self) -> Result<Vec<Player>> {
        let response = self
            .client
            .get(self.players_url())
            .send()
            .map_err(|e| Error::transport("list", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                op: "list",
                status: status.as_u16(),
            });
        }

        let text = response.text().map_err(|e| Error::transport("list", e))?;
        let envelope: RosterEnvelope =
            serde_json::from_str(&text).map_err(|e| Error::malformed("list", e))?;

        Ok(envelope.data.players)
    }

    fn fetch_one(&mut self, id: PlayerId) -> Result<FetchOutcome> {
        let response = self
            .client
            .get(self.player_url(id))
            .send()
            .map_err(|e| Error::transport("fetch", e))?;

        // The single-player endpoint reports unknown ids inside the
        // envelope (`success: false`), so the status is not consulted here.
        let text = response.text().map_err(|e| Error::transport("fetch", e))?;
        let envelope: PlayerEnvelope =
            serde_json::from_str(&text).map_err(|e| Error::malformed("fetch", e))?;

        Ok(match envelope.into_player() {
            Some(player) => FetchOutcome::Found(player),
            None => FetchOutcome::NotFound,
        })
    }

    fn create(&mut self, draft: &PlayerDraft) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/players", self.endpoint))
            .json(draft)
            .send()
            .map_err(|e| Error::transport("create", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                op: "create",
                status: status.as_u16(),
            });
        }

        // Success body is not consumed; callers re-list to pick up the
        // server-assigned record.
        Ok(())
    }

    fn remove(&mut self, id: PlayerId) -> Result<()> {
        let response = self
            .client
            .delete(self.player_url(id))
            .send()
            .map_err(|e| Error::transport("remove", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                op: "remove",
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
