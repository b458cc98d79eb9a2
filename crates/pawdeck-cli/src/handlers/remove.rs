use anyhow::{anyhow, bail, Result};

use pawdeck_client::{Roster, RosterBackend};
use pawdeck_types::PlayerId;

use crate::args::OutputFormat;
use crate::presentation::presenters::roster::build_roster;
use crate::presentation::renderers::console;

/// Remove a player, then print the re-fetched roster.
pub fn handle<B: RosterBackend>(
    roster: &mut Roster<B>,
    id: PlayerId,
    format: OutputFormat,
) -> Result<()> {
    if !roster.remove(id) {
        bail!("could not remove player #{}", id);
    }

    let players = roster
        .list_all()
        .ok_or_else(|| anyhow!("player removed, but the refreshed roster could not be fetched"))?;

    console::render_roster(&build_roster(&players), format)
}
