use anyhow::{anyhow, bail, Result};

use pawdeck_client::{Roster, RosterBackend};
use pawdeck_types::PlayerDraft;

use crate::args::OutputFormat;
use crate::presentation::presenters::roster::build_roster;
use crate::presentation::renderers::console;

/// Create a player, then print the re-fetched roster. clap guarantees the
/// flags are present; empty values still fail the presence check.
pub fn handle<B: RosterBackend>(
    roster: &mut Roster<B>,
    draft: PlayerDraft,
    format: OutputFormat,
) -> Result<()> {
    if !draft.is_complete() {
        bail!("--name, --breed, --status and --image-url must all be non-empty");
    }

    if !roster.create(&draft) {
        bail!("the roster API rejected the new player");
    }

    let players = roster
        .list_all()
        .ok_or_else(|| anyhow!("player created, but the refreshed roster could not be fetched"))?;

    console::render_roster(&build_roster(&players), format)
}
