use anyhow::{anyhow, Result};

use pawdeck_client::{Roster, RosterBackend};
use pawdeck_types::PlayerId;

use crate::args::OutputFormat;
use crate::presentation::presenters::roster::build_detail;
use crate::presentation::renderers::console;

pub fn handle<B: RosterBackend>(
    roster: &mut Roster<B>,
    id: PlayerId,
    format: OutputFormat,
) -> Result<()> {
    let player = roster
        .fetch_one(id)
        .ok_or_else(|| anyhow!("player #{} not found or unavailable", id))?;

    console::render_detail(&build_detail(&player), format)
}
