use anyhow::{anyhow, Result};

use pawdeck_client::{Roster, RosterBackend};

use crate::args::OutputFormat;
use crate::presentation::presenters::roster::build_roster;
use crate::presentation::renderers::console;

pub fn handle<B: RosterBackend>(roster: &mut Roster<B>, format: OutputFormat) -> Result<()> {
    let players = roster
        .list_all()
        .ok_or_else(|| anyhow!("could not fetch the roster"))?;

    console::render_roster(&build_roster(&players), format)
}
