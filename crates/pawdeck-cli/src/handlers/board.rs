use anyhow::Result;

use pawdeck_client::Roster;

use crate::presentation::renderers::tui;
use crate::transport::RosterTransport;

/// Open the interactive roster board.
pub fn handle(roster: Roster<RosterTransport>) -> Result<()> {
    let app = tui::App::new(roster);
    tui::run(app)
}
