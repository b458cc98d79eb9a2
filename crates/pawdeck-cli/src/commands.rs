use anyhow::Result;

use pawdeck_client::{config, HttpRoster, MemoryRoster, Roster};
use pawdeck_types::{PlayerDraft, PlayerId};

use crate::args::{Cli, Commands, RosterCommand};
use crate::handlers;
use crate::transport::RosterTransport;

/// Environment switch for the seeded in-memory roster (same effect as
/// `--offline`).
pub const OFFLINE_ENV: &str = "PAWDECK_OFFLINE";

pub fn run(cli: Cli) -> Result<()> {
    let roster = Roster::new(build_transport(&cli)?);

    match cli.command {
        None | Some(Commands::Board) => handlers::board::handle(roster),

        Some(Commands::Roster { command }) => {
            let mut roster = roster;
            match command {
                RosterCommand::List => handlers::list::handle(&mut roster, cli.format),
                RosterCommand::Show { id } => {
                    handlers::show::handle(&mut roster, PlayerId::new(id), cli.format)
                }
                RosterCommand::Add {
                    name,
                    breed,
                    status,
                    image_url,
                } => {
                    let draft = PlayerDraft {
                        name,
                        breed,
                        status,
                        image_url,
                    };
                    handlers::add::handle(&mut roster, draft, cli.format)
                }
                RosterCommand::Remove { id } => {
                    handlers::remove::handle(&mut roster, PlayerId::new(id), cli.format)
                }
            }
        }
    }
}

fn build_transport(cli: &Cli) -> Result<RosterTransport> {
    if cli.offline || std::env::var_os(OFFLINE_ENV).is_some() {
        return Ok(RosterTransport::Memory(MemoryRoster::seeded()));
    }

    let endpoint = config::resolve_endpoint(cli.api_url.as_deref())?;
    Ok(RosterTransport::Http(HttpRoster::new(endpoint)?))
}
