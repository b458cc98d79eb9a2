use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pawdeck")]
#[command(about = "Browse and manage a remote puppy roster", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Full API endpoint (overrides PAWDECK_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format for one-shot commands
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Run against a seeded in-memory roster instead of the remote API
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive roster board (the default)
    Board,

    /// One-shot roster operations
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
}

#[derive(Subcommand)]
pub enum RosterCommand {
    /// Fetch and print the full roster
    List,

    /// Fetch and print a single player
    Show { id: u64 },

    /// Create a player, then print the refreshed roster
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        breed: String,
        #[arg(long)]
        status: String,
        #[arg(long)]
        image_url: String,
    },

    /// Remove a player, then print the refreshed roster
    Remove { id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
