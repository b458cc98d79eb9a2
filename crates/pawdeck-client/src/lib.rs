mod backend;
pub mod config;
mod error;
mod http;
mod memory;
mod roster;

pub use backend::{FetchOutcome, RosterBackend};
pub use config::Config;
pub use error::{Error, Result};
pub use http::HttpRoster;
pub use memory::MemoryRoster;
pub use roster::Roster;
