// NOTE: pawdeck Architecture Rationale
//
// Why re-fetch-everything-on-mutation (not local patching)?
// - The remote roster is the single source of truth; other clients mutate it
// - Patching the working set in place invites drift the user cannot see
// - Trade-off: one extra list request per mutation, trivially cheap here
//
// Why a fail-soft gateway (not error propagation)?
// - A single failed request must never take down the interactive board
// - Every failure degrades to a logged diagnostic plus an unchanged view
// - Trade-off: callers must honor the "None means no data" contract
//
// Why typed commands (not per-widget callbacks)?
// - The board repaints in full every frame, so stored callbacks would be
//   rebound constantly and could outlive the widget they were built for
// - A Command enum consumed by one dispatcher makes every control's effect
//   auditable in a single match

mod args;
mod commands;
mod handlers;
pub mod presentation;
mod transport;

pub use args::{Cli, Commands, OutputFormat, RosterCommand};
pub use commands::run;
pub use transport::RosterTransport;
