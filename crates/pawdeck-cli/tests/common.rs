//! Common test utilities shared across integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;

/// A pawdeck invocation against the seeded in-memory roster, so tests never
/// touch the network. The seed contains Maple, Ziggy and Biscuit.
pub fn pawdeck() -> Command {
    let mut cmd = Command::cargo_bin("pawdeck").expect("pawdeck binary");
    cmd.env("PAWDECK_OFFLINE", "1");
    cmd
}

pub const SEEDED_NAMES: [&str; 3] = ["Maple", "Ziggy", "Biscuit"];
