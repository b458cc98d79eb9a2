mod common;

use common::{pawdeck, SEEDED_NAMES};
use predicates::prelude::*;

#[test]
fn list_prints_every_seeded_player_in_order() {
    let output = pawdeck()
        .args(["roster", "list"])
        .output()
        .expect("run roster list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let positions: Vec<usize> = SEEDED_NAMES
        .iter()
        .map(|name| stdout.find(name).unwrap_or_else(|| panic!("{} missing", name)))
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "seed order not preserved: {:?}",
        positions
    );
    assert!(stdout.contains("3 player(s)"));
}

#[test]
fn list_json_yields_one_card_per_player() {
    let output = pawdeck()
        .args(["roster", "list", "--format", "json"])
        .output()
        .expect("run roster list --format json");

    assert!(output.status.success());
    let roster: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON roster");
    let cards = roster["cards"].as_array().expect("cards array");
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0]["name"], "Maple");
    assert_eq!(cards[0]["imageUrl"], "https://images.pawdeck.dev/maple.png");
}

#[test]
fn show_prints_a_single_player() {
    pawdeck()
        .args(["roster", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maple"))
        .stdout(predicate::str::contains("Corgi"));
}

#[test]
fn show_unknown_id_fails_without_panicking() {
    pawdeck()
        .args(["roster", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("99"));
}

#[test]
fn add_prints_the_refreshed_roster_with_the_new_player() {
    pawdeck()
        .args([
            "roster",
            "add",
            "--name",
            "Rex",
            "--breed",
            "Lab",
            "--status",
            "Available",
            "--image-url",
            "http://x/y.png",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rex"))
        .stdout(predicate::str::contains("4 player(s)"));
}

#[test]
fn add_with_blank_field_is_rejected_before_any_request() {
    pawdeck()
        .args([
            "roster",
            "add",
            "--name",
            "",
            "--breed",
            "Lab",
            "--status",
            "Available",
            "--image-url",
            "http://x/y.png",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-empty"));
}

#[test]
fn remove_prints_the_refreshed_roster_without_the_player() {
    let output = pawdeck()
        .args(["roster", "remove", "1"])
        .output()
        .expect("run roster remove");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Maple"));
    assert!(stdout.contains("2 player(s)"));
}
