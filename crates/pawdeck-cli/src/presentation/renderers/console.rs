use anyhow::Result;
use owo_colors::OwoColorize;

use crate::args::OutputFormat;
use crate::presentation::view_models::{DetailViewModel, RosterViewModel};

pub fn render_roster(roster: &RosterViewModel, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(roster)?);
        return Ok(());
    }

    if roster.is_empty() {
        println!("The roster is empty.");
        return Ok(());
    }

    println!(
        "{:<6} {:<18} {:<20} {:<10} IMAGE",
        "ID", "NAME", "BREED", "STATUS"
    );
    println!("{}", "-".repeat(80));

    for card in &roster.cards {
        // Pad before coloring; escape codes would otherwise count against
        // the column width.
        println!(
            "{} {:<18} {:<20} {} {}",
            format!("{:<6}", card.id).yellow(),
            card.name,
            card.breed,
            format!("{:<10}", card.status).cyan(),
            card.image_url.dimmed()
        );
    }

    println!();
    println!("{} player(s) on the roster", roster.len());
    Ok(())
}

pub fn render_detail(detail: &DetailViewModel, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(detail)?);
        return Ok(());
    }

    println!("{} (#{})", detail.name.bold(), detail.id);
    println!("  Breed:  {}", detail.breed);
    println!("  Status: {}", detail.status);
    println!("  Image:  {}", detail.image_url);
    Ok(())
}
