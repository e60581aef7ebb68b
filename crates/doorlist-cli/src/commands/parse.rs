// ABOUTME: 'doorlist parse' command implementation
// ABOUTME: Prints every parsed guest as a table or JSON

use super::input::InputConfig;
use doorlist_lib::{Guest, Result};

/// Configuration for parse command
pub struct ParseConfig {
    pub input: InputConfig,
    pub json: bool,
    pub verbose: bool,
}

/// Parse the guest list and print the guests
pub fn run(config: &ParseConfig) -> Result<()> {
    let outcome = config.input.load()?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome.guests)?);
        return Ok(());
    }

    if outcome.guests.is_empty() {
        println!("No guests found.");
        return Ok(());
    }

    for guest in &outcome.guests {
        println!("{}", format_guest(guest));
    }
    println!();
    println!("{} guests", outcome.guests.len());

    if config.verbose && !outcome.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &outcome.warnings {
            println!("  ⚠️  {warning}");
        }
    }

    Ok(())
}

/// One table row: id, name, gender badge, and the primary guest for plus-ones
pub fn format_guest(guest: &Guest) -> String {
    let mut row = format!("{:<12} {}", guest.id, guest.name);
    if let Some(gender) = guest.gender {
        row.push_str(&format!(" [{}]", gender.initial()));
    }
    if let Some(primary) = &guest.guest_of {
        row.push_str(&format!(" (guest of {primary})"));
    }
    row
}
