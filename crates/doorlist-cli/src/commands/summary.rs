// ABOUTME: 'doorlist summary' command implementation
// ABOUTME: Displays guest counts split by primaries, plus-ones, and gender

use super::input::InputConfig;
use doorlist_lib::{Gender, ParseBreakdown, Result};

/// Configuration for summary command
pub struct SummaryConfig {
    pub input: InputConfig,
    pub json: bool,
}

/// Show the composition of a guest list
pub fn run(config: &SummaryConfig) -> Result<()> {
    let outcome = config.input.load()?;
    let breakdown = ParseBreakdown::from_guests(&outcome.guests);

    if config.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!("📋 Guest list {}\n", config.input.list_id);
    println!(
        "Guests: {} ({} primary, {} plus-ones)",
        breakdown.total, breakdown.primaries, breakdown.plus_ones
    );
    for &gender in Gender::all() {
        println!("  {:<12} {}", gender, breakdown.count_for(Some(gender)));
    }
    println!("  {:<12} {}", "unspecified", breakdown.unspecified);

    if !outcome.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &outcome.warnings {
            println!("  ⚠️  {warning}");
        }
    }

    Ok(())
}
