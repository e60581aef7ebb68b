// ABOUTME: 'doorlist search' command implementation
// ABOUTME: Loads the parsed list into a roster and runs the door search over it

use super::input::InputConfig;
use super::parse::format_guest;
use chrono::Utc;
use doorlist_lib::roster::MIN_SEARCH_LEN;
use doorlist_lib::{GuestList, Result, Roster};
use std::path::Path;

/// Configuration for search command
pub struct SearchConfig {
    pub input: InputConfig,
    pub query: String,
}

/// Print guests matching the query
pub fn run(config: &SearchConfig) -> Result<()> {
    let roster = load_roster(&config.input)?;
    let hits = roster.search(&config.query, None);

    if hits.is_empty() {
        let query = config.query.trim();
        if query.chars().count() < MIN_SEARCH_LEN {
            println!("Type at least {MIN_SEARCH_LEN} characters to search.");
        } else {
            println!("No guests matching '{query}'.");
        }
        return Ok(());
    }

    for hit in &hits {
        println!("{}", format_guest(hit.guest));
    }

    Ok(())
}

/// Roster holding the single list read from the input
fn load_roster(input: &InputConfig) -> Result<Roster> {
    let outcome = input.load()?;
    let now = Utc::now();
    let title = Path::new(&input.file)
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| input.file.clone());

    let mut roster = Roster::with_parser(input.parser()?);
    roster.insert(GuestList {
        id: input.list_id.clone(),
        title,
        event_date: now,
        created_at: now,
        promoter_id: String::new(),
        promoter_name: String::new(),
        venue_id: String::new(),
        guests: outcome.guests,
    })?;
    Ok(roster)
}
