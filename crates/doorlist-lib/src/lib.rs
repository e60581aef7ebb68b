// ABOUTME: Core library for doorlist providing guest-list parsing and door check-in
// ABOUTME: Includes the guest-list text parser, parser config, roster workflow, and stats

pub mod config;
pub mod error;
pub mod guest;
pub mod parser;
pub mod roster;
pub mod stats;

pub use config::ParserConfig;
pub use error::DoorlistError;
pub use guest::{Gender, Guest, GuestUpdate};
pub use parser::{parse_guest_list, GuestListParser, ParseOutcome, ParseWarning};
pub use roster::{GuestList, GuestOrder, Promoter, Roster, SearchHit};
pub use stats::{GuestListSummary, ParseBreakdown, PromoterStats, Totals};

/// Result type alias using [`DoorlistError`]
pub type Result<T> = std::result::Result<T, DoorlistError>;
