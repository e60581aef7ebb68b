// ABOUTME: Error types for doorlist operations
// ABOUTME: Defines DoorlistError enum covering roster, config, and I/O failures

use thiserror::Error;

/// Errors that can occur outside the parser
///
/// Parsing itself never fails; these cover the roster workflow and the
/// surfaces around it.
#[derive(Error, Debug)]
pub enum DoorlistError {
    /// I/O error reading input or config files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parser configuration is unusable
    #[error("Config error: {0}")]
    Config(String),

    /// No guest list with this id in the roster
    #[error("Guest list not found: {0}")]
    GuestListNotFound(String),

    /// No guest with this id in the given guest list
    #[error("Guest {guest_id} not found in guest list {guest_list_id}")]
    GuestNotFound {
        guest_list_id: String,
        guest_id: String,
    },

    /// Guest list creation input rejected
    #[error("Invalid guest list: {0}")]
    InvalidGuestList(String),
}
