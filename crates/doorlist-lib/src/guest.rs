// ABOUTME: Guest data structures shared by the parser and the roster
// ABOUTME: Gender markers, guest records, and partial guest updates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender inferred from a trailing marker on a guest line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl Gender {
    /// Match a single token against the gender keywords, ignoring case
    ///
    /// Accepts `m`/`male`, `f`/`female` and `n`/`neutral`.
    pub fn from_token(token: &str) -> Option<Self> {
        const KEYWORDS: [(&str, Gender); 6] = [
            ("m", Gender::Male),
            ("male", Gender::Male),
            ("f", Gender::Female),
            ("female", Gender::Female),
            ("n", Gender::Neutral),
            ("neutral", Gender::Neutral),
        ];

        KEYWORDS
            .iter()
            .find(|(keyword, _)| token.eq_ignore_ascii_case(keyword))
            .map(|&(_, gender)| gender)
    }

    /// Single-letter badge shown next to a guest name
    pub fn initial(self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
            Gender::Neutral => 'N',
        }
    }

    /// All variants in display order
    pub fn all() -> &'static [Self] {
        &[Self::Male, Self::Female, Self::Neutral]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        };
        f.pad(label)
    }
}

/// A single guest on a guest list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Unique within the list (e.g., "gl1-3")
    pub id: String,
    /// Display name, markers stripped
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Whether the guest has been checked in at the door
    pub arrived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrived_at: Option<DateTime<Utc>>,
    /// Name of the primary guest this plus-one belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_of: Option<String>,
    /// Owning guest list
    pub guest_list_id: String,
}

impl Guest {
    /// Whether this guest was synthesized from a `+N` suffix
    pub fn is_plus_one(&self) -> bool {
        self.guest_of.is_some()
    }

    /// Case-insensitive substring match on the guest name
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Apply a partial update, leaving unset fields untouched
    pub fn apply(&mut self, update: GuestUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(gender) = update.gender {
            self.gender = gender;
        }
        if let Some(arrived) = update.arrived {
            self.arrived = arrived;
        }
        if let Some(arrived_at) = update.arrived_at {
            self.arrived_at = arrived_at;
        }
    }
}

/// Partial update for a guest; `None` leaves a field unchanged
///
/// The nested options on `gender` and `arrived_at` distinguish "leave as is"
/// from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestUpdate {
    pub name: Option<String>,
    pub gender: Option<Option<Gender>>,
    pub arrived: Option<bool>,
    pub arrived_at: Option<Option<DateTime<Utc>>>,
}

impl GuestUpdate {
    /// Update that records an arrival
    pub fn arrival(at: DateTime<Utc>) -> Self {
        Self {
            arrived: Some(true),
            arrived_at: Some(Some(at)),
            ..Default::default()
        }
    }

    /// Update that undoes an arrival
    pub fn departure() -> Self {
        Self {
            arrived: Some(false),
            arrived_at: Some(None),
            ..Default::default()
        }
    }
}
