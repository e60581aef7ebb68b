// ABOUTME: Parser configuration loaded from JSON
// ABOUTME: Controls the plus-one cap and the name suffix given to plus-one guests

use crate::{DoorlistError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default cap on plus-ones synthesized from a single line
pub const DEFAULT_MAX_PLUS_ONES: u32 = 50;

/// Default suffix appended to a primary guest's name for each plus-one
pub const DEFAULT_PLUS_ONE_SUFFIX: &str = " (Guest)";

/// Options for [`GuestListParser`](crate::GuestListParser)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserConfig {
    /// Upper bound on `+N`; `None` accepts any count
    pub max_plus_ones: Option<u32>,
    /// Appended to the primary name to name each plus-one
    pub plus_one_suffix: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_plus_ones: Some(DEFAULT_MAX_PLUS_ONES),
            plus_one_suffix: DEFAULT_PLUS_ONE_SUFFIX.to_string(),
        }
    }
}

impl ParserConfig {
    /// Config with no plus-one cap
    pub fn unbounded() -> Self {
        Self {
            max_plus_ones: None,
            ..Self::default()
        }
    }

    /// Load parser config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse parser config from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would make plus-ones indistinguishable from their primary
    pub fn validate(&self) -> Result<()> {
        if self.plus_one_suffix.trim().is_empty() {
            return Err(DoorlistError::Config(
                "plusOneSuffix must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
