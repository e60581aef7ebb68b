// ABOUTME: Shared input handling for doorlist commands
// ABOUTME: Reads guest text from a file or stdin and builds the configured parser

use doorlist_lib::{GuestListParser, ParseOutcome, ParserConfig, Result};
use std::io;
use tracing::debug;

/// Input options common to every command
pub struct InputConfig {
    pub file: String,
    pub list_id: String,
    pub config_path: Option<String>,
    pub max_plus_ones: Option<u32>,
}

impl InputConfig {
    /// Parser config from `--config`, with `--max-plus-ones` applied on top
    pub fn parser_config(&self) -> Result<ParserConfig> {
        let mut config = match &self.config_path {
            Some(path) => {
                debug!(path = %path, "loading parser config");
                ParserConfig::from_file(path)?
            }
            None => ParserConfig::default(),
        };
        if let Some(max) = self.max_plus_ones {
            config.max_plus_ones = Some(max);
        }
        Ok(config)
    }

    /// Raw guest text
    ///
    /// A leading byte-order mark is dropped.
    pub fn read_text(&self) -> Result<String> {
        let text = if self.file == "-" {
            io::read_to_string(io::stdin())?
        } else {
            std::fs::read_to_string(&self.file)?
        };
        match text.strip_prefix('\u{FEFF}') {
            Some(rest) => Ok(rest.to_string()),
            None => Ok(text),
        }
    }

    pub fn parser(&self) -> Result<GuestListParser> {
        Ok(GuestListParser::new(self.parser_config()?))
    }

    /// Read and parse the guest list
    pub fn load(&self) -> Result<ParseOutcome> {
        let parser = self.parser()?;
        let text = self.read_text()?;
        Ok(parser.parse(&text, &self.list_id))
    }
}
