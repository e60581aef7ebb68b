// ABOUTME: doorlist CLI entry point for guest-list parsing
// ABOUTME: Provides subcommands: parse, summary, search

mod commands;
mod logging;

use clap::{Args, Parser, Subcommand};
use commands::input::InputConfig;

/// doorlist - Turn typed guest lists into door-ready guest records
#[derive(Parser)]
#[command(name = "doorlist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where guest text comes from and how to parse it
#[derive(Args)]
struct InputArgs {
    /// Guest list text file, one guest per line ("-" reads stdin)
    file: String,
    /// Guest list id used to derive guest ids
    #[arg(long, default_value = "gl1")]
    list_id: String,
    /// Parser config JSON file
    #[arg(long)]
    config: Option<String>,
    /// Maximum plus-ones per line (overrides the config)
    #[arg(long)]
    max_plus_ones: Option<u32>,
}

impl InputArgs {
    fn into_config(self) -> InputConfig {
        InputConfig {
            file: self.file,
            list_id: self.list_id,
            config_path: self.config,
            max_plus_ones: self.max_plus_ones,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a guest list and print every guest
    Parse {
        #[command(flatten)]
        input: InputArgs,
        /// Print guests as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show guest counts by type and gender
    Summary {
        #[command(flatten)]
        input: InputArgs,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search a guest list by name
    Search {
        #[command(flatten)]
        input: InputArgs,
        /// Case-insensitive part of a guest name
        query: String,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Parse { input, json } => commands::parse::run(&commands::parse::ParseConfig {
            input: input.into_config(),
            json,
            verbose: cli.verbose,
        }),
        Commands::Summary { input, json } => {
            commands::summary::run(&commands::summary::SummaryConfig {
                input: input.into_config(),
                json,
            })
        }
        Commands::Search { input, query } => {
            commands::search::run(&commands::search::SearchConfig {
                input: input.into_config(),
                query,
            })
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
