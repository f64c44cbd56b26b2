use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::planner::COMBOS_PER_DAY;

/// Daily Combos — pick the best-of meal combos from a CSV menu.
#[derive(Parser, Debug)]
#[command(name = "daily-combos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log filter (overrides DAILY_COMBOS_LOG; RUST_LOG still wins).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Run the HTTP service (POST /daily-combos).
    Serve {
        /// Address to bind.
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on.
        #[arg(short, long)]
        port: Option<u16>,

        /// Seed every request's sampler for reproducible combos.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Load a CSV menu from disk and print combos.
    Plan {
        /// Path to the CSV menu.
        file: PathBuf,

        /// Seed the sampler for reproducible combos.
        #[arg(long)]
        seed: Option<u64>,

        /// Number of combos to generate.
        #[arg(short = 'n', long, default_value_t = COMBOS_PER_DAY)]
        count: usize,

        /// Print the HTTP response body instead of a table.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve {
            host: None,
            port: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["daily-combos"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::default());
    }

    #[test]
    fn test_plan_arguments() {
        let cli =
            Cli::try_parse_from(["daily-combos", "plan", "menu.csv", "--seed", "7", "-n", "5"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Plan {
                file: PathBuf::from("menu.csv"),
                seed: Some(7),
                count: 5,
                json: false,
            })
        );
    }
}
