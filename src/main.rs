use std::path::Path;

use clap::Parser;
use tracing::info;

use daily_combos_rs::cli::{Cli, Command};
use daily_combos_rs::config::ServerConfig;
use daily_combos_rs::error::{ComboError, Result};
use daily_combos_rs::interface::{display_batch, display_load_report};
use daily_combos_rs::logging;
use daily_combos_rs::menu::load_menu_from_path;
use daily_combos_rs::planner::{create_batch, RngSampler};
use daily_combos_rs::server;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = ServerConfig::from_env()?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    logging::init(&config.log_level)?;

    match cli.command.unwrap_or_default() {
        Command::Serve { host, port, seed } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            cmd_serve(&config)
        }
        Command::Plan {
            file,
            seed,
            count,
            json,
        } => cmd_plan(&file, seed.or(config.seed), count, json),
    }
}

/// Run the HTTP service until Ctrl-C.
fn cmd_serve(config: &ServerConfig) -> Result<()> {
    info!("{}", config.summary());
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(config))
}

/// Generate combos from a CSV file on disk.
fn cmd_plan(file: &Path, seed: Option<u64>, count: usize, json: bool) -> Result<()> {
    if count == 0 {
        return Err(ComboError::InvalidInput(
            "--count must be at least 1".to_string(),
        ));
    }

    let (menu, report) = load_menu_from_path(file)?;

    if !json {
        display_load_report(&report);
    }

    if !menu.is_complete() {
        return Err(ComboError::IncompleteMenu);
    }

    let mut sampler = RngSampler::from_seed_option(seed);
    let batch = create_batch(&menu, &mut sampler, count)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        display_batch(&batch);
    }

    Ok(())
}
