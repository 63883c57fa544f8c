//! rShuttle library root.
//! Exposes the CLI parser, the roster engine (filter, marks, ordering),
//! the feed adapter and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod feed;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Stations => cli::commands::stations::handle(cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Session => cli::commands::session::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    logging::init();

    let cli = Cli::parse();

    // `init` must work even when the existing file is broken.
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load()?,
    };

    dispatch(&cli, &cfg)
}
