//! prodtrack library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (auth, store, core aggregation, export, ui).

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use auth::{Session, YamlCredentials, authenticate};
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use std::path::Path;

/// Central command dispatcher. Every data command receives the authenticated
/// session explicitly; there is no process-wide current user.
pub fn dispatch(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    match &cli.command {
        Commands::Init | Commands::Config { .. } => Ok(()),
        Commands::Overview { .. } => cli::commands::overview::handle(&cli.command, cfg, session),
        Commands::Analyst { .. } => cli::commands::analyst::handle(&cli.command, cfg, session),
        Commands::Log { .. } => cli::commands::logbook::handle(&cli.command, cfg, session),
        Commands::Upload { .. } => cli::commands::upload::handle(&cli.command, cfg, session),
        Commands::Save => cli::commands::save::handle(cfg, session),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, session),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg, session),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    // Command-line overrides, mainly for tests and scripted use.
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    if let Some(creds) = &cli.credentials {
        cfg.credentials_file = creds.clone();
    }

    // init and config run without a session; everything else is gated.
    match &cli.command {
        Commands::Init => return cli::commands::init::handle(),
        Commands::Config { .. } => return cli::commands::config::handle(&cli.command, &cfg),
        _ => {}
    }

    let (user, password) = match (&cli.user, &cli.password) {
        (Some(u), Some(p)) => (u.as_str(), p.as_str()),
        _ => return Err(AppError::MissingCredentials),
    };

    let store = YamlCredentials::load(Path::new(&cfg.credentials_file))?;
    let session = authenticate(&store, user, password)?;

    dispatch(&cli, &cfg, &session)
}
