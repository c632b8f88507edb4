//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (the attendance tracker lives in `core::tracker`).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::reference::ReferenceKind;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utils::path::resolve_under;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Member { action } => commands::member::handle(action, cfg),
        Commands::Zone { action } => commands::reference::handle(ReferenceKind::Zone, action, cfg),
        Commands::District { action } => {
            commands::reference::handle(ReferenceKind::District, action, cfg)
        }
        Commands::Event { action } => commands::event::handle(action, cfg),
        Commands::Start { .. }
        | Commands::Join { .. }
        | Commands::End { .. }
        | Commands::Attendees { .. } => commands::attendance::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `log_level` from the config.
fn init_tracing(cfg: &Config) {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("rattendance={}", cfg.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = resolve_under(&Config::config_dir(), custom_db)
            .to_string_lossy()
            .to_string();
    }

    init_tracing(&cfg);

    dispatch(&cli, &cfg)
}
