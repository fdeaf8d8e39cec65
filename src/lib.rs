//! shiftboard library root.
//! Exposes the CLI parser, the high-level run() function, the dashboard
//! state store and its storage backends.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::store::Store;
use crate::errors::AppResult;
use crate::storage::{KeyValueStorage, MemoryStorage, SqliteStorage};
use crate::ui::messages::warning;
use tracing::warn;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        cmd => {
            let mut store = Store::load_with_key(open_storage(cfg), &cfg.storage_key);
            dispatch_board(cmd, cfg, &mut store)
        }
    }
}

/// Open the configured database. When it cannot be opened the board runs on
/// process-local storage, so the command still works but nothing is kept.
fn open_storage(cfg: &Config) -> Box<dyn KeyValueStorage> {
    match SqliteStorage::open(&cfg.database) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            warn!(
                database = %cfg.database,
                error = %e,
                "cannot open database, using memory storage"
            );
            warning(format!(
                "Cannot open database '{}' ({e}); changes will not be saved.",
                cfg.database
            ));
            Box::new(MemoryStorage::new())
        }
    }
}

/// Dispatch the commands that operate on a loaded board.
pub fn dispatch_board<S: KeyValueStorage>(
    cmd: &Commands,
    cfg: &Config,
    store: &mut Store<S>,
) -> AppResult<()> {
    match cmd {
        Commands::Show => cli::commands::show::handle(store, cfg),
        Commands::Add => cli::commands::add::handle(store),
        Commands::Del { .. } => cli::commands::del::handle(cmd, store),
        Commands::Reset { .. } => cli::commands::reset::handle(cmd, store),
        Commands::Mode => cli::commands::mode::handle(store),
        Commands::Set { .. } => cli::commands::set::handle(cmd, store),
        Commands::Cycle { .. } => cli::commands::cycle::handle(cmd, store),
        Commands::Export { .. } => cli::commands::export::handle(cmd, store),
        Commands::Init | Commands::Config { .. } => Ok(()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics
    logging::init_tracing(cli.verbose);

    // 3️⃣ load config once
    let mut cfg = Config::load()?;

    // 4️⃣ command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::resolve_db_path(custom_db)?
            .to_string_lossy()
            .to_string();
    }
    if let Some(key) = &cli.key {
        cfg.storage_key = key.clone();
    }
    if cli.no_color {
        cfg.color = false;
    }

    dispatch(&cli, &cfg)
}
