use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::Store;
use crate::errors::AppResult;
use crate::storage::SqliteStorage;
use crate::ui::messages::success;
use std::path::PathBuf;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database, seeded with the default board
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // `run()` has already resolved `--db` into `cfg.database`
    let custom_db = cli.db.as_ref().map(|_| PathBuf::from(&cfg.database));
    let db_path = Config::init_all(custom_db, cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing shiftboard…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_str);

    // loading an empty database writes the default board straight away
    let storage = SqliteStorage::open(&db_str)?;
    let store = Store::load_with_key(storage, &cfg.storage_key);

    success(format!(
        "Board ready with {} row(s) under key '{}'",
        store.len(),
        store.key()
    ));
    Ok(())
}
