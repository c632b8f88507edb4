use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    messages::info("Initializing rAttendance…");
    messages::info(format!("Config file : {}", Config::config_file().display()));
    messages::info(format!("Database    : {}", cfg.database));

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    // the audit row is best effort
    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", cfg.database),
    ) {
        messages::warning(format!("Failed to write internal log: {}", e));
    }

    messages::success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
