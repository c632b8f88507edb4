use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages;

/// `db` maintenance flags, applied in order: migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    // opened without migrating: only `--migrate` touches the schema
    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        let pending = pending_migrations(&pool.conn)?;
        if pending.is_empty() {
            messages::info("Schema is up to date.");
        }
        for version in &pending {
            messages::info(format!("Applying {}", version));
        }
        let applied = run_pending_migrations(&pool.conn)?;
        messages::success(format!("{} migration(s) applied.", applied));
    }

    if *info {
        stats::print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            messages::success("Integrity check passed.");
        } else {
            messages::warning(format!("Integrity check failed: {}", integrity));
        }
    }

    if *vacuum {
        pool.conn.execute_batch("VACUUM;")?;
        messages::success("Vacuum completed.");
    }

    Ok(())
}
