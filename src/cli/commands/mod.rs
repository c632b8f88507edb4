pub mod attendance;
pub mod config;
pub mod db;
pub mod event;
pub mod init;
pub mod log;
pub mod member;
pub mod reference;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use serde::Serialize;

/// Open the configured database with every migration applied.
pub fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Command results go to stdout as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
