use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, sql: &str) -> rusqlite::Result<i64> {
    pool.conn.query_row(sql, [], |row| row.get(0))
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let members = count(pool, "SELECT COUNT(*) FROM members WHERE status = 'Y'")?;
    let joined = count(pool, "SELECT COUNT(*) FROM members WHERE join_status = 'N'")?;
    let events = count(pool, "SELECT COUNT(*) FROM events WHERE status = 'Y'")?;
    let records = count(
        pool,
        "SELECT COUNT(*) FROM attendance WHERE member_id IS NOT NULL",
    )?;

    println!("{}• Active members:{} {}{}{}", CYAN, RESET, GREEN, members, RESET);
    println!("{}• Currently joined:{} {}", CYAN, RESET, joined);
    println!("{}• Active events:{} {}{}{}", CYAN, RESET, GREEN, events, RESET);
    println!("{}• Attendance records:{} {}", CYAN, RESET, records);

    //
    // 3) LAST CLOSED EVENT
    //
    let last_closed: Option<(String, String)> = pool
        .conn
        .query_row(
            "SELECT event_name, end_time FROM events
             WHERE end_time IS NOT NULL AND end_time NOT LIKE '0000-00-00%'
             ORDER BY end_time DESC LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?;

    match last_closed {
        Some((name, at)) => println!("{}• Last closed event:{} {} ({})", CYAN, RESET, name, at),
        None => println!("{}• Last closed event:{} {GREY}--{RESET}", CYAN, RESET),
    }

    println!();
    Ok(())
}
