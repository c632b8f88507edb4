//! Queries on the `attendance` table.
//!
//! Rows with a NULL `member_id` are start markers written when an event is
//! started; every query returning records filters them out.

use super::conversion_error;
use super::members::{MEMBER_COLUMN_COUNT, map_member_at, member_columns};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceDetail, AttendanceRecord};
use crate::models::attendance_status::AttendanceStatus;
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const RECORD_COLUMNS: &str =
    "a.id, a.event_id, a.member_id, a.member_clockin, a.member_clockout, a.event_status, a.present_hours";

const RECORD_COLUMN_COUNT: usize = 7;

/// Map a row selected with `RECORD_COLUMNS`, starting at column `offset`.
fn map_record_at(row: &Row, offset: usize) -> Result<AttendanceRecord> {
    let clockin_raw: Option<String> = row.get(offset + 3)?;
    let member_clockin = clockin_raw
        .as_deref()
        .and_then(parse_timestamp)
        .ok_or_else(|| {
            conversion_error(
                offset + 3,
                AppError::InvalidDate(format!("missing clock-in: {:?}", clockin_raw)),
            )
        })?;

    let clockout_raw: Option<String> = row.get(offset + 4)?;
    let member_clockout = clockout_raw.as_deref().and_then(parse_timestamp);

    let status_raw: Option<String> = row.get(offset + 5)?;
    let event_status = status_raw
        .as_deref()
        .and_then(AttendanceStatus::from_db_str)
        .ok_or_else(|| {
            conversion_error(
                offset + 5,
                AppError::InvalidStatus(status_raw.clone().unwrap_or_default()),
            )
        })?;

    Ok(AttendanceRecord {
        id: row.get(offset)?,
        event_id: row.get(offset + 1)?,
        member_id: row.get(offset + 2)?,
        member_clockin,
        member_clockout,
        event_status,
        present_hours: row.get(offset + 6)?,
    })
}

pub fn map_record(row: &Row) -> Result<AttendanceRecord> {
    map_record_at(row, 0)
}

/// Any attendance row at all (marker or member) for the event.
pub fn has_rows(conn: &Connection, event_id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM attendance WHERE event_id = ?1 LIMIT 1")?;
    Ok(stmt.exists([event_id])?)
}

pub fn has_start_marker(conn: &Connection, event_id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM attendance WHERE event_id = ?1 AND member_id IS NULL LIMIT 1",
    )?;
    Ok(stmt.exists([event_id])?)
}

pub fn insert_start_marker(conn: &Connection, event_id: i64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO attendance (event_id, created_at) VALUES (?1, ?2)",
        params![event_id, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn find_record(
    conn: &Connection,
    event_id: i64,
    member_id: i64,
) -> AppResult<Option<AttendanceRecord>> {
    let sql = format!(
        "SELECT {} FROM attendance a WHERE a.event_id = ?1 AND a.member_id = ?2",
        RECORD_COLUMNS
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt
        .query_row(params![event_id, member_id], map_record)
        .optional()?)
}

pub fn load_record(conn: &Connection, id: i64) -> AppResult<AttendanceRecord> {
    let sql = format!("SELECT {} FROM attendance a WHERE a.id = ?1", RECORD_COLUMNS);
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([id], map_record)?)
}

pub fn insert_clockin(
    conn: &Connection,
    event_id: i64,
    member_id: i64,
    at: &NaiveDateTime,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendance (event_id, member_id, member_clockin, event_status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            event_id,
            member_id,
            format_timestamp(at),
            AttendanceStatus::Join.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Stamp the clock-out of a record that is still open.
///
/// The update only applies while the row is in `Join` with no clock-out, so
/// a concurrent clock-out makes this return 0.
pub fn clock_out(
    conn: &Connection,
    id: i64,
    at: &NaiveDateTime,
    status: AttendanceStatus,
    present_hours: &str,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE attendance
         SET member_clockout = ?1, event_status = ?2, present_hours = ?3
         WHERE id = ?4 AND member_clockout IS NULL AND event_status = ?5",
        params![
            format_timestamp(at),
            status.to_db_str(),
            present_hours,
            id,
            AttendanceStatus::Join.to_db_str(),
        ],
    )?;
    Ok(n)
}

/// Move a record from `from` to `to`, leaving times untouched.
pub fn change_status(
    conn: &Connection,
    id: i64,
    from: AttendanceStatus,
    to: AttendanceStatus,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE attendance SET event_status = ?1 WHERE id = ?2 AND event_status = ?3",
        params![to.to_db_str(), id, from.to_db_str()],
    )?;
    Ok(n)
}

/// All member records of an event, in clock-in order.
pub fn records_for_event(conn: &Connection, event_id: i64) -> AppResult<Vec<AttendanceRecord>> {
    let sql = format!(
        "SELECT {} FROM attendance a
         WHERE a.event_id = ?1 AND a.member_id IS NOT NULL
         ORDER BY a.member_clockin ASC, a.id ASC",
        RECORD_COLUMNS
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([event_id], map_record)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Records of an event joined with their member and the event headline.
pub fn details_for_event(
    conn: &Connection,
    event_id: i64,
    status: Option<AttendanceStatus>,
) -> AppResult<Vec<AttendanceDetail>> {
    let sql = format!(
        "SELECT {}, {}, e.event_name, e.start_time
         FROM attendance a
         JOIN members m ON m.id = a.member_id
         JOIN events e ON e.id = a.event_id
         WHERE a.event_id = ?1 AND (?2 IS NULL OR a.event_status = ?2)
         ORDER BY a.member_clockin ASC, a.id ASC",
        RECORD_COLUMNS,
        member_columns()
    );

    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(
        params![event_id, status.map(|s| s.to_db_str())],
        |row| {
            let event_col = RECORD_COLUMN_COUNT + MEMBER_COLUMN_COUNT;
            let start_raw: Option<String> = row.get(event_col + 1)?;
            Ok(AttendanceDetail {
                record: map_record_at(row, 0)?,
                member: map_member_at(row, RECORD_COLUMN_COUNT)?,
                event_name: row.get(event_col)?,
                event_start_time: start_raw.as_deref().and_then(parse_timestamp),
            })
        },
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Count of member records per status for an event.
pub fn status_counts(conn: &Connection, event_id: i64) -> AppResult<Vec<(AttendanceStatus, i64)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT event_status, COUNT(*) FROM attendance
         WHERE event_id = ?1 AND member_id IS NOT NULL
         GROUP BY event_status",
    )?;
    let rows = stmt.query_map([event_id], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (raw, n) = r?;
        if let Some(s) = AttendanceStatus::from_db_str(&raw) {
            out.push((s, n));
        }
    }
    Ok(out)
}
