use super::conversion_error;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, ValidEvent};
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const EVENT_SELECT: &str = "SELECT id, event_name, date, location, description, image, event_type,
            focal_person_name, focal_person_number, focal_person_email,
            info_person_name, info_person_number, info_person_email,
            start_time, end_time, present_time, end_note, status, created_at
     FROM events";

fn optional_timestamp(row: &Row, column: &str) -> Result<Option<NaiveDateTime>> {
    let raw: Option<String> = row.get(column)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

pub fn map_event(row: &Row) -> Result<Event> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    let status: String = row.get("status")?;

    Ok(Event {
        id: row.get("id")?,
        event_name: row.get("event_name")?,
        date,
        location: row.get("location")?,
        description: row.get("description")?,
        image: row.get("image")?,
        event_type: row.get("event_type")?,
        focal_person_name: row.get("focal_person_name")?,
        focal_person_number: row.get("focal_person_number")?,
        focal_person_email: row.get("focal_person_email")?,
        info_person_name: row.get("info_person_name")?,
        info_person_number: row.get("info_person_number")?,
        info_person_email: row.get("info_person_email")?,
        start_time: optional_timestamp(row, "start_time")?,
        end_time: optional_timestamp(row, "end_time")?,
        present_time: row.get("present_time")?,
        end_note: row.get("end_note")?,
        active: status == "Y",
        created_at: row.get("created_at")?,
    })
}

pub fn insert_event(conn: &Connection, ev: &ValidEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (event_name, date, location, description, image, event_type,
                             focal_person_name, focal_person_number, focal_person_email,
                             info_person_name, info_person_number, info_person_email,
                             created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            ev.event_name,
            ev.date.format("%Y-%m-%d").to_string(),
            ev.location,
            ev.description,
            ev.image,
            ev.event_type,
            ev.focal_person_name,
            ev.focal_person_number,
            ev.focal_person_email,
            ev.info_person_name,
            ev.info_person_number,
            ev.info_person_email,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_event(conn: &Connection, id: i64, ev: &ValidEvent) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE events
         SET event_name = ?1, date = ?2, location = ?3, description = ?4, image = ?5,
             event_type = ?6, focal_person_name = ?7, focal_person_number = ?8,
             focal_person_email = ?9, info_person_name = ?10, info_person_number = ?11,
             info_person_email = ?12
         WHERE id = ?13",
        params![
            ev.event_name,
            ev.date.format("%Y-%m-%d").to_string(),
            ev.location,
            ev.description,
            ev.image,
            ev.event_type,
            ev.focal_person_name,
            ev.focal_person_number,
            ev.focal_person_email,
            ev.info_person_name,
            ev.info_person_number,
            ev.info_person_email,
            id,
        ],
    )?;
    Ok(n)
}

pub fn find_event(conn: &Connection, id: i64) -> AppResult<Option<Event>> {
    let sql = format!("{} WHERE id = ?1", EVENT_SELECT);
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([id], map_event).optional()?)
}

pub fn load_event(conn: &Connection, id: i64) -> AppResult<Event> {
    find_event(conn, id)?.ok_or(AppError::EventNotFound(id))
}

/// Id of another event already using `name`, if any.
pub fn find_event_id_by_name(
    conn: &Connection,
    name: &str,
    except: Option<i64>,
) -> AppResult<Option<i64>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id FROM events WHERE event_name = ?1 AND id IS NOT ?2 LIMIT 1",
    )?;
    Ok(stmt
        .query_row(params![name, except], |r| r.get(0))
        .optional()?)
}

pub fn list_active(conn: &Connection, limit: usize) -> AppResult<Vec<Event>> {
    let sql = format!(
        "{} WHERE status = 'Y' ORDER BY date ASC, id ASC LIMIT ?1",
        EVENT_SELECT
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([limit as i64], map_event)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_active(conn: &Connection, id: i64, active: bool) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE events SET status = ?1 WHERE id = ?2",
        params![if active { "Y" } else { "N" }, id],
    )?;
    Ok(n)
}

pub fn set_start_time(conn: &Connection, id: i64, at: &NaiveDateTime) -> AppResult<()> {
    conn.execute(
        "UPDATE events SET start_time = ?1 WHERE id = ?2",
        params![format_timestamp(at), id],
    )?;
    Ok(())
}

pub fn set_end_time(conn: &Connection, id: i64, at: &NaiveDateTime) -> AppResult<()> {
    conn.execute(
        "UPDATE events SET end_time = ?1 WHERE id = ?2",
        params![format_timestamp(at), id],
    )?;
    Ok(())
}

pub fn close_out(
    conn: &Connection,
    id: i64,
    present_time: &str,
    end_note: Option<&str>,
) -> AppResult<()> {
    conn.execute(
        "UPDATE events SET present_time = ?1, end_note = ?2 WHERE id = ?3",
        params![present_time, end_note, id],
    )?;
    Ok(())
}
