use crate::db::attendance as attendance_db;
use crate::db::events as events_db;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceDetail;
use crate::models::attendance_status::AttendanceStatus;
use crate::models::event::{Event, EventForm};
use rusqlite::Connection;
use tracing::info;

/// High-level business logic for the event registry and its listings.
pub struct EventLogic;

impl EventLogic {
    /// Event names are unique.
    pub fn add(conn: &Connection, form: &EventForm) -> AppResult<Event> {
        let valid = form.validate()?;

        let tx = conn.unchecked_transaction()?;
        if events_db::find_event_id_by_name(&tx, &valid.event_name, None)?.is_some() {
            return Err(AppError::DuplicateEvent(valid.event_name));
        }

        let id = events_db::insert_event(&tx, &valid)?;
        ttlog(
            &tx,
            "event_add",
            &format!("event {}", id),
            &format!("Created '{}' on {}", valid.event_name, valid.date),
        )?;
        let event = events_db::load_event(&tx, id)?;
        tx.commit()?;

        info!(event_id = id, "event created");
        Ok(event)
    }

    pub fn get(conn: &Connection, id: i64) -> AppResult<Event> {
        events_db::load_event(conn, id)
    }

    pub fn list(conn: &Connection, limit: usize) -> AppResult<Vec<Event>> {
        events_db::list_active(conn, limit)
    }

    pub fn update(conn: &Connection, id: i64, form: &EventForm) -> AppResult<Event> {
        let valid = form.validate()?;

        let tx = conn.unchecked_transaction()?;
        events_db::load_event(&tx, id)?;
        if events_db::find_event_id_by_name(&tx, &valid.event_name, Some(id))?.is_some() {
            return Err(AppError::DuplicateEvent(valid.event_name));
        }

        events_db::update_event(&tx, id, &valid)?;
        ttlog(
            &tx,
            "event_edit",
            &format!("event {}", id),
            &format!("Updated '{}'", valid.event_name),
        )?;
        let event = events_db::load_event(&tx, id)?;
        tx.commit()?;

        info!(event_id = id, "event updated");
        Ok(event)
    }

    /// Soft delete. Returns the event as it was before being disabled.
    pub fn delete(conn: &Connection, id: i64) -> AppResult<Event> {
        let tx = conn.unchecked_transaction()?;
        let event = events_db::load_event(&tx, id)?;
        events_db::set_active(&tx, id, false)?;
        ttlog(
            &tx,
            "event_del",
            &format!("event {}", id),
            &format!("Disabled '{}'", event.event_name),
        )?;
        tx.commit()?;

        info!(event_id = id, "event disabled");
        Ok(event)
    }

    /// Attendance of an event, optionally narrowed to one state.
    pub fn attendees(
        conn: &Connection,
        event_id: i64,
        status: Option<AttendanceStatus>,
    ) -> AppResult<Vec<AttendanceDetail>> {
        events_db::load_event(conn, event_id)?;
        attendance_db::details_for_event(conn, event_id, status)
    }

    /// Number of records in each state, zero counts included.
    pub fn status_summary(
        conn: &Connection,
        event_id: i64,
    ) -> AppResult<Vec<(AttendanceStatus, i64)>> {
        events_db::load_event(conn, event_id)?;
        let counts = attendance_db::status_counts(conn, event_id)?;

        Ok([AttendanceStatus::Join, AttendanceStatus::Leave, AttendanceStatus::End]
            .into_iter()
            .map(|s| {
                let n = counts
                    .iter()
                    .find(|(c, _)| *c == s)
                    .map(|(_, n)| *n)
                    .unwrap_or(0);
                (s, n)
            })
            .collect())
    }
}
