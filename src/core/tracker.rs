//! Event attendance lifecycle: start, join (clock-in / clock-out), end.
//!
//! Every operation runs in one IMMEDIATE transaction, so the write lock is
//! held from the first read to the commit and two requests for the same
//! member cannot both see an open record.

use crate::db::attendance as attendance_db;
use crate::db::events as events_db;
use crate::db::log::ttlog;
use crate::db::members as members_db;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceDetail, JoinOutcome};
use crate::models::attendance_status::{AttendanceStatus, Trigger};
use crate::models::event::Event;
use crate::models::join_status::JoinStatus;
use crate::utils::time::{self, elapsed_readable};
use chrono::NaiveDateTime;
use rusqlite::{Connection, TransactionBehavior};
use tracing::{debug, info, warn};

/// Source of "now" for clock-in/out stamps.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock, whole seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        time::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

pub struct AttendanceTracker<'a, C: Clock = SystemClock> {
    conn: &'a mut Connection,
    clock: C,
}

impl<'a> AttendanceTracker<'a, SystemClock> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self {
            conn,
            clock: SystemClock,
        }
    }
}

impl<'a, C: Clock> AttendanceTracker<'a, C> {
    pub fn with_clock(conn: &'a mut Connection, clock: C) -> Self {
        Self { conn, clock }
    }

    /// Stamp the event's start time and write its start marker, once.
    ///
    /// Later calls change nothing and just return the event.
    pub fn start_event(&mut self, event_id: i64) -> AppResult<Event> {
        let now = self.clock.now();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let event = events_db::load_event(&tx, event_id)?;
        let has_rows = attendance_db::has_rows(&tx, event_id)?;

        if !has_rows || !event.is_started() {
            attendance_db::insert_start_marker(&tx, event_id)?;
            events_db::set_start_time(&tx, event_id, &now)?;
            ttlog(
                &tx,
                "start",
                &format!("event {}", event_id),
                &format!("Event '{}' started at {}", event.event_name, time::format_timestamp(&now)),
            )?;
            info!(event_id, start = %now, "event started");
        } else {
            debug!(event_id, "event already started");
        }

        let event = events_db::load_event(&tx, event_id)?;
        tx.commit()?;
        Ok(event)
    }

    /// First call clocks the member in, second clocks them out.
    /// Any further call is rejected with `AlreadyClockedOut`.
    pub fn join_event(&mut self, event_id: i64, member_id: i64) -> AppResult<JoinOutcome> {
        let now = self.clock.now();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !attendance_db::has_start_marker(&tx, event_id)? {
            warn!(event_id, member_id, "join rejected: event not started");
            return Err(AppError::NotStarted(event_id));
        }

        let member = members_db::load_member(&tx, member_id)?;
        let existing = attendance_db::find_record(&tx, event_id, member_id)?;

        let next = AttendanceStatus::transition(existing.as_ref().map(|r| r.event_status), Trigger::Toggle)
            .map_err(|_| {
                warn!(event_id, member_id, "join rejected: already clocked out");
                AppError::AlreadyClockedOut {
                    event_id,
                    member_id,
                }
            })?;

        let outcome = match existing {
            None => {
                let id = attendance_db::insert_clockin(&tx, event_id, member_id, &now)?;
                members_db::set_join_status(&tx, member_id, JoinStatus::Joined)?;
                ttlog(
                    &tx,
                    "join",
                    &format!("event {} member {}", event_id, member_id),
                    &format!("{} clocked in", member.full_name),
                )?;
                info!(event_id, member_id, at = %now, "member clocked in");

                JoinOutcome::ClockedIn {
                    member: members_db::load_member(&tx, member_id)?,
                    record: attendance_db::load_record(&tx, id)?,
                }
            }
            Some(record) => {
                let present_hours = elapsed_readable(record.member_clockin, now);
                let updated = attendance_db::clock_out(&tx, record.id, &now, next, &present_hours)?;
                if updated == 0 {
                    return Err(AppError::AlreadyClockedOut {
                        event_id,
                        member_id,
                    });
                }
                ttlog(
                    &tx,
                    "leave",
                    &format!("event {} member {}", event_id, member_id),
                    &format!("{} clocked out after {}", member.full_name, present_hours),
                )?;
                info!(event_id, member_id, at = %now, %present_hours, "member clocked out");

                JoinOutcome::ClockedOut {
                    record: attendance_db::load_record(&tx, record.id)?,
                }
            }
        };

        tx.commit()?;
        Ok(outcome)
    }

    /// Close the event: stamp its end, clock out whoever is still in, move
    /// every record to `End` and free all joined members.
    ///
    /// The member reset is global, not limited to this event's attendees.
    pub fn end_event(
        &mut self,
        event_id: i64,
        end_note: Option<&str>,
    ) -> AppResult<Vec<AttendanceDetail>> {
        let now = self.clock.now();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let event = events_db::load_event(&tx, event_id)?;
        let started_at = event.start_time.ok_or(AppError::EventNotFound(event_id))?;

        let ended_at = match event.end_time {
            Some(t) => t,
            None => {
                events_db::set_end_time(&tx, event_id, &now)?;
                now
            }
        };

        let present_time = elapsed_readable(started_at, ended_at);
        events_db::close_out(&tx, event_id, &present_time, end_note)?;

        let mut clocked_out = 0;
        let mut closed = 0;
        for record in attendance_db::records_for_event(&tx, event_id)? {
            let next = AttendanceStatus::transition(Some(record.event_status), Trigger::Close)
                .map_err(|e| AppError::InvalidStatus(format!("{:?}", e)))?;

            if !record.event_status.is_clocked_out() {
                let hours = elapsed_readable(record.member_clockin, now);
                clocked_out += attendance_db::clock_out(&tx, record.id, &now, next, &hours)?;
            } else if record.event_status != next {
                closed += attendance_db::change_status(&tx, record.id, record.event_status, next)?;
            }
        }

        let freed = members_db::reset_all_joined(&tx)?;

        ttlog(
            &tx,
            "end",
            &format!("event {}", event_id),
            &format!(
                "Event '{}' ended after {} ({} clocked out, {} closed, {} members freed)",
                event.event_name, present_time, clocked_out, closed, freed
            ),
        )?;
        info!(
            event_id,
            %present_time,
            clocked_out,
            closed,
            freed,
            "event ended"
        );

        let details = attendance_db::details_for_event(&tx, event_id, None)?;
        tx.commit()?;
        Ok(details)
    }
}
