//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError so that the attendance
//! failures reach the caller as distinct outcomes instead of panics.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Persistence failure: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Attendance lifecycle
    // ---------------------------
    #[error("Event not found: {0}")]
    EventNotFound(i64),

    #[error("Member not found: {0}")]
    MemberNotFound(i64),

    #[error("Event {0} has not been started")]
    NotStarted(i64),

    #[error("Member {member_id} has already clocked out of event {event_id}")]
    AlreadyClockedOut { event_id: i64, member_id: i64 },

    // ---------------------------
    // Registry errors
    // ---------------------------
    #[error("No {kind} found with id {id}")]
    ReferenceNotFound { kind: String, id: i64 },

    #[error("Event already exists: {0}")]
    DuplicateEvent(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid attendance status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Config / output errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

impl AppError {
    /// True for the lifecycle failures a caller is expected to report back
    /// to the user (as opposed to storage or configuration problems).
    pub fn is_attendance_rejection(&self) -> bool {
        matches!(
            self,
            AppError::EventNotFound(_)
                | AppError::MemberNotFound(_)
                | AppError::NotStarted(_)
                | AppError::AlreadyClockedOut { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
