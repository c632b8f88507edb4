use super::attendance_status::AttendanceStatus;
use super::member::Member;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One member's attendance within one event.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub event_id: i64,
    pub member_id: i64,
    pub member_clockin: NaiveDateTime,
    pub member_clockout: Option<NaiveDateTime>,
    pub event_status: AttendanceStatus,
    pub present_hours: Option<String>,
}

/// Record merged with its member and the owning event's headline fields.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceDetail {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    pub member: Member,
    pub event_name: String,
    pub event_start_time: Option<NaiveDateTime>,
}

/// Result of a join request: either a fresh clock-in or a clock-out.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum JoinOutcome {
    ClockedIn {
        member: Member,
        record: AttendanceRecord,
    },
    ClockedOut {
        record: AttendanceRecord,
    },
}

impl JoinOutcome {
    pub fn record(&self) -> &AttendanceRecord {
        match self {
            JoinOutcome::ClockedIn { record, .. } => record,
            JoinOutcome::ClockedOut { record } => record,
        }
    }

    pub fn status(&self) -> AttendanceStatus {
        self.record().event_status
    }
}
