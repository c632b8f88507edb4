use serde::Serialize;
use std::fmt;

/// State of a member's attendance record within one event.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AttendanceStatus {
    Join,
    Leave,
    End,
}

/// What is being asked of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A join request from the member (clock-in first, clock-out second).
    Toggle,
    /// The event is being closed out.
    Close,
}

/// A transition the state table does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectedTransition {
    pub from: Option<AttendanceStatus>,
    pub trigger: Trigger,
}

impl AttendanceStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Join => "Join",
            AttendanceStatus::Leave => "Leave",
            AttendanceStatus::End => "End",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Join" => Some(AttendanceStatus::Join),
            "Leave" => Some(AttendanceStatus::Leave),
            "End" => Some(AttendanceStatus::End),
            _ => None,
        }
    }

    /// Helper: parse user input (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "join" => Some(AttendanceStatus::Join),
            "leave" => Some(AttendanceStatus::Leave),
            "end" => Some(AttendanceStatus::End),
            _ => None,
        }
    }

    /// A record is clocked out in every state but `Join`.
    pub fn is_clocked_out(&self) -> bool {
        !matches!(self, AttendanceStatus::Join)
    }

    /// The single transition table of the attendance lifecycle.
    ///
    /// ```text
    /// (none) --Toggle--> Join
    /// Join   --Toggle--> Leave
    /// Join   --Close-->  End
    /// Leave  --Close-->  End
    /// End    --Close-->  End
    /// ```
    ///
    /// Everything else is rejected. Callers map a rejected `Toggle` to
    /// "already clocked out".
    pub fn transition(
        from: Option<AttendanceStatus>,
        trigger: Trigger,
    ) -> Result<AttendanceStatus, RejectedTransition> {
        use AttendanceStatus::*;

        match (from, trigger) {
            (None, Trigger::Toggle) => Ok(Join),
            (Some(Join), Trigger::Toggle) => Ok(Leave),
            (Some(Join | Leave | End), Trigger::Close) => Ok(End),
            _ => Err(RejectedTransition { from, trigger }),
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}
