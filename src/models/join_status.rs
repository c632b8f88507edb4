use serde::Serialize;

/// Whether a member is currently inside an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStatus {
    Joined, // N
    Free,   // Y
}

impl JoinStatus {
    pub fn code(&self) -> &str {
        match self {
            JoinStatus::Joined => "N",
            JoinStatus::Free => "Y",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "N" => Some(JoinStatus::Joined),
            "Y" => Some(JoinStatus::Free),
            _ => None,
        }
    }
}
