use serde::Serialize;
use std::fmt;

/// Kind of lookup value kept in the `configuration` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Zone,
    District,
}

impl ReferenceKind {
    /// Column holding the value for this kind.
    pub fn column(&self) -> &'static str {
        match self {
            ReferenceKind::Zone => "zone",
            ReferenceKind::District => "district",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReferenceEntry {
    pub id: i64,
    pub kind: ReferenceKind,
    pub name: String,
    pub active: bool,
}
