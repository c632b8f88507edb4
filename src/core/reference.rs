use crate::db::log::ttlog;
use crate::db::reference as reference_db;
use crate::errors::{AppError, AppResult};
use crate::models::reference::{ReferenceEntry, ReferenceKind};
use rusqlite::Connection;
use tracing::info;

/// Zones and districts offered when registering members.
pub struct ReferenceLogic;

fn clean_name(kind: ReferenceKind, name: &str) -> AppResult<String> {
    let n = name.trim();
    if n.is_empty() {
        return Err(AppError::Validation(format!("{} name is required", kind)));
    }
    Ok(n.to_string())
}

fn not_found(kind: ReferenceKind, id: i64) -> AppError {
    AppError::ReferenceNotFound {
        kind: kind.to_string(),
        id,
    }
}

impl ReferenceLogic {
    pub fn add(conn: &Connection, kind: ReferenceKind, name: &str) -> AppResult<ReferenceEntry> {
        let name = clean_name(kind, name)?;

        let tx = conn.unchecked_transaction()?;
        let id = reference_db::insert_entry(&tx, kind, &name)?;
        ttlog(&tx, &format!("{}_add", kind), &name, &format!("Added {} '{}'", kind, name))?;
        let entry = reference_db::find_entry(&tx, kind, id)?.ok_or_else(|| not_found(kind, id))?;
        tx.commit()?;

        info!(%kind, id, "reference entry added");
        Ok(entry)
    }

    pub fn list(conn: &Connection, kind: ReferenceKind) -> AppResult<Vec<ReferenceEntry>> {
        reference_db::list_active(conn, kind)
    }

    pub fn update(
        conn: &Connection,
        kind: ReferenceKind,
        id: i64,
        name: &str,
    ) -> AppResult<ReferenceEntry> {
        let name = clean_name(kind, name)?;

        let tx = conn.unchecked_transaction()?;
        if reference_db::rename_entry(&tx, kind, id, &name)? == 0 {
            return Err(not_found(kind, id));
        }
        ttlog(
            &tx,
            &format!("{}_edit", kind),
            &format!("{} {}", kind, id),
            &format!("Renamed to '{}'", name),
        )?;
        let entry = reference_db::find_entry(&tx, kind, id)?.ok_or_else(|| not_found(kind, id))?;
        tx.commit()?;

        Ok(entry)
    }

    /// Soft delete.
    pub fn delete(conn: &Connection, kind: ReferenceKind, id: i64) -> AppResult<ReferenceEntry> {
        let tx = conn.unchecked_transaction()?;
        if reference_db::set_active(&tx, kind, id, false)? == 0 {
            return Err(not_found(kind, id));
        }
        let entry = reference_db::find_entry(&tx, kind, id)?.ok_or_else(|| not_found(kind, id))?;
        ttlog(
            &tx,
            &format!("{}_del", kind),
            &format!("{} {}", kind, id),
            &format!("Disabled '{}'", entry.name),
        )?;
        tx.commit()?;

        Ok(entry)
    }
}
