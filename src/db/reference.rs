//! Zones and districts, both kept in the `configuration` table: one row per
//! value, with only the column matching its kind filled in.

use crate::errors::AppResult;
use crate::models::reference::{ReferenceEntry, ReferenceKind};
use rusqlite::{Connection, OptionalExtension, params};

pub fn insert_entry(conn: &Connection, kind: ReferenceKind, name: &str) -> AppResult<i64> {
    let sql = format!("INSERT INTO configuration ({}) VALUES (?1)", kind.column());
    conn.execute(&sql, [name])?;
    Ok(conn.last_insert_rowid())
}

pub fn find_entry(
    conn: &Connection,
    kind: ReferenceKind,
    id: i64,
) -> AppResult<Option<ReferenceEntry>> {
    let col = kind.column();
    let sql = format!(
        "SELECT id, {col}, status FROM configuration WHERE id = ?1 AND {col} IS NOT NULL"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let entry = stmt
        .query_row([id], |row| {
            Ok(ReferenceEntry {
                id: row.get(0)?,
                kind,
                name: row.get(1)?,
                active: row.get::<_, String>(2)? == "Y",
            })
        })
        .optional()?;
    Ok(entry)
}

pub fn list_active(conn: &Connection, kind: ReferenceKind) -> AppResult<Vec<ReferenceEntry>> {
    let col = kind.column();
    let sql = format!(
        "SELECT id, {col} FROM configuration
         WHERE status = 'Y' AND {col} IS NOT NULL
         ORDER BY {col} ASC"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(ReferenceEntry {
            id: row.get(0)?,
            kind,
            name: row.get(1)?,
            active: true,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn rename_entry(conn: &Connection, kind: ReferenceKind, id: i64, name: &str) -> AppResult<usize> {
    let col = kind.column();
    let sql = format!("UPDATE configuration SET {col} = ?1 WHERE id = ?2 AND {col} IS NOT NULL");
    Ok(conn.execute(&sql, params![name, id])?)
}

pub fn set_active(conn: &Connection, kind: ReferenceKind, id: i64, active: bool) -> AppResult<usize> {
    let col = kind.column();
    let sql = format!("UPDATE configuration SET status = ?1 WHERE id = ?2 AND {col} IS NOT NULL");
    Ok(conn.execute(&sql, params![if active { "Y" } else { "N" }, id])?)
}
