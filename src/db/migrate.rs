use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};
use tracing::{debug, info};

/// Ensure that the `log` table exists; it also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ordered schema steps. Each runs once and is marked in `log`.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_create_configuration",
        "Created configuration table (zones, districts)",
        r#"
        CREATE TABLE IF NOT EXISTS configuration (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            zone      TEXT,
            district  TEXT,
            status    TEXT NOT NULL DEFAULT 'Y' CHECK(status IN ('Y','N'))
        );
        "#,
    ),
    (
        "20250301_0002_create_members",
        "Created members table",
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name      TEXT NOT NULL,
            father_name    TEXT NOT NULL,
            zone           TEXT NOT NULL,
            mobile_number  TEXT NOT NULL,
            address        TEXT NOT NULL,
            education      TEXT NOT NULL,
            email          TEXT NOT NULL,
            cnic           TEXT NOT NULL,
            dob            TEXT NOT NULL,
            district       TEXT NOT NULL,
            age            INTEGER NOT NULL,
            profession     TEXT NOT NULL,
            image          TEXT,
            status         TEXT NOT NULL DEFAULT 'Y' CHECK(status IN ('Y','N')),
            join_status    TEXT NOT NULL DEFAULT 'Y' CHECK(join_status IN ('Y','N')),
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_members_status ON members(status, join_status);
        "#,
    ),
    (
        "20250301_0003_create_events",
        "Created events table",
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            event_name           TEXT NOT NULL,
            date                 TEXT NOT NULL,
            location             TEXT NOT NULL,
            description          TEXT,
            image                TEXT,
            event_type           TEXT,
            focal_person_name    TEXT NOT NULL,
            focal_person_number  TEXT NOT NULL,
            focal_person_email   TEXT NOT NULL,
            info_person_name     TEXT,
            info_person_number   TEXT,
            info_person_email    TEXT,
            start_time           TEXT,
            end_time             TEXT,
            present_time         TEXT,
            end_note             TEXT,
            status               TEXT NOT NULL DEFAULT 'Y' CHECK(status IN ('Y','N')),
            created_at           TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_events_name ON events(event_name);
        "#,
    ),
    (
        "20250301_0004_create_attendance",
        "Created attendance table",
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            event_id         INTEGER NOT NULL REFERENCES events(id),
            member_id        INTEGER REFERENCES members(id),
            member_clockin   TEXT,
            member_clockout  TEXT,
            event_status     TEXT CHECK(event_status IN ('Join','Leave','End')),
            present_hours    TEXT,
            created_at       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_event_status
            ON attendance(event_id, event_status);
        "#,
    ),
    (
        "20250412_0005_attendance_unique_member",
        "One attendance row per (event, member)",
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_attendance_event_member
            ON attendance(event_id, member_id)
            WHERE member_id IS NOT NULL;
        "#,
    ),
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, message: &str, sql: &str) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    tx.commit()?;
    Ok(())
}

/// Versions not yet applied to this database, in order.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for (version, _, _) in MIGRATIONS {
        if !is_applied(conn, version)? {
            out.push(*version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, message, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            debug!(version, "migration already applied");
            continue;
        }

        apply(conn, version, message, sql)?;
        info!(version, "migration applied");
        applied += 1;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_apply_once() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);
        assert!(pending_migrations(&conn).unwrap().is_empty());

        let marked: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(marked as usize, MIGRATIONS.len());
    }

    #[test]
    fn attendance_allows_many_start_markers_but_one_row_per_member() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();

        conn.execute_batch(
            "INSERT INTO events (event_name, date, location, focal_person_name,
                                 focal_person_number, focal_person_email, created_at)
             VALUES ('E', '2025-03-01', 'Hall', 'F', '1', 'f@x', 'now');
             INSERT INTO members (full_name, father_name, zone, mobile_number, address,
                                  education, email, cnic, dob, district, age, profession, created_at)
             VALUES ('M', 'F', 'Z', '1', 'A', 'E', 'm@x', 'C', '1990-01-01', 'D', 30, 'P', 'now');
             INSERT INTO attendance (event_id, created_at) VALUES (1, 'now');
             INSERT INTO attendance (event_id, created_at) VALUES (1, 'now');
             INSERT INTO attendance (event_id, member_id, event_status, created_at)
                 VALUES (1, 1, 'Join', 'now');",
        )
        .unwrap();

        let dup = conn.execute(
            "INSERT INTO attendance (event_id, member_id, event_status, created_at)
             VALUES (1, 1, 'Join', 'now')",
            [],
        );
        assert!(dup.is_err());
    }
}
