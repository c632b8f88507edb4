use super::conversion_error;
use crate::errors::{AppError, AppResult};
use crate::models::join_status::JoinStatus;
use crate::models::member::{Member, ValidMember};
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const MEMBER_COLUMNS: &str = "m.id, m.full_name, m.father_name, m.zone, m.mobile_number,
     m.address, m.education, m.email, m.cnic, m.dob, m.district, m.age,
     m.profession, m.image, m.status, m.join_status, m.created_at";

pub fn member_select() -> String {
    format!("SELECT {} FROM members m", MEMBER_COLUMNS)
}

/// Map a row selected with `MEMBER_COLUMNS`, starting at column `offset`.
pub fn map_member_at(row: &Row, offset: usize) -> Result<Member> {
    let dob_str: String = row.get(offset + 9)?;
    let dob = NaiveDate::parse_from_str(&dob_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(offset + 9, AppError::InvalidDate(dob_str.clone())))?;

    let status: String = row.get(offset + 14)?;
    let join_str: String = row.get(offset + 15)?;
    let join_status = JoinStatus::from_db_str(&join_str).ok_or_else(|| {
        conversion_error(
            offset + 15,
            AppError::Validation(format!("Invalid join status: {}", join_str)),
        )
    })?;

    Ok(Member {
        id: row.get(offset)?,
        full_name: row.get(offset + 1)?,
        father_name: row.get(offset + 2)?,
        zone: row.get(offset + 3)?,
        mobile_number: row.get(offset + 4)?,
        address: row.get(offset + 5)?,
        education: row.get(offset + 6)?,
        email: row.get(offset + 7)?,
        cnic: row.get(offset + 8)?,
        dob,
        district: row.get(offset + 10)?,
        age: row.get(offset + 11)?,
        profession: row.get(offset + 12)?,
        image: row.get(offset + 13)?,
        active: status == "Y",
        join_status,
        created_at: row.get(offset + 16)?,
    })
}

pub fn map_member(row: &Row) -> Result<Member> {
    map_member_at(row, 0)
}

/// Number of columns `map_member_at` consumes.
pub const MEMBER_COLUMN_COUNT: usize = 17;

pub fn member_columns() -> &'static str {
    MEMBER_COLUMNS
}

pub fn insert_member(conn: &Connection, m: &ValidMember) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO members (full_name, father_name, zone, mobile_number, address,
                              education, email, cnic, dob, district, age, profession,
                              image, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            m.full_name,
            m.father_name,
            m.zone,
            m.mobile_number,
            m.address,
            m.education,
            m.email,
            m.cnic,
            m.dob.format("%Y-%m-%d").to_string(),
            m.district,
            m.age,
            m.profession,
            m.image,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update every profile field. Returns the number of rows touched.
pub fn update_member(conn: &Connection, id: i64, m: &ValidMember) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE members
         SET full_name = ?1, father_name = ?2, zone = ?3, mobile_number = ?4,
             address = ?5, education = ?6, email = ?7, cnic = ?8, dob = ?9,
             district = ?10, age = ?11, profession = ?12, image = ?13
         WHERE id = ?14",
        params![
            m.full_name,
            m.father_name,
            m.zone,
            m.mobile_number,
            m.address,
            m.education,
            m.email,
            m.cnic,
            m.dob.format("%Y-%m-%d").to_string(),
            m.district,
            m.age,
            m.profession,
            m.image,
            id,
        ],
    )?;
    Ok(n)
}

pub fn find_member(conn: &Connection, id: i64) -> AppResult<Option<Member>> {
    let sql = format!("{} WHERE m.id = ?1", member_select());
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([id], map_member).optional()?)
}

pub fn load_member(conn: &Connection, id: i64) -> AppResult<Member> {
    find_member(conn, id)?.ok_or(AppError::MemberNotFound(id))
}

pub fn set_active(conn: &Connection, id: i64, active: bool) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE members SET status = ?1 WHERE id = ?2",
        params![if active { "Y" } else { "N" }, id],
    )?;
    Ok(n)
}

pub fn set_join_status(conn: &Connection, id: i64, status: JoinStatus) -> AppResult<()> {
    conn.execute(
        "UPDATE members SET join_status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    Ok(())
}

/// Flip every joined member back to free, regardless of event.
/// Returns how many members were reset.
pub fn reset_all_joined(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE members SET join_status = ?1 WHERE join_status = ?2",
        params![JoinStatus::Free.to_db_str(), JoinStatus::Joined.to_db_str()],
    )?;
    Ok(n)
}

/// Active members ordered by id.
pub fn list_active(conn: &Connection, limit: usize, offset: usize) -> AppResult<Vec<Member>> {
    let sql = format!(
        "{} WHERE m.status = 'Y' ORDER BY m.id ASC LIMIT ?1 OFFSET ?2",
        member_select()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(params![limit as i64, offset as i64], map_member)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Active members not currently inside an event.
pub fn list_available(conn: &Connection) -> AppResult<Vec<Member>> {
    let sql = format!(
        "{} WHERE m.status = 'Y' AND m.join_status = ?1 ORDER BY m.full_name ASC",
        member_select()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map([JoinStatus::Free.to_db_str()], map_member)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
