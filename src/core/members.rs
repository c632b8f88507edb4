use crate::db::log::ttlog;
use crate::db::members as members_db;
use crate::errors::{AppError, AppResult};
use crate::models::member::{Member, MemberForm};
use rusqlite::Connection;
use tracing::info;

/// High-level business logic for the member registry.
pub struct MemberLogic;

impl MemberLogic {
    pub fn register(conn: &Connection, form: &MemberForm) -> AppResult<Member> {
        let valid = form.validate()?;

        let tx = conn.unchecked_transaction()?;
        let id = members_db::insert_member(&tx, &valid)?;
        ttlog(
            &tx,
            "member_add",
            &format!("member {}", id),
            &format!("Registered {}", valid.full_name),
        )?;
        let member = members_db::load_member(&tx, id)?;
        tx.commit()?;

        info!(member_id = id, "member registered");
        Ok(member)
    }

    pub fn get(conn: &Connection, id: i64) -> AppResult<Member> {
        members_db::load_member(conn, id)
    }

    pub fn list(conn: &Connection, limit: usize, offset: usize) -> AppResult<Vec<Member>> {
        members_db::list_active(conn, limit, offset)
    }

    /// Active members not inside any event right now.
    pub fn available(conn: &Connection) -> AppResult<Vec<Member>> {
        members_db::list_available(conn)
    }

    pub fn update(conn: &Connection, id: i64, form: &MemberForm) -> AppResult<Member> {
        let valid = form.validate()?;

        let tx = conn.unchecked_transaction()?;
        if members_db::update_member(&tx, id, &valid)? == 0 {
            return Err(AppError::MemberNotFound(id));
        }
        ttlog(
            &tx,
            "member_edit",
            &format!("member {}", id),
            &format!("Updated {}", valid.full_name),
        )?;
        let member = members_db::load_member(&tx, id)?;
        tx.commit()?;

        info!(member_id = id, "member updated");
        Ok(member)
    }

    /// Soft delete: the member is disabled, never removed.
    pub fn delete(conn: &Connection, id: i64) -> AppResult<Member> {
        let tx = conn.unchecked_transaction()?;
        if members_db::set_active(&tx, id, false)? == 0 {
            return Err(AppError::MemberNotFound(id));
        }
        let member = members_db::load_member(&tx, id)?;
        ttlog(
            &tx,
            "member_del",
            &format!("member {}", id),
            &format!("Disabled {}", member.full_name),
        )?;
        tx.commit()?;

        info!(member_id = id, "member disabled");
        Ok(member)
    }
}
