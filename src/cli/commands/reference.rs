use crate::cli::commands::{open_db, print_json};
use crate::cli::parser::ReferenceAction;
use crate::config::Config;
use crate::core::reference::ReferenceLogic;
use crate::errors::AppResult;
use crate::models::reference::ReferenceKind;

/// `zone` and `district` share the same subcommands.
pub fn handle(kind: ReferenceKind, action: &ReferenceAction, cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let conn = &pool.conn;

    match action {
        ReferenceAction::Add { name } => print_json(&ReferenceLogic::add(conn, kind, name)?),
        ReferenceAction::List => print_json(&ReferenceLogic::list(conn, kind)?),
        ReferenceAction::Update { id, name } => {
            print_json(&ReferenceLogic::update(conn, kind, *id, name)?)
        }
        ReferenceAction::Del { id } => print_json(&ReferenceLogic::delete(conn, kind, *id)?),
    }
}
