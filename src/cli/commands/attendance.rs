use crate::cli::commands::{open_db, print_json};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::AttendanceTracker;
use crate::core::events::EventLogic;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceDetail;
use crate::models::attendance_status::AttendanceStatus;
use crate::utils::colors::colorize_status;
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_timestamp;

fn parse_status(raw: &str) -> AppResult<AttendanceStatus> {
    AttendanceStatus::from_code(raw).ok_or_else(|| AppError::InvalidStatus(raw.to_string()))
}

fn print_table(details: &[AttendanceDetail], cfg: &Config) {
    let mut table = Table::new(vec![
        Column::new("MEMBER", 6),
        Column::new("NAME", 12),
        Column::new("IN", 19),
        Column::new("OUT", 19),
        Column::new("PRESENT", 8),
        Column::new("STATUS", 6),
    ]);

    for d in details {
        let r = &d.record;
        table.add_row(vec![
            r.member_id.to_string(),
            d.member.full_name.clone(),
            format_timestamp(&r.member_clockin),
            r.member_clockout
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_else(|| "--".to_string()),
            or_dash(r.present_hours.as_deref()),
            colorize_status(r.event_status),
        ]);
    }
    table.fit();

    print!("{}", table.render(cfg.separator()));
}

/// `start`, `join`, `end` and `attendees`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = open_db(cfg)?;

    match cmd {
        Commands::Start { event } => {
            let event = AttendanceTracker::new(&mut pool.conn).start_event(*event)?;
            print_json(&event)
        }
        Commands::Join { event, member } => {
            let outcome = AttendanceTracker::new(&mut pool.conn).join_event(*event, *member)?;
            print_json(&outcome)
        }
        Commands::End { event, note } => {
            let details =
                AttendanceTracker::new(&mut pool.conn).end_event(*event, note.as_deref())?;
            print_json(&details)
        }
        Commands::Attendees {
            event,
            status,
            table,
        } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            let details = EventLogic::attendees(&pool.conn, *event, status)?;
            if *table {
                print_table(&details, cfg);
                Ok(())
            } else {
                print_json(&details)
            }
        }
        _ => Ok(()),
    }
}
