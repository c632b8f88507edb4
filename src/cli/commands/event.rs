use crate::cli::commands::{open_db, print_json};
use crate::cli::parser::{EventAction, EventArgs};
use crate::config::Config;
use crate::core::events::EventLogic;
use crate::errors::AppResult;
use crate::models::event::{Event, EventForm};
use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_timestamp;
use serde::Serialize;
use std::collections::BTreeMap;

impl From<&EventArgs> for EventForm {
    fn from(a: &EventArgs) -> Self {
        EventForm {
            event_name: a.event_name.clone().unwrap_or_default(),
            date: a.date.clone().unwrap_or_default(),
            location: a.location.clone().unwrap_or_default(),
            description: a.description.clone(),
            image: a.image.clone(),
            event_type: a.event_type.clone(),
            focal_person_name: a.focal_person_name.clone().unwrap_or_default(),
            focal_person_number: a.focal_person_number.clone().unwrap_or_default(),
            focal_person_email: a.focal_person_email.clone().unwrap_or_default(),
            info_person_name: a.info_person_name.clone(),
            info_person_number: a.info_person_number.clone(),
            info_person_email: a.info_person_email.clone(),
        }
    }
}

#[derive(Serialize)]
struct EventView {
    #[serde(flatten)]
    event: Event,
    attendance: BTreeMap<String, i64>,
}

fn phase(event: &Event) -> String {
    if event.is_ended() {
        format!("{GREY}ended{RESET}")
    } else if event.is_started() {
        format!("{GREEN}running{RESET}")
    } else {
        format!("{YELLOW}planned{RESET}")
    }
}

fn print_table(events: &[Event], cfg: &Config) {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("NAME", 12),
        Column::new("DATE", 10),
        Column::new("LOCATION", 10),
        Column::new("STARTED", 19),
        Column::new("PHASE", 7),
    ]);

    for e in events {
        table.add_row(vec![
            e.id.to_string(),
            e.event_name.clone(),
            e.date.to_string(),
            e.location.clone(),
            e.start_time
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_else(|| "--".to_string()),
            phase(e),
        ]);
    }
    table.fit();

    print!("{}", table.render(cfg.separator()));
}

pub fn handle(action: &EventAction, cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let conn = &pool.conn;

    match action {
        EventAction::Add(args) => print_json(&EventLogic::add(conn, &EventForm::from(args))?),
        EventAction::List { limit, table } => {
            let events = EventLogic::list(conn, limit.unwrap_or(cfg.list_limit))?;
            if *table {
                print_table(&events, cfg);
                Ok(())
            } else {
                print_json(&events)
            }
        }
        EventAction::Show { id } => {
            let event = EventLogic::get(conn, *id)?;
            let attendance = EventLogic::status_summary(conn, *id)?
                .into_iter()
                .map(|(status, n)| (status.to_string(), n))
                .collect();
            print_json(&EventView { event, attendance })
        }
        EventAction::Update { id, fields } => {
            print_json(&EventLogic::update(conn, *id, &EventForm::from(fields))?)
        }
        EventAction::Del { id } => print_json(&EventLogic::delete(conn, *id)?),
    }
}
