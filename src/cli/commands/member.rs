use crate::cli::commands::{open_db, print_json};
use crate::cli::parser::{MemberAction, MemberArgs};
use crate::config::Config;
use crate::core::members::MemberLogic;
use crate::errors::AppResult;
use crate::models::member::{Member, MemberForm};
use crate::utils::colors::colorize_join_status;
use crate::utils::table::{Column, Table};

impl From<&MemberArgs> for MemberForm {
    fn from(a: &MemberArgs) -> Self {
        MemberForm {
            full_name: a.full_name.clone().unwrap_or_default(),
            father_name: a.father_name.clone().unwrap_or_default(),
            zone: a.zone.clone().unwrap_or_default(),
            mobile_number: a.mobile_number.clone().unwrap_or_default(),
            address: a.address.clone().unwrap_or_default(),
            education: a.education.clone().unwrap_or_default(),
            email: a.email.clone().unwrap_or_default(),
            cnic: a.cnic.clone().unwrap_or_default(),
            dob: a.dob.clone().unwrap_or_default(),
            district: a.district.clone().unwrap_or_default(),
            age: a.age,
            profession: a.profession.clone().unwrap_or_default(),
            image: a.image.clone(),
        }
    }
}

fn print_table(members: &[Member], cfg: &Config) {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("NAME", 12),
        Column::new("ZONE", 8),
        Column::new("DISTRICT", 8),
        Column::new("MOBILE", 11),
        Column::new("STATE", 6),
    ]);

    for m in members {
        table.add_row(vec![
            m.id.to_string(),
            m.full_name.clone(),
            m.zone.clone(),
            m.district.clone(),
            m.mobile_number.clone(),
            colorize_join_status(m.join_status),
        ]);
    }
    table.fit();

    print!("{}", table.render(cfg.separator()));
}

pub fn handle(action: &MemberAction, cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let conn = &pool.conn;

    match action {
        MemberAction::Add(args) => {
            let member = MemberLogic::register(conn, &MemberForm::from(args))?;
            print_json(&member)
        }
        MemberAction::List {
            limit,
            offset,
            table,
        } => {
            let members = MemberLogic::list(conn, limit.unwrap_or(cfg.list_limit), *offset)?;
            if *table {
                print_table(&members, cfg);
                Ok(())
            } else {
                print_json(&members)
            }
        }
        MemberAction::Show { id } => print_json(&MemberLogic::get(conn, *id)?),
        MemberAction::Update { id, fields } => {
            let member = MemberLogic::update(conn, *id, &MemberForm::from(fields))?;
            print_json(&member)
        }
        MemberAction::Del { id } => print_json(&MemberLogic::delete(conn, *id)?),
        MemberAction::Available => print_json(&MemberLogic::available(conn)?),
    }
}
