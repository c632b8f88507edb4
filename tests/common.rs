#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rattendance::core::Clock;
use rattendance::core::events::EventLogic;
use rattendance::core::members::MemberLogic;
use rattendance::db::initialize::init_db;
use rattendance::db::pool::DbPool;
use rattendance::models::event::{Event, EventForm};
use rattendance::models::member::{Member, MemberForm};
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh in-memory database with the schema in place.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Clock that only moves when told to.
pub struct ManualClock(Cell<NaiveDateTime>);

impl ManualClock {
    pub fn at(h: u32, m: u32) -> Self {
        Self(Cell::new(ts(h, m)))
    }

    pub fn set(&self, h: u32, m: u32) {
        self.0.set(ts(h, m));
    }

    pub fn advance_minutes(&self, minutes: i64) {
        self.0.set(self.0.get() + Duration::minutes(minutes));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get()
    }
}

/// 2025-03-01 at `h:m:00`.
pub fn ts(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .and_then(|d| d.and_hms_opt(h, m, 0))
        .expect("valid timestamp")
}

pub fn member_form(name: &str) -> MemberForm {
    MemberForm {
        full_name: name.to_string(),
        father_name: "Rashid Ali".into(),
        zone: "North".into(),
        mobile_number: "03001234567".into(),
        address: "12 Mall Road".into(),
        education: "BSc".into(),
        email: format!("{}@example.org", name.to_lowercase().replace(' ', ".")),
        cnic: "35202-1234567-1".into(),
        dob: "1995-04-12".into(),
        district: "Lahore".into(),
        age: Some(30),
        profession: "Engineer".into(),
        image: None,
    }
}

pub fn event_form(name: &str) -> EventForm {
    EventForm {
        event_name: name.to_string(),
        date: "2025-03-01".into(),
        location: "Community Hall".into(),
        description: Some("Monthly meeting".into()),
        image: None,
        event_type: Some("meeting".into()),
        focal_person_name: "Sana Iqbal".into(),
        focal_person_number: "03111234567".into(),
        focal_person_email: "sana@example.org".into(),
        info_person_name: None,
        info_person_number: None,
        info_person_email: None,
    }
}

pub fn seed_member(pool: &DbPool, name: &str) -> Member {
    MemberLogic::register(&pool.conn, &member_form(name)).expect("register member")
}

pub fn seed_event(pool: &DbPool, name: &str) -> Event {
    EventLogic::add(&pool.conn, &event_form(name)).expect("add event")
}

/// CLI arguments registering a member with every required field.
pub fn member_add_args<'a>(db: &'a str, name: &'a str) -> Vec<&'a str> {
    vec![
        "--db", db, "member", "add", "--name", name, "--father", "Rashid Ali", "--zone",
        "North", "--mobile", "03001234567", "--address", "12 Mall Road", "--education", "BSc",
        "--email", "member@example.org", "--cnic", "35202-1234567-1", "--dob", "1995-04-12",
        "--district", "Lahore", "--age", "30", "--profession", "Engineer",
    ]
}

pub fn event_add_args<'a>(db: &'a str, name: &'a str) -> Vec<&'a str> {
    vec![
        "--db", db, "event", "add", "--name", name, "--date", "2025-03-01", "--location",
        "Community Hall", "--focal-name", "Sana Iqbal", "--focal-number", "03111234567",
        "--focal-email", "sana@example.org",
    ]
}
