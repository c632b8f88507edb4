mod common;

use common::{event_form, member_form, memory_pool, seed_event, seed_member};
use rattendance::core::AttendanceTracker;
use rattendance::core::events::EventLogic;
use rattendance::core::members::MemberLogic;
use rattendance::core::reference::ReferenceLogic;
use rattendance::db::log::load_log;
use rattendance::errors::AppError;
use rattendance::models::attendance_status::AttendanceStatus;
use rattendance::models::join_status::JoinStatus;
use rattendance::models::reference::ReferenceKind;

#[test]
fn registered_member_starts_free_and_active() {
    let pool = memory_pool();
    let m = seed_member(&pool, "Ayesha Khan");

    assert!(m.active);
    assert_eq!(m.join_status, JoinStatus::Free);
    assert_eq!(m.dob.to_string(), "1995-04-12");

    let ops: Vec<String> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .collect();
    assert!(ops.contains(&"member_add".to_string()));
}

#[test]
fn incomplete_member_is_not_written() {
    let pool = memory_pool();
    let mut form = member_form("Ayesha Khan");
    form.cnic.clear();

    let err = MemberLogic::register(&pool.conn, &form).unwrap_err();
    assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("cnic")));
    assert!(MemberLogic::list(&pool.conn, 10, 0).unwrap().is_empty());
}

#[test]
fn member_update_and_soft_delete() {
    let pool = memory_pool();
    let m = seed_member(&pool, "Ayesha Khan");
    let other = seed_member(&pool, "Bilal Ahmed");

    let mut form = member_form("Ayesha Malik");
    form.zone = "South".into();
    let updated = MemberLogic::update(&pool.conn, m.id, &form).unwrap();
    assert_eq!(updated.full_name, "Ayesha Malik");
    assert_eq!(updated.zone, "South");

    let removed = MemberLogic::delete(&pool.conn, m.id).unwrap();
    assert!(!removed.active);

    let listed = MemberLogic::list(&pool.conn, 10, 0).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, other.id);

    // still readable after being disabled
    assert!(!MemberLogic::get(&pool.conn, m.id).unwrap().active);

    assert!(matches!(
        MemberLogic::update(&pool.conn, 999, &form),
        Err(AppError::MemberNotFound(999))
    ));
    assert!(matches!(
        MemberLogic::delete(&pool.conn, 999),
        Err(AppError::MemberNotFound(999))
    ));
}

#[test]
fn member_list_pages() {
    let pool = memory_pool();
    for name in ["A One", "B Two", "C Three"] {
        seed_member(&pool, name);
    }

    let first = MemberLogic::list(&pool.conn, 2, 0).unwrap();
    let rest = MemberLogic::list(&pool.conn, 2, 2).unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].full_name, "C Three");
}

#[test]
fn joined_members_are_not_available() {
    let mut pool = memory_pool();
    let event = seed_event(&pool, "Spring Meetup");
    let a = seed_member(&pool, "Ayesha Khan");
    let b = seed_member(&pool, "Bilal Ahmed");

    {
        let mut tracker = AttendanceTracker::new(&mut pool.conn);
        tracker.start_event(event.id).unwrap();
        tracker.join_event(event.id, a.id).unwrap();
    }

    let available = MemberLogic::available(&pool.conn).unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, b.id);
}

#[test]
fn event_names_are_unique() {
    let pool = memory_pool();
    let first = seed_event(&pool, "Spring Meetup");
    let second = seed_event(&pool, "Book Club");

    assert!(matches!(
        EventLogic::add(&pool.conn, &event_form("Spring Meetup")),
        Err(AppError::DuplicateEvent(_))
    ));

    // renaming onto another event's name is refused, keeping its own is fine
    assert!(matches!(
        EventLogic::update(&pool.conn, second.id, &event_form("Spring Meetup")),
        Err(AppError::DuplicateEvent(_))
    ));
    let mut form = event_form("Spring Meetup");
    form.location = "Main Library".into();
    let kept = EventLogic::update(&pool.conn, first.id, &form).unwrap();
    assert_eq!(kept.location, "Main Library");
}

#[test]
fn event_requires_focal_person_and_valid_date() {
    let pool = memory_pool();

    let mut form = event_form("Spring Meetup");
    form.focal_person_email.clear();
    assert!(matches!(
        EventLogic::add(&pool.conn, &form),
        Err(AppError::Validation(_))
    ));

    let mut form = event_form("Spring Meetup");
    form.date = "first of March".into();
    assert!(matches!(
        EventLogic::add(&pool.conn, &form),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn disabled_events_leave_the_listing() {
    let pool = memory_pool();
    let a = seed_event(&pool, "Spring Meetup");
    seed_event(&pool, "Book Club");

    let removed = EventLogic::delete(&pool.conn, a.id).unwrap();
    assert_eq!(removed.event_name, "Spring Meetup");

    let listed = EventLogic::list(&pool.conn, 10).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].event_name, "Book Club");

    assert!(matches!(
        EventLogic::get(&pool.conn, 4242),
        Err(AppError::EventNotFound(4242))
    ));
}

#[test]
fn attendees_filter_by_status_and_hide_the_start_marker() {
    let mut pool = memory_pool();
    let event = seed_event(&pool, "Spring Meetup");
    let a = seed_member(&pool, "Ayesha Khan");
    let b = seed_member(&pool, "Bilal Ahmed");

    {
        let mut tracker = AttendanceTracker::new(&mut pool.conn);
        tracker.start_event(event.id).unwrap();
        tracker.join_event(event.id, a.id).unwrap();
        tracker.join_event(event.id, b.id).unwrap();
        tracker.join_event(event.id, b.id).unwrap();
    }

    let all = EventLogic::attendees(&pool.conn, event.id, None).unwrap();
    assert_eq!(all.len(), 2);

    let joined = EventLogic::attendees(&pool.conn, event.id, Some(AttendanceStatus::Join)).unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].member.id, a.id);

    let left = EventLogic::attendees(&pool.conn, event.id, Some(AttendanceStatus::Leave)).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].member.id, b.id);

    let summary = EventLogic::status_summary(&pool.conn, event.id).unwrap();
    assert_eq!(
        summary,
        vec![
            (AttendanceStatus::Join, 1),
            (AttendanceStatus::Leave, 1),
            (AttendanceStatus::End, 0),
        ]
    );
}

#[test]
fn zones_and_districts_are_kept_apart() {
    let pool = memory_pool();

    let north = ReferenceLogic::add(&pool.conn, ReferenceKind::Zone, "North").unwrap();
    ReferenceLogic::add(&pool.conn, ReferenceKind::Zone, "East").unwrap();
    let lahore = ReferenceLogic::add(&pool.conn, ReferenceKind::District, " Lahore ").unwrap();
    assert_eq!(lahore.name, "Lahore");

    let zones = ReferenceLogic::list(&pool.conn, ReferenceKind::Zone).unwrap();
    let names: Vec<&str> = zones.iter().map(|z| z.name.as_str()).collect();
    assert_eq!(names, vec!["East", "North"]);

    // a zone id is not a district
    assert!(matches!(
        ReferenceLogic::update(&pool.conn, ReferenceKind::District, north.id, "Karachi"),
        Err(AppError::ReferenceNotFound { .. })
    ));

    let renamed = ReferenceLogic::update(&pool.conn, ReferenceKind::Zone, north.id, "North West").unwrap();
    assert_eq!(renamed.name, "North West");

    let removed = ReferenceLogic::delete(&pool.conn, ReferenceKind::District, lahore.id).unwrap();
    assert!(!removed.active);
    assert!(ReferenceLogic::list(&pool.conn, ReferenceKind::District).unwrap().is_empty());

    assert!(matches!(
        ReferenceLogic::add(&pool.conn, ReferenceKind::Zone, "   "),
        Err(AppError::Validation(_))
    ));
}
