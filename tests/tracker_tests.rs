mod common;

use common::{ManualClock, memory_pool, seed_event, seed_member, ts};
use rattendance::core::AttendanceTracker;
use rattendance::core::members::MemberLogic;
use rattendance::db::attendance as attendance_db;
use rattendance::errors::AppError;
use rattendance::models::attendance::JoinOutcome;
use rattendance::models::attendance_status::AttendanceStatus;
use rattendance::models::join_status::JoinStatus;

#[test]
fn start_is_recorded_once() {
    let mut pool = memory_pool();
    let event = seed_event(&pool, "Spring Meetup");
    let clock = ManualClock::at(10, 0);

    let started = AttendanceTracker::with_clock(&mut pool.conn, &clock)
        .start_event(event.id)
        .unwrap();
    assert_eq!(started.start_time, Some(ts(10, 0)));

    clock.set(11, 30);
    let again = AttendanceTracker::with_clock(&mut pool.conn, &clock)
        .start_event(event.id)
        .unwrap();
    assert_eq!(again.start_time, Some(ts(10, 0)));
    assert!(attendance_db::has_start_marker(&pool.conn, event.id).unwrap());
}

#[test]
fn start_of_unknown_event_fails() {
    let mut pool = memory_pool();
    let err = AttendanceTracker::new(&mut pool.conn)
        .start_event(404)
        .unwrap_err();
    assert!(matches!(err, AppError::EventNotFound(404)));
}

#[test]
fn join_before_start_is_rejected() {
    let mut pool = memory_pool();
    let event = seed_event(&pool, "Spring Meetup");
    let member = seed_member(&pool, "Ayesha Khan");

    let err = AttendanceTracker::new(&mut pool.conn)
        .join_event(event.id, member.id)
        .unwrap_err();
    assert!(matches!(err, AppError::NotStarted(id) if id == event.id));
    assert!(err.is_attendance_rejection());
}

#[test]
fn join_of_unknown_member_fails() {
    let mut pool = memory_pool();
    let event = seed_event(&pool, "Spring Meetup");
    let mut tracker = AttendanceTracker::new(&mut pool.conn);
    tracker.start_event(event.id).unwrap();

    let err = tracker.join_event(event.id, 99).unwrap_err();
    assert!(matches!(err, AppError::MemberNotFound(99)));
}

#[test]
fn join_toggles_in_then_out_then_rejects() {
    let mut pool = memory_pool();
    let event = seed_event(&pool, "Spring Meetup");
    let member = seed_member(&pool, "Ayesha Khan");
    let clock = ManualClock::at(10, 0);

    {
        let mut tracker = AttendanceTracker::with_clock(&mut pool.conn, &clock);
        tracker.start_event(event.id).unwrap();

        match tracker.join_event(event.id, member.id).unwrap() {
            JoinOutcome::ClockedIn { member, record } => {
                assert_eq!(member.join_status, JoinStatus::Joined);
                assert_eq!(record.event_status, AttendanceStatus::Join);
                assert_eq!(record.member_clockin, ts(10, 0));
                assert_eq!(record.member_clockout, None);
            }
            other => panic!("expected a clock-in, got {:?}", other),
        }

        clock.set(12, 45);
        let out = tracker.join_event(event.id, member.id).unwrap();
        assert_eq!(out.status(), AttendanceStatus::Leave);
        assert_eq!(out.record().member_clockout, Some(ts(12, 45)));
        assert_eq!(out.record().present_hours.as_deref(), Some("2 Hours 45 Minutes"));

        let err = tracker.join_event(event.id, member.id).unwrap_err();
        assert!(matches!(err, AppError::AlreadyClockedOut { .. }));
    }

    // leaving does not free the member, only ending the event does
    let after = MemberLogic::get(&pool.conn, member.id).unwrap();
    assert_eq!(after.join_status, JoinStatus::Joined);

    let records = attendance_db::records_for_event(&pool.conn, event.id).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn end_closes_open_and_left_records() {
    let mut pool = memory_pool();
    let event = seed_event(&pool, "Spring Meetup");
    let a = seed_member(&pool, "Ayesha Khan");
    let b = seed_member(&pool, "Bilal Ahmed");
    let clock = ManualClock::at(10, 0);

    let details = {
        let mut tracker = AttendanceTracker::with_clock(&mut pool.conn, &clock);
        tracker.start_event(event.id).unwrap();
        tracker.join_event(event.id, a.id).unwrap();

        clock.set(10, 30);
        tracker.join_event(event.id, b.id).unwrap();

        clock.set(11, 0);
        tracker.join_event(event.id, b.id).unwrap();

        clock.set(13, 0);
        tracker.end_event(event.id, Some("all good")).unwrap()
    };

    assert_eq!(details.len(), 2);
    assert!(details.iter().all(|d| d.record.event_status == AttendanceStatus::End));
    assert!(details.iter().all(|d| d.event_name == "Spring Meetup"));

    let of = |id: i64| {
        details
            .iter()
            .find(|d| d.record.member_id == id)
            .expect("member listed")
    };

    // still inside at the end: clocked out at the end time
    assert_eq!(of(a.id).record.member_clockout, Some(ts(13, 0)));
    assert_eq!(of(a.id).record.present_hours.as_deref(), Some("3 Hours"));

    // already left: keeps the earlier clock-out and duration
    assert_eq!(of(b.id).record.member_clockout, Some(ts(11, 0)));
    assert_eq!(of(b.id).record.present_hours.as_deref(), Some("30 Minutes"));

    let ended = rattendance::core::events::EventLogic::get(&pool.conn, event.id).unwrap();
    assert_eq!(ended.end_time, Some(ts(13, 0)));
    assert_eq!(ended.present_time.as_deref(), Some("3 Hours"));
    assert_eq!(ended.end_note.as_deref(), Some("all good"));

    for m in [a.id, b.id] {
        let member = MemberLogic::get(&pool.conn, m).unwrap();
        assert_eq!(member.join_status, JoinStatus::Free);
    }
}

#[test]
fn end_frees_members_joined_elsewhere() {
    let mut pool = memory_pool();
    let first = seed_event(&pool, "Spring Meetup");
    let second = seed_event(&pool, "Book Club");
    let a = seed_member(&pool, "Ayesha Khan");
    let b = seed_member(&pool, "Bilal Ahmed");
    let clock = ManualClock::at(9, 0);

    {
        let mut tracker = AttendanceTracker::with_clock(&mut pool.conn, &clock);
        tracker.start_event(first.id).unwrap();
        tracker.start_event(second.id).unwrap();
        tracker.join_event(first.id, a.id).unwrap();
        tracker.join_event(second.id, b.id).unwrap();

        clock.advance_minutes(90);
        tracker.end_event(first.id, None).unwrap();
    }

    let b_after = MemberLogic::get(&pool.conn, b.id).unwrap();
    assert_eq!(b_after.join_status, JoinStatus::Free);

    // the other event's record stays open
    let other = attendance_db::find_record(&pool.conn, second.id, b.id)
        .unwrap()
        .expect("record exists");
    assert_eq!(other.event_status, AttendanceStatus::Join);
    assert_eq!(other.member_clockout, None);
}

#[test]
fn end_of_unstarted_or_unknown_event_fails() {
    let mut pool = memory_pool();
    let event = seed_event(&pool, "Spring Meetup");
    let mut tracker = AttendanceTracker::new(&mut pool.conn);

    assert!(matches!(
        tracker.end_event(event.id, None),
        Err(AppError::EventNotFound(_))
    ));
    assert!(matches!(
        tracker.end_event(777, None),
        Err(AppError::EventNotFound(777))
    ));
}

#[test]
fn ending_twice_keeps_the_first_end_time() {
    let mut pool = memory_pool();
    let event = seed_event(&pool, "Spring Meetup");
    let member = seed_member(&pool, "Ayesha Khan");
    let clock = ManualClock::at(10, 0);

    let mut tracker = AttendanceTracker::with_clock(&mut pool.conn, &clock);
    tracker.start_event(event.id).unwrap();
    tracker.join_event(event.id, member.id).unwrap();

    clock.set(11, 0);
    tracker.end_event(event.id, None).unwrap();

    clock.set(15, 0);
    let details = tracker.end_event(event.id, Some("late note")).unwrap();
    assert_eq!(details[0].record.member_clockout, Some(ts(11, 0)));
    assert_eq!(details[0].record.present_hours.as_deref(), Some("1 Hour"));

    let err = tracker.join_event(event.id, member.id).unwrap_err();
    assert!(matches!(err, AppError::AlreadyClockedOut { .. }));
}
