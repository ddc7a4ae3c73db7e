#![forbid(unsafe_code)]
use chrono::{Datelike, NaiveDate};
use semainier::{
    AssignError, Employee, EmployeeId, ErrorKind, Roster, ScheduleStore, Session, Shift,
    WeekTemplate, Weekday,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn two_shift_week() -> WeekTemplate {
    WeekTemplate::new()
        .with_day(
            Weekday::Monday,
            vec![
                Shift::new("09:00", "17:00", "Manager"),
                Shift::new("10:00", "18:00", "Sales Associate"),
            ],
        )
        .with_day(Weekday::Saturday, vec![Shift::new("10:00", "18:00", "Weekend Staff")])
}

#[test]
fn roster_add_lookup_remove() {
    let mut roster = Roster::new();
    roster.add(Employee::new("E1", "Alice"));
    roster.add(Employee::new("E2", "Bob").with_department("Sales"));

    assert_eq!(roster.lookup(&EmployeeId::new("E2")).unwrap().name, "Bob");
    assert_eq!(roster.remove(&EmployeeId::new("E1")), 1);
    assert!(roster.lookup(&EmployeeId::new("E1")).is_none());
    assert_eq!(roster.remove(&EmployeeId::new("nobody")), 0);
    assert_eq!(roster.len(), 1);
}

#[test]
fn duplicate_ids_first_lookup_wins_and_remove_drops_all() {
    let mut roster = Roster::new();
    roster.add(Employee::new("E1", "First"));
    roster.add(Employee::new("E1", "Second"));
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.lookup(&EmployeeId::new("E1")).unwrap().name, "First");

    assert_eq!(roster.remove(&EmployeeId::new("E1")), 2);
    assert!(roster.is_empty());
}

#[test]
fn employee_defaults() {
    let e = Employee::new("E1", "Alice");
    assert_eq!(e.max_hours_per_week, 40);
    assert!(e.department.is_none());
    assert!(e.is_available_on(Weekday::Friday));
    assert!(!e.is_available_on(Weekday::Saturday));
    assert_eq!(e.available_days.len(), 5);
}

#[test]
fn weekly_schedule_labels_follow_offset_not_calendar() {
    // 2025-10-01 est un mercredi
    let start = date(2025, 10, 1);
    assert_eq!(start.weekday(), chrono::Weekday::Wed);

    let mut store = ScheduleStore::new();
    let days = store.create_weekly_schedule(start, &two_shift_week()).unwrap();
    assert_eq!(days.len(), 7);

    let labels: Vec<Weekday> = days.values().map(|d| d.day).collect();
    assert_eq!(labels, Weekday::ALL.to_vec());

    let dates: Vec<NaiveDate> = store.dates().collect();
    assert_eq!(dates.first(), Some(&start));
    assert_eq!(dates.last(), Some(&date(2025, 10, 7)));

    assert_eq!(store.day(start).unwrap().shifts.len(), 2);
    assert!(store.day(date(2025, 10, 2)).unwrap().shifts.is_empty());
    assert_eq!(store.day(date(2025, 10, 6)).unwrap().shifts.len(), 1);
}

#[test]
fn create_replaces_previous_schedule() {
    let mut session = Session::new();
    session.add_employee(Employee::new("E1", "Alice"));
    session
        .create_weekly_schedule(date(2025, 10, 6), &two_shift_week())
        .unwrap();
    session
        .assign_employee_to_shift(date(2025, 10, 6), 0, &EmployeeId::new("E1"))
        .unwrap();

    session
        .create_weekly_schedule(date(2025, 10, 13), &two_shift_week())
        .unwrap();
    assert!(session.schedule().day(date(2025, 10, 6)).is_none());
    let shift = session.schedule().shift(date(2025, 10, 13), 0).unwrap();
    assert!(shift.assigned.is_none());
}

#[test]
fn assign_success_and_failures() {
    let monday = date(2025, 10, 6);
    let mut session = Session::new();
    session.add_employee(Employee::new("E1", "Alice").with_available_days([Weekday::Monday]));
    session
        .create_weekly_schedule(monday, &two_shift_week())
        .unwrap();

    let e1 = EmployeeId::new("E1");
    assert!(session.assign_employee_to_shift(monday, 0, &e1).is_ok());
    assert_eq!(
        session.schedule().shift(monday, 0).unwrap().assigned,
        Some(e1.clone())
    );

    let err = session
        .assign_employee_to_shift(monday, 1, &EmployeeId::new("E2"))
        .unwrap_err();
    assert_eq!(err, AssignError::UnknownEmployee(EmployeeId::new("E2")));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(session.schedule().shift(monday, 1).unwrap().assigned.is_none());

    let err = session.assign_employee_to_shift(monday, 5, &e1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);

    let err = session
        .assign_employee_to_shift(date(2024, 1, 1), 0, &e1)
        .unwrap_err();
    assert_eq!(err, AssignError::UnknownDate(date(2024, 1, 1)));

    // samedi : hors disponibilité
    let saturday = date(2025, 10, 11);
    let err = session.assign_employee_to_shift(saturday, 0, &e1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);
    assert!(session.schedule().shift(saturday, 0).unwrap().assigned.is_none());
}

#[test]
fn failed_assignment_keeps_previous_assignee() {
    let monday = date(2025, 10, 6);
    let mut session = Session::new();
    session.add_employee(Employee::new("E1", "Alice"));
    session.add_employee(Employee::new("E2", "Bob").with_available_days([Weekday::Sunday]));
    session
        .create_weekly_schedule(monday, &two_shift_week())
        .unwrap();
    session
        .assign_employee_to_shift(monday, 0, &EmployeeId::new("E1"))
        .unwrap();

    let before = session.clone();
    assert!(session
        .assign_employee_to_shift(monday, 0, &EmployeeId::new("E2"))
        .is_err());
    assert_eq!(session, before);
}

#[test]
fn reassignment_last_write_wins() {
    let monday = date(2025, 10, 6);
    let mut session = Session::new();
    session.add_employee(Employee::new("E1", "Alice"));
    session.add_employee(Employee::new("E2", "Bob"));
    session
        .create_weekly_schedule(monday, &two_shift_week())
        .unwrap();

    session
        .assign_employee_to_shift(monday, 1, &EmployeeId::new("E1"))
        .unwrap();
    session
        .assign_employee_to_shift(monday, 1, &EmployeeId::new("E2"))
        .unwrap();
    assert_eq!(
        session.schedule().shift(monday, 1).unwrap().assigned,
        Some(EmployeeId::new("E2"))
    );
}

#[test]
fn removed_employee_leaves_dangling_reference() {
    let monday = date(2025, 10, 6);
    let mut session = Session::new();
    session.add_employee(Employee::new("E1", "Alice"));
    session
        .create_weekly_schedule(monday, &two_shift_week())
        .unwrap();
    session
        .assign_employee_to_shift(monday, 0, &EmployeeId::new("E1"))
        .unwrap();

    assert_eq!(session.remove_employee(&EmployeeId::new("E1")), 1);
    let shift = session.schedule().shift(monday, 0).unwrap();
    assert_eq!(shift.assigned, Some(EmployeeId::new("E1")));
    assert_eq!(semainier::assignee_label(session.roster(), shift), "E1");
}

#[test]
fn template_shifts_are_copied_unassigned() {
    let mut template = two_shift_week();
    template.days.get_mut(&Weekday::Monday).unwrap()[0].assigned = Some(EmployeeId::new("X"));

    let mut store = ScheduleStore::new();
    store.create_weekly_schedule(date(2025, 10, 6), &template).unwrap();
    assert!(store.shift(date(2025, 10, 6), 0).unwrap().assigned.is_none());
    assert_eq!(store.shift_count(), 3);
}

#[test]
fn week_at_end_of_calendar_is_rejected() {
    let mut store = ScheduleStore::new();
    let err = store
        .create_weekly_schedule(NaiveDate::MAX, &two_shift_week())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert!(store.is_empty());
}

#[test]
fn weekday_parsing() {
    assert_eq!("monday".parse::<Weekday>().unwrap(), Weekday::Monday);
    assert_eq!("Sat".parse::<Weekday>().unwrap(), Weekday::Saturday);
    assert!("Funday".parse::<Weekday>().is_err());
    assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    assert_eq!(Weekday::from_offset(2), Some(Weekday::Wednesday));
    assert_eq!(Weekday::from_offset(7), None);
}
