#![forbid(unsafe_code)]
use chrono::NaiveDate;
use semainier::{Employee, EmployeeId, RenderFormat, Session, Shift, WeekTemplate, Weekday};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 6).unwrap()
}

fn small_session() -> Session {
    let template = WeekTemplate::new()
        .with_day(
            Weekday::Monday,
            vec![
                Shift::new("09:00", "17:00", "Manager"),
                Shift::new("10:00", "18:00", "Sales Associate"),
            ],
        )
        .with_day(Weekday::Tuesday, vec![Shift::new("14:00", "22:00", "Evening Shift")]);
    let mut s = Session::new();
    s.add_employee(Employee::new("E1", "Alice"));
    s.add_employee(Employee::new("E2", "Bob & Co"));
    s.create_weekly_schedule(monday(), &template).unwrap();
    s.assign_employee_to_shift(monday(), 0, &EmployeeId::new("E1"))
        .unwrap();
    s.assign_employee_to_shift(monday().succ_opt().unwrap(), 0, &EmployeeId::new("E2"))
        .unwrap();
    s
}

#[test]
fn csv_rows_in_day_then_shift_order() {
    let csv = small_session().render(RenderFormat::Csv).unwrap();
    insta::assert_snapshot!(csv.trim_end(), @r"
    Date,Day,Start Time,End Time,Position,Employee
    2025-10-06,Monday,09:00,17:00,Manager,Alice
    2025-10-06,Monday,10:00,18:00,Sales Associate,UNASSIGNED
    2025-10-07,Tuesday,14:00,22:00,Evening Shift,Bob & Co
    ");
}

#[test]
fn csv_falls_back_to_bare_id_for_removed_employee() {
    let mut session = small_session();
    session.remove_employee(&EmployeeId::new("E1"));
    let csv = session.render(RenderFormat::Csv).unwrap();
    assert!(csv.contains("2025-10-06,Monday,09:00,17:00,Manager,E1\n"));
}

#[test]
fn html_marks_unassigned_and_escapes() {
    let html = small_session().render(RenderFormat::Html).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<th>Time</th>"));
    assert!(html.contains(
        "<tr class=\"unassigned\"><td class=\"date\">2025-10-06</td><td>Monday</td><td>10:00 - 18:00</td><td>Sales Associate</td><td>UNASSIGNED</td></tr>"
    ));
    assert!(html.contains("<td>Bob &amp; Co</td>"));
    assert_eq!(html.matches("class=\"unassigned\"").count(), 1);
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn text_prints_placeholder_for_empty_days() {
    let text = small_session().render(RenderFormat::Text).unwrap();
    assert!(text.starts_with("=== WORK SCHEDULE ===\n\n2025-10-06 (Monday)\n"));
    assert!(text.contains("  09:00-17:00 | Manager | Alice\n"));
    assert!(text.contains("  10:00-18:00 | Sales Associate | UNASSIGNED\n"));
    assert!(text.contains("2025-10-08 (Wednesday)\n"));
    assert_eq!(text.matches("  No shifts scheduled\n").count(), 5);
    assert_eq!(text.matches(&"-".repeat(50)).count(), 7);
}

#[test]
fn rendering_does_not_mutate() {
    let session = small_session();
    let before = session.clone();
    for format in [RenderFormat::Csv, RenderFormat::Html, RenderFormat::Text] {
        session.render(format).unwrap();
    }
    assert_eq!(session, before);
}

#[test]
fn format_names() {
    assert_eq!("CSV".parse::<RenderFormat>().unwrap(), RenderFormat::Csv);
    assert_eq!("html".parse::<RenderFormat>().unwrap(), RenderFormat::Html);
    assert_eq!("txt".parse::<RenderFormat>().unwrap(), RenderFormat::Text);
    assert!("pdf".parse::<RenderFormat>().is_err());
}
