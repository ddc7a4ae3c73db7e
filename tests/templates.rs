#![forbid(unsafe_code)]
use semainier::{export_template_json, load_template_from_file, Shift, WeekTemplate, Weekday};
use tempfile::tempdir;

#[test]
fn standard_template_shape() {
    let t = WeekTemplate::standard();
    let counts: Vec<usize> = Weekday::ALL.iter().map(|d| t.shifts_for(*d).len()).collect();
    assert_eq!(counts, vec![3, 2, 2, 2, 3, 1, 1]);
    assert_eq!(t.shifts_for(Weekday::Sunday)[0].start_time, "12:00");
    assert!(t.validate().is_ok());
}

#[test]
fn save_and_load_template_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("week.json");
    let template = WeekTemplate::standard();
    export_template_json(&path, &template).unwrap();

    let loaded = load_template_from_file(&path).unwrap();
    assert_eq!(loaded, template);
}

#[test]
fn missing_days_give_empty_lists() {
    let t = WeekTemplate::new().with_day(Weekday::Tuesday, vec![Shift::new("08:00", "12:00", "Desk")]);
    assert!(t.shifts_for(Weekday::Monday).is_empty());
    assert_eq!(t.shifts_for(Weekday::Tuesday).len(), 1);
}

#[test]
fn invalid_time_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(
        &path,
        r#"{"days": {"Monday": [{"start_time": "9h", "end_time": "17:00", "position": "Manager"}]}}"#,
    )
    .unwrap();
    assert!(load_template_from_file(&path).is_err());
}

#[test]
fn start_after_end_is_accepted() {
    let t = WeekTemplate::new().with_day(Weekday::Friday, vec![Shift::new("22:00", "06:00", "Night")]);
    assert!(t.validate().is_ok());
}
