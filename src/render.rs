use crate::model::{Roster, Shift};
use crate::schedule::ScheduleStore;
use anyhow::{bail, Result};
use csv::{Terminator, WriterBuilder};
use std::fmt::Write as _;
use std::str::FromStr;

/// Marqueur des créneaux sans employé.
pub const UNASSIGNED: &str = "UNASSIGNED";

pub const CSV_HEADER: [&str; 6] = ["Date", "Day", "Start Time", "End Time", "Position", "Employee"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Csv,
    Html,
    Text,
}

impl FromStr for RenderFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(RenderFormat::Csv),
            "html" | "htm" => Ok(RenderFormat::Html),
            "text" | "txt" => Ok(RenderFormat::Text),
            other => bail!("unknown format: {other} (expected csv, html or text)"),
        }
    }
}

impl RenderFormat {
    pub fn renderer(self) -> &'static dyn ScheduleRenderer {
        match self {
            RenderFormat::Csv => &CsvRenderer,
            RenderFormat::Html => &HtmlRenderer,
            RenderFormat::Text => &TextRenderer,
        }
    }
}

/// Rendu d'un planning ; ne modifie ni le roster ni le planning.
pub trait ScheduleRenderer {
    fn render(&self, roster: &Roster, schedule: &ScheduleStore) -> Result<String>;
}

/// Nom à afficher pour un créneau : nom de l'employé, id brut si l'employé
/// a disparu du roster, `UNASSIGNED` sinon.
pub fn assignee_label<'a>(roster: &'a Roster, shift: &'a Shift) -> &'a str {
    match &shift.assigned {
        None => UNASSIGNED,
        Some(id) => roster
            .lookup(id)
            .map(|e| e.name.as_str())
            .unwrap_or(id.as_str()),
    }
}

pub fn render(format: RenderFormat, roster: &Roster, schedule: &ScheduleStore) -> Result<String> {
    format.renderer().render(roster, schedule)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvRenderer;

impl ScheduleRenderer for CsvRenderer {
    fn render(&self, roster: &Roster, schedule: &ScheduleStore) -> Result<String> {
        let mut w = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        w.write_record(CSV_HEADER)?;
        for (date, entry) in schedule.days() {
            let date = date.to_string();
            for shift in &entry.shifts {
                w.write_record([
                    date.as_str(),
                    entry.day.name(),
                    shift.start_time.as_str(),
                    shift.end_time.as_str(),
                    shift.position.as_str(),
                    assignee_label(roster, shift),
                ])?;
            }
        }
        let bytes = w.into_inner().map_err(|e| anyhow::anyhow!("flushing csv: {e}"))?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Work Schedule</title>
<style>
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f2f2f2; }
.date { font-weight: bold; }
.unassigned { background-color: #ffe6e6; }
</style>
</head>
<body>
<h1>Work Schedule</h1>
<table>
<tr><th>Date</th><th>Day</th><th>Time</th><th>Position</th><th>Employee</th></tr>
"#;

const HTML_TAIL: &str = "</table>\n</body>\n</html>\n";

impl ScheduleRenderer for HtmlRenderer {
    fn render(&self, roster: &Roster, schedule: &ScheduleStore) -> Result<String> {
        let mut out = String::from(HTML_HEAD);
        for (date, entry) in schedule.days() {
            for shift in &entry.shifts {
                let class = if shift.assigned.is_none() { "unassigned" } else { "" };
                writeln!(
                    out,
                    "<tr class=\"{class}\"><td class=\"date\">{date}</td><td>{day}</td><td>{start} - {end}</td><td>{position}</td><td>{employee}</td></tr>",
                    day = entry.day,
                    start = escape_html(&shift.start_time),
                    end = escape_html(&shift.end_time),
                    position = escape_html(&shift.position),
                    employee = escape_html(assignee_label(roster, shift)),
                )?;
            }
        }
        out.push_str(HTML_TAIL);
        Ok(out)
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Affichage console.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl ScheduleRenderer for TextRenderer {
    fn render(&self, roster: &Roster, schedule: &ScheduleStore) -> Result<String> {
        let mut out = String::from("=== WORK SCHEDULE ===\n\n");
        for (date, entry) in schedule.days() {
            writeln!(out, "{date} ({})", entry.day)?;
            writeln!(out, "{}", "-".repeat(50))?;
            if entry.shifts.is_empty() {
                writeln!(out, "  No shifts scheduled")?;
            }
            for shift in &entry.shifts {
                writeln!(
                    out,
                    "  {}-{} | {} | {}",
                    shift.start_time,
                    shift.end_time,
                    shift.position,
                    assignee_label(roster, shift)
                )?;
            }
            out.push('\n');
        }
        Ok(out)
    }
}
