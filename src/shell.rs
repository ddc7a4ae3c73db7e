//! Shell interactif : une ligne saisie devient une [`ShellCommand`] typée,
//! puis est exécutée sur la [`Session`].

use crate::io::export_schedule;
use crate::model::{Employee, EmployeeId};
use crate::render::RenderFormat;
use crate::session::Session;
use crate::storage::JsonStorage;
use crate::template::WeekTemplate;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_STATE_FILE: &str = "schedule_data.json";
pub const DEFAULT_CSV_FILE: &str = "schedule.csv";
pub const DEFAULT_HTML_FILE: &str = "schedule.html";

/// Aide affichée par `help`, une entrée par commande.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Show this help"),
    ("add <id> <name> [department] [max_hours]", "Add a new employee"),
    ("remove <id>", "Remove an employee"),
    ("list", "List all employees"),
    ("create <YYYY-MM-DD>", "Create a weekly schedule from the template"),
    ("assign <YYYY-MM-DD> <shift> <id>", "Assign employee to shift"),
    ("show", "Display current schedule"),
    ("save [file]", "Save data to file"),
    ("export csv|html [file]", "Export the schedule"),
    ("quit", "Exit program"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    AddEmployee {
        id: String,
        name: String,
        department: Option<String>,
        max_hours: Option<u32>,
    },
    RemoveEmployee(EmployeeId),
    ListEmployees,
    CreateSchedule(NaiveDate),
    Assign {
        date: NaiveDate,
        shift_index: usize,
        employee: EmployeeId,
    },
    Show,
    Save(Option<PathBuf>),
    Export(RenderFormat, Option<PathBuf>),
    Quit,
}

impl ShellCommand {
    /// Analyse une ligne. Les arguments sont validés ici, une seule fois.
    ///
    /// Les formes longues (`add employee`, `show schedule`, ...) sont acceptées.
    pub fn parse(line: &str) -> Result<Self> {
        let tokens = tokenize(line)?;
        let Some((head, rest)) = tokens.split_first() else {
            bail!("empty command");
        };
        let head = head.to_ascii_lowercase();
        let args = strip_noun(&head, rest);

        let cmd = match (head.as_str(), args) {
            ("help" | "?", []) => ShellCommand::Help,
            ("add", [id, name, more @ ..]) if more.len() <= 2 => ShellCommand::AddEmployee {
                id: id.clone(),
                name: name.clone(),
                department: more.first().filter(|d| !d.is_empty()).cloned(),
                max_hours: more
                    .get(1)
                    .map(|h| h.parse::<u32>().context("max_hours must be a positive integer"))
                    .transpose()?,
            },
            ("remove", [id]) => ShellCommand::RemoveEmployee(EmployeeId::new(id)),
            ("list", []) => ShellCommand::ListEmployees,
            ("create", [date]) => ShellCommand::CreateSchedule(parse_date(date)?),
            ("assign", [date, index, id]) => ShellCommand::Assign {
                date: parse_date(date)?,
                shift_index: index
                    .parse()
                    .with_context(|| format!("invalid shift index: {index}"))?,
                employee: EmployeeId::new(id),
            },
            ("show", []) => ShellCommand::Show,
            ("save", []) => ShellCommand::Save(None),
            ("save", [file]) => ShellCommand::Save(Some(PathBuf::from(file))),
            ("export", [format]) => ShellCommand::Export(parse_export_format(format)?, None),
            ("export", [format, file]) => {
                ShellCommand::Export(parse_export_format(format)?, Some(PathBuf::from(file)))
            }
            ("quit" | "exit", []) => ShellCommand::Quit,
            (
                "help" | "?" | "add" | "remove" | "list" | "create" | "assign" | "show" | "save"
                | "export" | "quit" | "exit",
                _,
            ) => bail!("wrong arguments for '{head}'. Type 'help' for usage."),
            _ => bail!("unknown command '{head}'. Type 'help' for available commands."),
        };
        Ok(cmd)
    }
}

fn strip_noun<'a>(head: &str, rest: &'a [String]) -> &'a [String] {
    let noun = match head {
        "add" | "remove" => "employee",
        "list" => "employees",
        "create" | "show" => "schedule",
        "assign" => "shift",
        _ => return rest,
    };
    match rest.split_first() {
        Some((first, tail)) if first.eq_ignore_ascii_case(noun) => tail,
        _ => rest,
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {raw}"))
}

fn parse_export_format(raw: &str) -> Result<RenderFormat> {
    match raw.parse()? {
        RenderFormat::Text => bail!("export supports csv or html"),
        f => Ok(f),
    }
}

/// Découpe sur les blancs ; les guillemets doubles regroupent un argument.
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;
    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    out.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if in_quotes {
        bail!("unterminated quote");
    }
    if has_token {
        out.push(current);
    }
    Ok(out)
}

/// Suite à donner après une commande.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a> {
    session: &'a mut Session,
    template: WeekTemplate,
}

impl<'a> Shell<'a> {
    pub fn new(session: &'a mut Session, template: WeekTemplate) -> Self {
        Self { session, template }
    }

    /// Analyse puis exécute une ligne ; les erreurs sont écrites dans `out`.
    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let outcome = ShellCommand::parse(line).and_then(|cmd| self.execute(cmd, out));
        match outcome {
            Ok(flow) => Ok(flow),
            Err(err) => {
                writeln!(out, "Error: {err:#}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, cmd: ShellCommand, out: &mut dyn Write) -> Result<Flow> {
        match cmd {
            ShellCommand::Help => self.help(out)?,
            ShellCommand::AddEmployee {
                id,
                name,
                department,
                max_hours,
            } => self.add_employee(id, name, department, max_hours, out)?,
            ShellCommand::RemoveEmployee(id) => self.remove_employee(&id, out)?,
            ShellCommand::ListEmployees => self.list_employees(out)?,
            ShellCommand::CreateSchedule(start) => self.create_schedule(start, out)?,
            ShellCommand::Assign {
                date,
                shift_index,
                employee,
            } => self.assign(date, shift_index, &employee, out)?,
            ShellCommand::Show => self.show(out)?,
            ShellCommand::Save(path) => self.save(path, out)?,
            ShellCommand::Export(format, path) => self.export(format, path, out)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn help(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Available commands:")?;
        for (usage, what) in COMMANDS {
            writeln!(out, "  {usage:<42} - {what}")?;
        }
        Ok(())
    }

    fn add_employee(
        &mut self,
        id: String,
        name: String,
        department: Option<String>,
        max_hours: Option<u32>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let mut employee = Employee::new(id, name);
        employee.department = department;
        if let Some(hours) = max_hours {
            employee.max_hours_per_week = hours;
        }
        writeln!(out, "Added employee: {}", employee.name)?;
        self.session.add_employee(employee);
        Ok(())
    }

    fn remove_employee(&mut self, id: &EmployeeId, out: &mut dyn Write) -> Result<()> {
        match self.session.remove_employee(id) {
            0 => writeln!(out, "No employee with id {id}")?,
            _ => writeln!(out, "Removed employee: {id}")?,
        }
        Ok(())
    }

    fn list_employees(&self, out: &mut dyn Write) -> Result<()> {
        let roster = self.session.roster();
        if roster.is_empty() {
            writeln!(out, "No employees added yet")?;
            return Ok(());
        }
        writeln!(out, "Employees:")?;
        for e in roster.employees() {
            writeln!(
                out,
                "  {}: {} ({})",
                e.id,
                e.name,
                e.department.as_deref().unwrap_or("No dept")
            )?;
        }
        Ok(())
    }

    fn create_schedule(&mut self, start: NaiveDate, out: &mut dyn Write) -> Result<()> {
        self.session.create_weekly_schedule(start, &self.template)?;
        writeln!(out, "Weekly schedule created from {start}")?;
        Ok(())
    }

    fn assign(
        &mut self,
        date: NaiveDate,
        shift_index: usize,
        employee: &EmployeeId,
        out: &mut dyn Write,
    ) -> Result<()> {
        if self.session.schedule().is_empty() {
            writeln!(out, "No schedule created yet. Use 'create' first.")?;
            return Ok(());
        }
        match self
            .session
            .assign_employee_to_shift(date, shift_index, employee)
        {
            Ok(()) => writeln!(out, "Assignment successful")?,
            Err(err) => writeln!(out, "Assignment failed ({}): {err}", err.kind())?,
        }
        Ok(())
    }

    fn show(&self, out: &mut dyn Write) -> Result<()> {
        if self.session.schedule().is_empty() {
            writeln!(out, "No schedule created yet")?;
            return Ok(());
        }
        write!(out, "{}", self.session.render(RenderFormat::Text)?)?;
        Ok(())
    }

    fn save(&self, path: Option<PathBuf>, out: &mut dyn Write) -> Result<()> {
        let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILE));
        self.session.save(&JsonStorage::open(&path))?;
        writeln!(out, "Data saved to {}", path.display())?;
        Ok(())
    }

    fn export(
        &self,
        format: RenderFormat,
        path: Option<PathBuf>,
        out: &mut dyn Write,
    ) -> Result<()> {
        if self.session.schedule().is_empty() {
            writeln!(out, "No schedule to export")?;
            return Ok(());
        }
        let path = path.unwrap_or_else(|| {
            PathBuf::from(match format {
                RenderFormat::Html => DEFAULT_HTML_FILE,
                _ => DEFAULT_CSV_FILE,
            })
        });
        export_schedule(&path, &*self.session, format)?;
        writeln!(out, "Schedule exported to {}", path.display())?;
        Ok(())
    }
}
