use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Jour de la semaine (semaine commençant le lundi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Les sept jours, du lundi au dimanche.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Libellé du jour à `offset` jours du début de semaine (0 = lundi).
    pub fn from_offset(offset: usize) -> Option<Self> {
        Self::ALL.get(offset).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Accepte le nom complet ou l'abréviation à trois lettres, sans casse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| {
                let name = d.name().to_ascii_lowercase();
                name == lower || name[..3] == lower
            })
            .ok_or_else(|| format!("unknown weekday: {s}"))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

/// Disponibilité par défaut : du lundi au vendredi.
pub const DEFAULT_AVAILABLE_DAYS: [Weekday; 5] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
];

pub const DEFAULT_MAX_HOURS_PER_WEEK: u32 = 40;

fn default_available_days() -> BTreeSet<Weekday> {
    DEFAULT_AVAILABLE_DAYS.into_iter().collect()
}

fn default_max_hours() -> u32 {
    DEFAULT_MAX_HOURS_PER_WEEK
}

/// Identifiant fort pour Employee
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employé planifiable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub id: EmployeeId,
    #[serde(default)]
    pub department: Option<String>,
    /// Conservé et persisté, jamais contrôlé lors des assignations.
    #[serde(default = "default_max_hours")]
    pub max_hours_per_week: u32,
    #[serde(default = "default_available_days")]
    pub available_days: BTreeSet<Weekday>,
}

impl Employee {
    pub fn new<I: AsRef<str>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            name: name.into(),
            id: EmployeeId::new(id),
            department: None,
            max_hours_per_week: DEFAULT_MAX_HOURS_PER_WEEK,
            available_days: default_available_days(),
        }
    }

    pub fn with_department<D: Into<String>>(mut self, department: D) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_max_hours(mut self, hours: u32) -> Self {
        self.max_hours_per_week = hours;
        self
    }

    pub fn with_available_days<I: IntoIterator<Item = Weekday>>(mut self, days: I) -> Self {
        self.available_days = days.into_iter().collect();
        self
    }

    pub fn is_available_on(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }
}

/// Créneau d'une journée. Les heures sont des chaînes `HH:MM`, non ordonnées.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub start_time: String,
    pub end_time: String,
    pub position: String,
    /// Référence faible : l'employé peut avoir été retiré du roster depuis.
    #[serde(rename = "employee_id", default)]
    pub assigned: Option<EmployeeId>,
}

impl Shift {
    pub fn new<S: Into<String>, E: Into<String>, P: Into<String>>(
        start_time: S,
        end_time: E,
        position: P,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            position: position.into(),
            assigned: None,
        }
    }
}

/// Journée du planning ; la date sert de clé dans le `ScheduleStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: Weekday,
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

/// Ensemble des employés, dans l'ordre d'ajout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Ajoute en fin de liste. Les doublons d'id sont acceptés ; seule la
    /// première occurrence est visible via `lookup`.
    pub fn add(&mut self, employee: Employee) {
        if self.lookup(&employee.id).is_some() {
            tracing::warn!(id = %employee.id, "duplicate employee id added to roster");
        }
        self.employees.push(employee);
    }

    /// Retire toutes les occurrences de `id`. Renvoie le nombre retiré.
    pub fn remove(&mut self, id: &EmployeeId) -> usize {
        let before = self.employees.len();
        self.employees.retain(|e| &e.id != id);
        before - self.employees.len()
    }

    pub fn lookup<'a>(&'a self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }
}

impl FromIterator<Employee> for Roster {
    fn from_iter<T: IntoIterator<Item = Employee>>(iter: T) -> Self {
        let mut roster = Roster::new();
        for e in iter {
            roster.add(e);
        }
        roster
    }
}
