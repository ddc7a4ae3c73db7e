#![forbid(unsafe_code)]
//! Semainier — planification hebdomadaire d'employés par créneaux (sans BD).
//!
//! - Roster d'employés avec jours de disponibilité.
//! - Semaine de 7 jours construite depuis un modèle, assignation validée.
//! - Stockage fichier (JSON), exports CSV/HTML/texte.

pub mod error;
pub mod io;
pub mod model;
pub mod render;
pub mod schedule;
pub mod session;
pub mod shell;
pub mod storage;
pub mod template;

pub use error::ErrorKind;
pub use model::{DayEntry, Employee, EmployeeId, Roster, Shift, Weekday, DEFAULT_AVAILABLE_DAYS};
pub use render::{
    assignee_label, render, CsvRenderer, HtmlRenderer, RenderFormat, ScheduleRenderer,
    TextRenderer, UNASSIGNED,
};
pub use schedule::{AssignError, ScheduleError, ScheduleStore};
pub use session::Session;
pub use shell::{Flow, Shell, ShellCommand};
pub use storage::{JsonStorage, SessionState, Storage, StorageError};
pub use template::{export_template_json, load_template_from_file, WeekTemplate};
