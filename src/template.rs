use crate::model::{Shift, Weekday};
use anyhow::{bail, Context, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Modèle de semaine : liste ordonnée de créneaux par jour.
///
/// Un jour absent du modèle donne une journée sans créneau.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct WeekTemplate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub days: BTreeMap<Weekday, Vec<Shift>>,
}

impl WeekTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Semaine type d'un commerce : encadrement, vente, soirée et week-end.
    pub fn standard() -> Self {
        let manager = || Shift::new("09:00", "17:00", "Manager");
        let sales = || Shift::new("10:00", "18:00", "Sales Associate");
        let evening = || Shift::new("14:00", "22:00", "Evening Shift");

        Self::new()
            .with_name("standard")
            .with_day(Weekday::Monday, vec![manager(), sales(), evening()])
            .with_day(Weekday::Tuesday, vec![manager(), sales()])
            .with_day(Weekday::Wednesday, vec![manager(), sales()])
            .with_day(Weekday::Thursday, vec![manager(), sales()])
            .with_day(Weekday::Friday, vec![manager(), sales(), evening()])
            .with_day(
                Weekday::Saturday,
                vec![Shift::new("10:00", "18:00", "Weekend Staff")],
            )
            .with_day(
                Weekday::Sunday,
                vec![Shift::new("12:00", "20:00", "Weekend Staff")],
            )
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_day(mut self, day: Weekday, shifts: Vec<Shift>) -> Self {
        self.days.insert(day, shifts);
        self
    }

    pub fn shifts_for(&self, day: Weekday) -> &[Shift] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Contrôle le format `HH:MM` des heures et l'absence d'assignation.
    /// L'ordre début/fin n'est pas vérifié.
    pub fn validate(&self) -> Result<()> {
        for (day, shifts) in &self.days {
            for (idx, shift) in shifts.iter().enumerate() {
                if shift.position.trim().is_empty() {
                    bail!("{day} shift #{idx}: position cannot be empty");
                }
                parse_hhmm(&shift.start_time)
                    .with_context(|| format!("{day} shift #{idx}: invalid start_time"))?;
                parse_hhmm(&shift.end_time)
                    .with_context(|| format!("{day} shift #{idx}: invalid end_time"))?;
                if shift.assigned.is_some() {
                    bail!("{day} shift #{idx}: template shifts must be unassigned");
                }
            }
        }
        Ok(())
    }
}

fn parse_hhmm(raw: &str) -> Result<NaiveTime> {
    if raw.len() != 5 {
        bail!("expected HH:MM, got {raw:?}");
    }
    NaiveTime::parse_from_str(raw, "%H:%M").with_context(|| format!("expected HH:MM, got {raw:?}"))
}

pub fn export_template_json<P: AsRef<Path>>(path: P, template: &WeekTemplate) -> Result<()> {
    let json = serde_json::to_string_pretty(template)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_template_from_file<P: AsRef<Path>>(path: P) -> Result<WeekTemplate> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading template {}", path.display()))?;
    let template: WeekTemplate = serde_json::from_slice(&data)
        .with_context(|| format!("parsing template {}", path.display()))?;
    template.validate()?;
    Ok(template)
}
