use crate::model::{Employee, Weekday};
use crate::render::RenderFormat;
use crate::session::Session;
use anyhow::{bail, Context};
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV:
/// header `id,name[,department][,max_hours_per_week][,available_days]`
///
/// `available_days` est une liste séparée par `;` (`Monday;Tue;...`).
/// Une colonne vide garde la valeur par défaut.
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        if id.is_empty() || name.is_empty() {
            bail!("invalid employee row (empty)");
        }
        let mut employee = Employee::new(id, name);
        if let Some(dept) = non_empty(rec.get(2)) {
            employee.department = Some(dept.to_string());
        }
        if let Some(hours) = non_empty(rec.get(3)) {
            employee.max_hours_per_week = hours
                .parse()
                .with_context(|| format!("invalid max_hours_per_week for id {id}"))?;
        }
        if let Some(days) = non_empty(rec.get(4)) {
            employee.available_days = parse_days(days)
                .with_context(|| format!("invalid available_days for id {id}"))?
                .into_iter()
                .collect();
        }
        out.push(employee);
    }
    Ok(out)
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}

/// Liste de jours séparés par `;` ou `,`.
pub fn parse_days(raw: &str) -> anyhow::Result<Vec<Weekday>> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.parse::<Weekday>().map_err(anyhow::Error::msg))
        .collect()
}

/// Écrit le planning rendu dans `path`.
pub fn export_schedule<P: AsRef<Path>>(
    path: P,
    session: &Session,
    format: RenderFormat,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let content = session.render(format)?;
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), ?format, "schedule exported");
    Ok(())
}
