mod assignment;
mod types;
mod util;

pub use types::{AssignError, ScheduleError};

use crate::model::{DayEntry, EmployeeId, Roster, Shift, Weekday};
use crate::template::WeekTemplate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Planning d'une semaine : une entrée par date, dans l'ordre chronologique.
///
/// Le planning ne possède pas les employés ; les créneaux ne portent que
/// leur identifiant, résolu via le [`Roster`] au moment de l'usage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ScheduleStore {
    days: BTreeMap<NaiveDate, DayEntry>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &DayEntry)> {
        self.days.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayEntry> {
        self.days.get(&date)
    }

    pub fn shift(&self, date: NaiveDate, index: usize) -> Option<&Shift> {
        self.days.get(&date).and_then(|d| d.shifts.get(index))
    }

    /// Remplace tout le planning par sept jours à partir de `start`.
    ///
    /// Le libellé du jour dépend du décalage (0 = lundi), pas du jour réel
    /// de `start`. Les créneaux sont copiés du template, non assignés.
    pub fn create_weekly_schedule(
        &mut self,
        start: NaiveDate,
        template: &WeekTemplate,
    ) -> Result<&BTreeMap<NaiveDate, DayEntry>, ScheduleError> {
        let dates = util::week_dates(start).ok_or(ScheduleError::DateOverflow(start))?;

        let days = dates
            .into_iter()
            .zip(Weekday::ALL)
            .map(|(date, day)| {
                let shifts = template
                    .shifts_for(day)
                    .iter()
                    .cloned()
                    .map(|mut s| {
                        s.assigned = None;
                        s
                    })
                    .collect();
                (date, DayEntry { day, shifts })
            })
            .collect();

        self.days = days;
        tracing::info!(%start, shifts = self.shift_count(), "weekly schedule created");
        Ok(&self.days)
    }

    /// Assigne `employee_id` au créneau `shift_index` de `date`.
    pub fn assign_employee_to_shift(
        &mut self,
        roster: &Roster,
        date: NaiveDate,
        shift_index: usize,
        employee_id: &EmployeeId,
    ) -> Result<(), AssignError> {
        let res =
            assignment::assign_employee_to_shift(self, roster, date, shift_index, employee_id);
        match &res {
            Ok(()) => tracing::debug!(%date, shift_index, employee = %employee_id, "shift assigned"),
            Err(err) => tracing::warn!(%date, shift_index, employee = %employee_id, %err, "assignment rejected"),
        }
        res
    }

    pub fn shift_count(&self) -> usize {
        self.days.values().map(|d| d.shifts.len()).sum()
    }
}
