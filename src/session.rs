use crate::model::{Employee, EmployeeId, Roster};
use crate::render::{self, RenderFormat};
use crate::schedule::{AssignError, ScheduleError, ScheduleStore};
use crate::storage::{SessionState, Storage, StorageError};
use crate::template::WeekTemplate;
use chrono::NaiveDate;

/// Session de travail : roster et planning côte à côte.
///
/// L'assignation touche les deux structures, d'où ce propriétaire commun.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    roster: Roster,
    schedule: ScheduleStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: SessionState) -> Self {
        Self {
            roster: state.employees,
            schedule: state.schedule,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }
    pub fn schedule(&self) -> &ScheduleStore {
        &self.schedule
    }

    pub fn add_employee(&mut self, employee: Employee) {
        self.roster.add(employee);
    }

    pub fn add_employees(&mut self, employees: Vec<Employee>) {
        for e in employees {
            self.roster.add(e);
        }
    }

    /// Les créneaux déjà assignés à `id` restent en place (référence morte).
    pub fn remove_employee(&mut self, id: &EmployeeId) -> usize {
        self.roster.remove(id)
    }

    pub fn create_weekly_schedule(
        &mut self,
        start: NaiveDate,
        template: &WeekTemplate,
    ) -> Result<(), ScheduleError> {
        self.schedule.create_weekly_schedule(start, template)?;
        Ok(())
    }

    pub fn assign_employee_to_shift(
        &mut self,
        date: NaiveDate,
        shift_index: usize,
        employee_id: &EmployeeId,
    ) -> Result<(), AssignError> {
        self.schedule
            .assign_employee_to_shift(&self.roster, date, shift_index, employee_id)
    }

    pub fn render(&self, format: RenderFormat) -> anyhow::Result<String> {
        render::render(format, &self.roster, &self.schedule)
    }

    pub fn to_state(&self) -> SessionState {
        SessionState {
            employees: self.roster.clone(),
            schedule: self.schedule.clone(),
        }
    }

    pub fn save(&self, storage: &dyn Storage) -> Result<(), StorageError> {
        storage.save(&self.to_state())?;
        tracing::info!(employees = self.roster.len(), days = self.schedule.len(), "state saved");
        Ok(())
    }

    /// Remplace l'état courant par celui du support. En cas d'échec,
    /// la session reste inchangée.
    pub fn load(&mut self, storage: &dyn Storage) -> Result<(), StorageError> {
        match storage.load() {
            Ok(state) => {
                *self = Session::from_state(state);
                tracing::info!(employees = self.roster.len(), days = self.schedule.len(), "state loaded");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "state load failed, keeping current session");
                Err(err)
            }
        }
    }
}
