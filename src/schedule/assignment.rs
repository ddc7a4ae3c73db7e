use super::{AssignError, ScheduleStore};
use crate::model::{EmployeeId, Roster};
use chrono::NaiveDate;

/// Vérifie dans l'ordre : date connue, index valide, employé connu,
/// jour disponible. N'écrit que si tout passe.
pub(super) fn assign_employee_to_shift(
    store: &mut ScheduleStore,
    roster: &Roster,
    date: NaiveDate,
    shift_index: usize,
    employee_id: &EmployeeId,
) -> Result<(), AssignError> {
    let Some(entry) = store.days.get_mut(&date) else {
        return Err(AssignError::UnknownDate(date));
    };

    let len = entry.shifts.len();
    if shift_index >= len {
        return Err(AssignError::ShiftOutOfRange {
            date,
            index: shift_index,
            len,
        });
    }

    let employee = roster
        .lookup(employee_id)
        .ok_or_else(|| AssignError::UnknownEmployee(employee_id.clone()))?;

    if !employee.is_available_on(entry.day) {
        return Err(AssignError::Unavailable {
            employee: employee_id.clone(),
            day: entry.day,
        });
    }

    // réassignation silencieuse : le dernier écrit gagne
    entry.shifts[shift_index].assigned = Some(employee_id.clone());
    Ok(())
}
