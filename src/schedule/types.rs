use crate::error::ErrorKind;
use crate::model::{EmployeeId, Weekday};
use chrono::NaiveDate;
use thiserror::Error;

/// Raison d'un refus d'assignation. Aucun refus ne modifie le planning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    #[error("no schedule entry for date {0}")]
    UnknownDate(NaiveDate),
    #[error("shift index {index} out of range for {date} ({len} shift(s))")]
    ShiftOutOfRange {
        date: NaiveDate,
        index: usize,
        len: usize,
    },
    #[error("unknown employee: {0}")]
    UnknownEmployee(EmployeeId),
    #[error("employee {employee} is not available on {day}")]
    Unavailable { employee: EmployeeId, day: Weekday },
}

impl AssignError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssignError::UnknownDate(_) | AssignError::UnknownEmployee(_) => ErrorKind::NotFound,
            AssignError::ShiftOutOfRange { .. } => ErrorKind::OutOfRange,
            AssignError::Unavailable { .. } => ErrorKind::Unavailable,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("week starting {0} overflows the calendar")]
    DateOverflow(NaiveDate),
}

impl ScheduleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScheduleError::DateOverflow(_) => ErrorKind::OutOfRange,
        }
    }
}
