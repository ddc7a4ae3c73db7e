use chrono::{Days, NaiveDate};

/// Les sept dates consécutives à partir de `start` (inclus).
pub(super) fn week_dates(start: NaiveDate) -> Option<[NaiveDate; 7]> {
    let mut out = [start; 7];
    for (offset, slot) in out.iter_mut().enumerate().skip(1) {
        *slot = start.checked_add_days(Days::new(offset as u64))?;
    }
    Some(out)
}
