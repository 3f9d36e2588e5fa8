//! Sunday-first month geometry.

use time::{Date, Duration, Month, Weekday};

use super::CalendarError;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9998;

/// One cell of the grid. Days borrowed from the neighbouring months to fill
/// the first and last week have `in_month == false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: Date,
    pub in_month: bool,
}

/// Seven consecutive days, Sunday through Saturday.
pub type WeekRow = [DayCell; 7];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: Month,
    pub weeks: Vec<WeekRow>,
}

/// Validate a caller-supplied year/month pair.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for a month outside 1..=12 and
/// [`CalendarError::YearOutOfRange`] for a year outside [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn validate_year_month(year: i32, month: u8) -> Result<Month, CalendarError> {
    let month = Month::try_from(month).map_err(|_| CalendarError::InvalidMonth(month))?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange(year));
    }
    Ok(month)
}

/// Lay out the weeks covering `month` of `year`.
///
/// # Errors
///
/// See [`validate_year_month`].
pub fn month_grid(year: i32, month: u8) -> Result<MonthGrid, CalendarError> {
    let month = validate_year_month(year, month)?;
    let first = Date::from_calendar_date(year, month, 1).map_err(|_| CalendarError::YearOutOfRange(year))?;

    let lead = i64::from(first.weekday().number_days_from_sunday());
    let mut week_start = first - Duration::days(lead);
    let mut weeks = Vec::with_capacity(6);

    loop {
        let start = week_start;
        let row: WeekRow = std::array::from_fn(|i| {
            #[allow(clippy::cast_possible_wrap)]
            let date = start + Duration::days(i as i64);
            DayCell { date, in_month: date.month() == month }
        });
        weeks.push(row);

        week_start = start + Duration::days(7);
        if week_start.month() != month {
            break;
        }
    }

    debug_assert!(weeks.iter().all(|w| w[0].date.weekday() == Weekday::Sunday));
    Ok(MonthGrid { year, month, weeks })
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod tests;
