//! Date keys and the per-month data maps joined on them.

use std::collections::BTreeMap;
use std::fmt;

use time::{Date, Month};

/// A calendar day identified the way NEIS identifies it: `YYYYMMDD`.
///
/// Ordering follows the wrapped `Date`, which matches the lexical order of
/// the 8-character form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(Date);

impl DateKey {
    /// Parse an 8-digit `YYYYMMDD` string. Returns `None` for anything that
    /// is not exactly eight ASCII digits naming a real date.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year: i32 = raw[0..4].parse().ok()?;
        let month: u8 = raw[4..6].parse().ok()?;
        let day: u8 = raw[6..8].parse().ok()?;
        let month = Month::try_from(month).ok()?;
        Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    #[must_use]
    pub fn date(self) -> Date {
        self.0
    }
}

impl From<Date> for DateKey {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.0.year(), u8::from(self.0.month()), self.0.day())
    }
}

/// Dishes served per day, in menu order.
pub type MenuMap = BTreeMap<DateKey, Vec<String>>;

/// One display string per day. Several events on the same day arrive
/// pre-joined with `", "`.
pub type ScheduleMap = BTreeMap<DateKey, String>;

/// First and last day of a month as NEIS range bounds.
///
/// # Errors
///
/// Returns the `time` range error when `year` is outside what `Date` supports.
pub fn month_bounds(year: i32, month: Month) -> Result<(DateKey, DateKey), time::error::ComponentRange> {
    let first = Date::from_calendar_date(year, month, 1)?;
    let last = Date::from_calendar_date(year, month, time::util::days_in_year_month(year, month))?;
    Ok((DateKey(first), DateKey(last)))
}

#[cfg(test)]
#[path = "date_test.rs"]
mod tests;
