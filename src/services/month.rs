//! Month query: fetch, classify, render.
//!
//! DESIGN
//! ======
//! One query is one (office, school, year, month, meal) tuple. The menu and
//! schedule fetches share no data so they run concurrently; rendering waits
//! for both.
//!
//! ERROR HANDLING
//! ==============
//! A failed menu fetch is reported as [`MonthOutcome::FetchFailed`] (worth a
//! retry later), distinct from [`MonthOutcome::NoData`] (the hub answered,
//! nothing is published for that month). Invalid year/month is rejected
//! before any request goes out.

use tracing::info;

use crate::calendar::grid::validate_year_month;
use crate::calendar::{CalendarError, RenderInput, WeekendFlags, render_month_calendar};
use crate::neis::{MealKind, NeisApi, NeisError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthQuery {
    pub office_code: String,
    pub school_code: String,
    pub school_name: String,
    pub year: i32,
    pub month: u8,
    pub meal: MealKind,
    pub show_allergy: bool,
}

#[derive(Debug)]
pub enum MonthOutcome {
    /// The menu fetch failed at the transport level. Callers log it with
    /// their own request context.
    FetchFailed(NeisError),
    /// Both menu and schedule came back empty.
    NoData,
    /// Rendered calendar markup.
    Calendar(String),
}

/// Run one month query against the hub.
///
/// # Errors
///
/// Returns [`CalendarError`] when the query's year/month is out of range.
pub async fn load_month(neis: &dyn NeisApi, query: &MonthQuery) -> Result<MonthOutcome, CalendarError> {
    let month = validate_year_month(query.year, query.month)?;

    let (menu, schedule) = tokio::join!(
        neis.fetch_monthly_menu(&query.school_code, &query.office_code, query.year, month, query.meal),
        neis.fetch_school_schedule(&query.school_code, &query.office_code, query.year, month),
    );

    let menu = match menu {
        Ok(menu) => menu,
        Err(e) => return Ok(MonthOutcome::FetchFailed(e)),
    };

    if menu.is_empty() && schedule.is_empty() {
        info!(school_code = %query.school_code, year = query.year, month = query.month, "no menu or schedule published");
        return Ok(MonthOutcome::NoData);
    }

    let html = render_month_calendar(&RenderInput {
        school_name: &query.school_name,
        year: query.year,
        month: query.month,
        menu: &menu,
        schedule: &schedule,
        meal_label: query.meal.label(),
        show_allergy: query.show_allergy,
        weekend: WeekendFlags::from_menu(&menu),
    })?;

    info!(
        school_code = %query.school_code,
        year = query.year,
        month = query.month,
        menu_days = menu.len(),
        schedule_days = schedule.len(),
        "month rendered"
    );
    Ok(MonthOutcome::Calendar(html))
}

#[cfg(test)]
#[path = "month_test.rs"]
mod tests;
