//! JSON school lookup and embeddable calendar fragment.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use serde::Deserialize;
use tracing::warn;

use crate::calendar::CalendarError;
use crate::neis::{MealKind, Office, School, office_by_code};
use crate::routes::page::{FETCH_FAILED, flag, no_data_message};
use crate::services::month::{MonthOutcome, MonthQuery, load_month};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SchoolsQuery {
    pub office: Option<String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub office: Option<String>,
    pub school: String,
    /// Shown in the calendar title; the school code stands in when absent.
    pub name: Option<String>,
    pub year: i32,
    pub month: u8,
    #[serde(default)]
    pub meal: MealKind,
    pub allergy: Option<String>,
}

/// Explicit office codes must be known; absent means the configured default.
fn resolve_office(state: &AppState, code: Option<&str>) -> Option<&'static Office> {
    office_by_code(code.unwrap_or(&*state.default_office))
}

/// `GET /api/schools` — schools in one office whose name contains `name`.
pub async fn schools(
    State(state): State<AppState>,
    Query(query): Query<SchoolsQuery>,
) -> Result<Json<Vec<School>>, StatusCode> {
    let office = resolve_office(&state, query.office.as_deref()).ok_or(StatusCode::BAD_REQUEST)?;

    let schools = state
        .neis
        .search_schools(query.name.trim(), office.code)
        .await
        .map_err(|e| {
            warn!(error = %e, office = office.code, "school search failed");
            StatusCode::BAD_GATEWAY
        })?;

    Ok(Json(schools))
}

/// `GET /api/calendar` — one month as a standalone HTML fragment.
pub async fn calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let office = resolve_office(&state, query.office.as_deref())
        .ok_or((StatusCode::BAD_REQUEST, "unknown office".to_owned()))?;

    let school_name = query.name.unwrap_or_else(|| query.school.clone());
    let month_query = MonthQuery {
        office_code: office.code.to_owned(),
        school_code: query.school,
        school_name,
        year: query.year,
        month: query.month,
        meal: query.meal,
        show_allergy: flag(query.allergy.as_deref()),
    };

    let outcome = load_month(state.neis.as_ref(), &month_query)
        .await
        .map_err(|e: CalendarError| (StatusCode::BAD_REQUEST, e.to_string()))?;

    match outcome {
        MonthOutcome::Calendar(html) => Ok(Html(html)),
        MonthOutcome::NoData => Err((
            StatusCode::NOT_FOUND,
            no_data_message(&month_query.school_name, month_query.year, month_query.month),
        )),
        MonthOutcome::FetchFailed(e) => {
            warn!(error = %e, school_code = %month_query.school_code, year = month_query.year, month = month_query.month, "menu fetch failed");
            Err((StatusCode::SERVICE_UNAVAILABLE, FETCH_FAILED.to_owned()))
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
