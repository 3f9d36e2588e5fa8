//! Response parsing for the NEIS hub's JSON payloads.
//!
//! Every service wraps its rows the same way:
//!
//! ```text
//! { "<service>": [ { "head": [...] }, { "row": [ {...}, ... ] } ] }
//! ```
//!
//! When nothing matches, the hub instead answers with a bare
//! `{"RESULT": {"CODE": "INFO-200", ...}}`, which parses to zero rows here.

use serde_json::Value;
use tracing::debug;

use super::types::School;
use crate::calendar::{DateKey, MenuMap, ScheduleMap};

pub const SCHOOL_SERVICE: &str = "schoolInfo";
pub const MEAL_SERVICE: &str = "mealServiceDietInfo";
pub const SCHEDULE_SERVICE: &str = "SchoolSchedule";

/// Separator NEIS uses between dishes inside `DDISH_NM`.
const DISH_SEPARATOR: &str = "<br/>";
/// Day-type label for an ordinary class day; not worth a badge on its own.
const REGULAR_CLASS_DAY: &str = "수업일";
const EVENT_JOINER: &str = ", ";

fn service_rows<'a>(payload: &'a Value, service: &str) -> &'a [Value] {
    payload
        .get(service)
        .and_then(Value::as_array)
        .and_then(|sections| sections.get(1))
        .and_then(|section| section.get("row"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn field<'a>(row: &'a Value, name: &str) -> Option<&'a str> {
    row.get(name).and_then(Value::as_str)
}

/// Parse a `schoolInfo` response body.
///
/// # Errors
///
/// Returns the JSON error if the body is not valid JSON.
pub fn parse_schools(body: &str) -> Result<Vec<School>, serde_json::Error> {
    let payload: Value = serde_json::from_str(body)?;
    let schools = service_rows(&payload, SCHOOL_SERVICE)
        .iter()
        .filter_map(|row| {
            Some(School {
                name: field(row, "SCHUL_NM")?.to_owned(),
                code: field(row, "SD_SCHUL_CODE")?.to_owned(),
                address: field(row, "ORG_RDNMA").unwrap_or_default().to_owned(),
            })
        })
        .collect();
    Ok(schools)
}

/// Split a raw `DDISH_NM` value into trimmed, non-empty dish strings.
#[must_use]
pub fn split_dishes(raw: &str) -> Vec<String> {
    raw.split(DISH_SEPARATOR)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse a `mealServiceDietInfo` response body into a menu map.
///
/// # Errors
///
/// Returns the JSON error if the body is not valid JSON.
pub fn parse_menu(body: &str) -> Result<MenuMap, serde_json::Error> {
    let payload: Value = serde_json::from_str(body)?;
    let mut menu = MenuMap::new();
    for row in service_rows(&payload, MEAL_SERVICE) {
        let Some(key) = field(row, "MLSV_YMD").and_then(DateKey::parse) else {
            debug!(row = %row, "menu row without a valid MLSV_YMD; skipped");
            continue;
        };
        let dishes = split_dishes(field(row, "DDISH_NM").unwrap_or_default());
        menu.insert(key, dishes);
    }
    Ok(menu)
}

/// Text shown for one schedule row: the event name, or the day type when it
/// marks something other than a regular class day.
fn schedule_display_text(row: &Value) -> Option<&str> {
    let event = field(row, "EVENT_NM").unwrap_or_default().trim();
    if !event.is_empty() {
        return Some(event);
    }
    let day_type = field(row, "SBTR_DD_SC_NM").unwrap_or_default().trim();
    (!day_type.is_empty() && day_type != REGULAR_CLASS_DAY).then_some(day_type)
}

/// Parse a `SchoolSchedule` response body into a schedule map. Several events
/// on one date are joined with `", "`; repeats of an already listed event are
/// dropped.
///
/// # Errors
///
/// Returns the JSON error if the body is not valid JSON.
pub fn parse_schedule(body: &str) -> Result<ScheduleMap, serde_json::Error> {
    let payload: Value = serde_json::from_str(body)?;
    let mut schedule = ScheduleMap::new();
    for row in service_rows(&payload, SCHEDULE_SERVICE) {
        let Some(key) = field(row, "AA_YMD").and_then(DateKey::parse) else {
            continue;
        };
        let Some(text) = schedule_display_text(row) else {
            continue;
        };
        schedule
            .entry(key)
            .and_modify(|existing: &mut String| {
                if !existing.split(EVENT_JOINER).any(|e| e == text) {
                    existing.push_str(EVENT_JOINER);
                    existing.push_str(text);
                }
            })
            .or_insert_with(|| text.to_owned());
    }
    Ok(schedule)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
