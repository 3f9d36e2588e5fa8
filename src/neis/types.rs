//! NEIS domain types, errors and the fetcher trait.

use serde::Serialize;
use time::Month;

use super::codes::MealKind;
use crate::calendar::{MenuMap, ScheduleMap};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while talking to the NEIS open-data hub.
#[derive(Debug, thiserror::Error)]
pub enum NeisError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request could not be sent or the body could not be read.
    #[error("NEIS request failed: {0}")]
    Request(String),

    /// The hub answered with a non-success HTTP status.
    #[error("NEIS response error: status {status}")]
    Status { status: u16 },

    /// The hub answered 200 with a body that is not NEIS JSON.
    #[error("NEIS response unreadable: {0}")]
    Decode(String),

    /// The requested year/month does not form a valid date range.
    #[error("invalid date range: {0}")]
    InvalidRange(String),
}

// =============================================================================
// SCHOOL
// =============================================================================

/// One row of a `schoolInfo` search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct School {
    pub name: String,
    pub code: String,
    pub address: String,
}

impl School {
    /// Label used in pickers: `"<name> (<address>)"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.address)
    }
}

// =============================================================================
// FETCHER TRAIT
// =============================================================================

/// The three NEIS lookups the calendar needs. Enables mocking in tests.
#[async_trait::async_trait]
pub trait NeisApi: Send + Sync {
    /// Search schools by (partial) name within one education office. An empty
    /// name lists every school of the office.
    ///
    /// # Errors
    ///
    /// Returns [`NeisError`] on transport failure only; no match is `Ok(vec![])`.
    async fn search_schools(&self, name: &str, office_code: &str) -> Result<Vec<School>, NeisError>;

    /// Fetch one month of menus for a meal kind.
    ///
    /// # Errors
    ///
    /// Returns [`NeisError`] when the hub cannot be reached, answers with a
    /// failure status, or sends a body that is not NEIS JSON
    /// ([`NeisError::Decode`]). A successful response without rows is an
    /// empty map.
    async fn fetch_monthly_menu(
        &self,
        school_code: &str,
        office_code: &str,
        year: i32,
        month: Month,
        meal: MealKind,
    ) -> Result<MenuMap, NeisError>;

    /// Fetch one month of academic-schedule events. Failures degrade to an
    /// empty map.
    async fn fetch_school_schedule(&self, school_code: &str, office_code: &str, year: i32, month: Month)
    -> ScheduleMap;
}
