//! reqwest-backed [`NeisApi`] implementation.

use std::time::Duration;

use time::Month;
use tracing::{debug, warn};

use super::codes::MealKind;
use super::config::{NeisConfig, NeisTimeouts};
use super::parse::{self, MEAL_SERVICE, SCHEDULE_SERVICE, SCHOOL_SERVICE};
use super::types::{NeisApi, NeisError, School};
use crate::calendar::date::month_bounds;
use crate::calendar::{MenuMap, ScheduleMap};

const SCHOOL_PAGE_SIZE: &str = "1000";
const MONTH_PAGE_SIZE: &str = "100";

pub struct NeisClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    timeouts: NeisTimeouts,
}

impl NeisClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns [`NeisError::HttpClientBuild`] if the TLS backend fails to initialize.
    pub fn new(config: NeisConfig) -> Result<Self, NeisError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| NeisError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            timeouts: config.timeouts,
        })
    }

    /// GET one hub service and return the body text.
    async fn get_text(
        &self,
        service: &str,
        page_size: &str,
        params: &[(&str, &str)],
        timeout_secs: u64,
    ) -> Result<String, NeisError> {
        let url = format!("{}/{service}", self.base_url);
        let response = self
            .http
            .get(url)
            .query(&[("KEY", self.api_key.as_str()), ("Type", "json"), ("pIndex", "1"), ("pSize", page_size)])
            .query(params)
            .timeout(Duration::from_secs(timeout_secs))
            .send()
            .await
            // The URL carries the API key; keep it out of error text.
            .map_err(|e| NeisError::Request(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NeisError::Status { status: status.as_u16() });
        }
        response
            .text()
            .await
            .map_err(|e| NeisError::Request(e.without_url().to_string()))
    }
}

fn month_range(year: i32, month: Month) -> Result<(String, String), NeisError> {
    let (first, last) = month_bounds(year, month).map_err(|e| NeisError::InvalidRange(e.to_string()))?;
    Ok((first.to_string(), last.to_string()))
}

#[async_trait::async_trait]
impl NeisApi for NeisClient {
    async fn search_schools(&self, name: &str, office_code: &str) -> Result<Vec<School>, NeisError> {
        let params = [("ATPT_OFCDC_SC_CODE", office_code), ("SCHUL_NM", name)];
        let body = self
            .get_text(SCHOOL_SERVICE, SCHOOL_PAGE_SIZE, &params, self.timeouts.search_secs)
            .await?;
        match parse::parse_schools(&body) {
            Ok(schools) => {
                debug!(office_code, query = name, count = schools.len(), "school search");
                Ok(schools)
            }
            Err(e) => {
                warn!(error = %e, office_code, "school search returned unparseable body");
                Ok(Vec::new())
            }
        }
    }

    async fn fetch_monthly_menu(
        &self,
        school_code: &str,
        office_code: &str,
        year: i32,
        month: Month,
        meal: MealKind,
    ) -> Result<MenuMap, NeisError> {
        let (from, to) = month_range(year, month)?;
        let params = [
            ("ATPT_OFCDC_SC_CODE", office_code),
            ("SD_SCHUL_CODE", school_code),
            ("MMEAL_SC_CODE", meal.code()),
            ("MLSV_FROM_YMD", from.as_str()),
            ("MLSV_TO_YMD", to.as_str()),
        ];
        let body = self
            .get_text(MEAL_SERVICE, MONTH_PAGE_SIZE, &params, self.timeouts.monthly_secs)
            .await?;
        parse::parse_menu(&body).map_err(|e| NeisError::Decode(e.to_string()))
    }

    async fn fetch_school_schedule(
        &self,
        school_code: &str,
        office_code: &str,
        year: i32,
        month: Month,
    ) -> ScheduleMap {
        let result: Result<String, NeisError> = async {
            let (from, to) = month_range(year, month)?;
            let params = [
                ("ATPT_OFCDC_SC_CODE", office_code),
                ("SD_SCHUL_CODE", school_code),
                ("AA_FROM_YMD", from.as_str()),
                ("AA_TO_YMD", to.as_str()),
            ];
            self.get_text(SCHEDULE_SERVICE, MONTH_PAGE_SIZE, &params, self.timeouts.monthly_secs)
                .await
        }
        .await;

        match result {
            Ok(body) => parse::parse_schedule(&body).unwrap_or_else(|e| {
                warn!(error = %e, school_code, "schedule response unparseable; treating as empty");
                ScheduleMap::new()
            }),
            Err(e) => {
                warn!(error = %e, school_code, "schedule fetch failed; treating as empty");
                ScheduleMap::new()
            }
        }
    }
}
