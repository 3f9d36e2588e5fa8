//! Server-rendered search page.
//!
//! DESIGN
//! ======
//! The page is stateless: one GET form carries every selection (office,
//! search text, school, year, month, meal, allergy toggle) in the query
//! string. Each request re-runs the school search when `q` is present, picks
//! the requested school (or the first hit) and loads that month.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use maud::{DOCTYPE, Markup, PreEscaped, Render, html};
use serde::Deserialize;
use time::macros::offset;
use time::{Date, OffsetDateTime};
use tracing::warn;

use crate::calendar::allergy::ALLERGENS;
use crate::calendar::grid::validate_year_month;
use crate::config::parse_bool;
use crate::neis::{MealKind, OFFICES, Office, School, default_office, office_by_code};
use crate::services::month::{MonthOutcome, MonthQuery, load_month};
use crate::state::AppState;

pub const SELECT_SCHOOL_PROMPT: &str = "학교를 먼저 검색하고 선택해주세요.";
pub const NO_SEARCH_RESULTS: &str = "검색 결과가 없습니다.";
pub const SEARCH_FAILED: &str = "학교 검색 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";
pub const FETCH_FAILED: &str = "데이터를 불러오는 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

/// Years offered on either side of the current one.
const YEAR_SPAN: i32 = 5;

#[must_use]
pub fn no_data_message(school_name: &str, year: i32, month: u8) -> String {
    format!("😭 {school_name}의 {year}년 {month}월에는 식단 및 학사일정 정보가 없습니다.")
}

/// Today's date in Korea Standard Time.
pub(crate) fn today_kst() -> Date {
    OffsetDateTime::now_utc().to_offset(offset!(+9)).date()
}

/// Checkbox values arrive as `on`; absent means off.
pub(crate) fn flag(raw: Option<&str>) -> bool {
    raw.and_then(parse_bool).unwrap_or(false)
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub office: Option<String>,
    /// School-name search text. Absent until the search button is used;
    /// empty lists every school of the office.
    pub q: Option<String>,
    /// Selected school code.
    pub school: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub meal: Option<MealKind>,
    pub allergy: Option<String>,
}

// =============================================================================
// HANDLER
// =============================================================================

/// `GET /` — search form, school picker and the selected month.
pub async fn index(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Result<Html<String>, StatusCode> {
    let today = today_kst();
    let office = query
        .office
        .as_deref()
        .and_then(office_by_code)
        .or_else(|| office_by_code(&state.default_office))
        .unwrap_or_else(default_office);

    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or_else(|| u8::from(today.month()));
    validate_year_month(year, month).map_err(|_| StatusCode::BAD_REQUEST)?;

    let mut view = PageView {
        office,
        search_text: query.q.clone(),
        schools: Vec::new(),
        selected: None,
        current_year: today.year(),
        year,
        month,
        meal: query.meal.unwrap_or_default(),
        show_allergy: flag(query.allergy.as_deref()),
        notice: None,
        calendar: None,
    };

    let Some(search) = query.q.as_deref() else {
        view.notice = Some(Notice::Info(SELECT_SCHOOL_PROMPT.into()));
        return Ok(Html(view.render().into_string()));
    };

    let schools = match state.neis.search_schools(search.trim(), office.code).await {
        Ok(schools) => schools,
        Err(e) => {
            warn!(error = %e, office = office.code, "school search failed");
            view.notice = Some(Notice::Error(SEARCH_FAILED.into()));
            return Ok(Html(view.render().into_string()));
        }
    };
    if schools.is_empty() {
        view.notice = Some(Notice::Warning(NO_SEARCH_RESULTS.into()));
        return Ok(Html(view.render().into_string()));
    }

    let selected = query
        .school
        .as_deref()
        .and_then(|code| schools.iter().position(|s| s.code == code))
        .unwrap_or(0);
    let school = &schools[selected];

    let month_query = MonthQuery {
        office_code: office.code.to_owned(),
        school_code: school.code.clone(),
        school_name: school.name.clone(),
        year,
        month,
        meal: view.meal,
        show_allergy: view.show_allergy,
    };
    match load_month(state.neis.as_ref(), &month_query).await {
        Ok(MonthOutcome::Calendar(html)) => view.calendar = Some(html),
        Ok(MonthOutcome::NoData) => {
            view.notice = Some(Notice::Warning(no_data_message(&school.name, year, month)));
        }
        Ok(MonthOutcome::FetchFailed(e)) => {
            warn!(error = %e, school_code = %school.code, year, month, "menu fetch failed");
            view.notice = Some(Notice::Error(FETCH_FAILED.into()));
        }
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    }

    view.selected = Some(selected);
    view.schools = schools;
    Ok(Html(view.render().into_string()))
}

// =============================================================================
// VIEW
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    fn parts(&self) -> (&'static str, &str) {
        match self {
            Self::Info(text) => ("notice info", text),
            Self::Warning(text) => ("notice warning", text),
            Self::Error(text) => ("notice error", text),
        }
    }
}

struct PageView {
    office: &'static Office,
    search_text: Option<String>,
    schools: Vec<School>,
    selected: Option<usize>,
    current_year: i32,
    year: i32,
    month: u8,
    meal: MealKind,
    show_allergy: bool,
    notice: Option<Notice>,
    calendar: Option<String>,
}

const PAGE_CSS: &str = r"
body { margin: 0; font-family: 'Malgun Gothic', sans-serif; background: #fafbff; color: #2c3e50; }
.main-title { text-align: center; margin: 1.5rem 0 2rem; font-size: 2.5rem; font-weight: bold; }
.layout { display: flex; gap: 24px; padding: 0 24px; align-items: flex-start; }
.sidebar { flex: 0 0 280px; background: #fff; border-radius: 10px; padding: 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.06); }
.sidebar label, .sidebar legend { display: block; font-weight: bold; margin: 12px 0 6px; }
.sidebar select, .sidebar input[type=search] { width: 100%; box-sizing: border-box; padding: 6px; }
.sidebar fieldset { border: none; padding: 0; margin: 0; }
.months { display: grid; grid-template-columns: repeat(3, 1fr); gap: 4px; }
.months label, .meals label { font-weight: normal; margin: 0; }
.sidebar button { width: 100%; margin-top: 10px; padding: 8px; background: #667eea; color: #fff; border: none; border-radius: 6px; cursor: pointer; }
.sidebar button:hover { background: #764ba2; }
main { flex: 1; min-width: 0; }
.notice { padding: 12px 16px; border-radius: 8px; }
.notice.info { background: #e8f0fe; }
.notice.warning { background: #fff8e1; }
.notice.error { background: #fdecea; }
.legend, .about { margin: 24px; }
.legend ul { columns: 4; }
footer { text-align: center; color: #7f8c8d; margin: 2rem 0; font-size: 14px; }
@media (max-width: 768px) { .layout { flex-direction: column; } .sidebar { flex: none; width: 100%; box-sizing: border-box; } .main-title { font-size: 1.8rem; } .legend ul { columns: 2; } }
";

impl PageView {
    /// The year picker's range, plus the requested year when it falls outside
    /// so resubmitting the form keeps it.
    fn year_options(&self) -> Vec<i32> {
        let mut years: Vec<i32> = ((self.current_year - YEAR_SPAN)..=(self.current_year + YEAR_SPAN)).collect();
        if !years.contains(&self.year) {
            years.push(self.year);
            years.sort_unstable();
        }
        years
    }

    fn form(&self) -> Markup {
        html! {
            form method="get" action="/" {
                h2 { "⚙️ 검색 설정" }
                label for="office" { "🏢 교육청을 선택하세요" }
                select id="office" name="office" {
                    @for office in &OFFICES {
                        option value=(office.code) selected[office.code == self.office.code] { (office.name) }
                    }
                }
                label for="q" { "🏫 학교 이름을 입력하세요" }
                input id="q" name="q" type="search" value=(self.search_text.as_deref().unwrap_or_default()) placeholder="전체 목록은 비워두고 검색";
                button type="submit" { "학교 검색" }

                @if !self.schools.is_empty() {
                    label for="school" { "🔎 검색된 학교 중 하나를 선택하세요" }
                    select id="school" name="school" {
                        @for (i, school) in self.schools.iter().enumerate() {
                            option value=(school.code) selected[self.selected == Some(i)] { (school.display_name()) }
                        }
                    }
                    label for="year" { "📅 년" }
                    select id="year" name="year" {
                        @for year in self.year_options() {
                            option value=(year) selected[year == self.year] { (year) }
                        }
                    }
                    fieldset {
                        legend { "📅 월" }
                        div class="months" {
                            @for month in 1..=12u8 {
                                label {
                                    input type="radio" name="month" value=(month) checked[month == self.month];
                                    " " (month) "월"
                                }
                            }
                        }
                    }
                    fieldset class="meals" {
                        legend { "🍽️ 식사 구분" }
                        @for meal in MealKind::ALL {
                            label {
                                input type="radio" name="meal" value=(meal.code()) checked[meal == self.meal];
                                " " (meal.label())
                            }
                        }
                    }
                    label {
                        input type="checkbox" name="allergy" value="on" checked[self.show_allergy];
                        " 알레르기 정보 표시"
                    }
                    button type="submit" { "조회" }
                }
            }
        }
    }
}

fn allergen_legend() -> Markup {
    html! {
        details class="legend" {
            summary { "📌 알레르기 정보 안내 (펼쳐보기)" }
            p { strong { "메뉴 옆의 숫자는 알레르기를 유발할 수 있는 식품을 의미합니다." } }
            ul {
                @for (code, name) in &ALLERGENS {
                    li { code { (code) } ". " (name) }
                }
            }
            p style="text-align: right;" {
                small { "*이 정보는 식품의약품안전처 고시에 따른 것입니다.*" }
            }
        }
    }
}

impl Render for PageView {
    fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="ko" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { "학교 급식 식단표" }
                    style { (PreEscaped(PAGE_CSS)) }
                }
                body {
                    h1 class="main-title" { "🗓️ 학교 급식 식단표" }
                    div class="layout" {
                        aside class="sidebar" { (self.form()) }
                        main {
                            @if let Some(notice) = &self.notice {
                                @let (class, text) = notice.parts();
                                div class=(class) { (text) }
                            }
                            @if let Some(calendar) = &self.calendar {
                                (PreEscaped(calendar))
                            }
                        }
                    }
                    (allergen_legend())
                    p class="about" { "📌 이 서비스는 나이스 교육정보 개방 포털의 API를 활용하여 제작되었습니다." }
                    footer { p { "🍚 학교 급식 식단표" } }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
