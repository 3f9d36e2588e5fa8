//! Calendar-grid renderer.
//!
//! DESIGN
//! ======
//! Rendering is split in two: [`build_month_calendar`] merges the menu and
//! schedule maps onto the month grid and produces a [`CalendarView`], and the
//! view's maud `Render` impl emits the HTML table. Cells outside the requested
//! month are padding only; the maps are never consulted for them.

use maud::{Markup, PreEscaped, Render, html};
use time::Weekday;

use super::allergy::describe_codes;
use super::date::{DateKey, MenuMap, ScheduleMap};
use super::dish::parse_dish;
use super::grid::{DayCell, month_grid};
use super::layout::{ColumnWidthPlan, WeekendFlags};
use super::CalendarError;

/// Everything needed to draw one month.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub school_name: &'a str,
    pub year: i32,
    pub month: u8,
    pub menu: &'a MenuMap,
    pub schedule: &'a ScheduleMap,
    /// Human label for the meal, e.g. `"중식"`.
    pub meal_label: &'a str,
    pub show_allergy: bool,
    pub weekend: WeekendFlags,
}

// =============================================================================
// VIEW MODEL
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekday,
    Saturday,
    Sunday,
}

impl DayKind {
    fn of(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Saturday => Self::Saturday,
            Weekday::Sunday => Self::Sunday,
            _ => Self::Weekday,
        }
    }

    fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Weekday => None,
            Self::Saturday => Some("saturday"),
            Self::Sunday => Some("sunday"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishView {
    pub name: String,
    pub long_name: bool,
    /// Present only when allergy display is on and the dish carried codes.
    pub allergy_codes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub day: u8,
    pub kind: DayKind,
    /// Weekend day with no menu entry.
    pub empty_weekend: bool,
    pub event: Option<String>,
    /// `None` when the day has no menu entry at all.
    pub dishes: Option<Vec<DishView>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    OtherMonth { day: u8 },
    Day(DayView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    pub title: String,
    pub columns: ColumnWidthPlan,
    pub weeks: Vec<[CellView; 7]>,
}

// =============================================================================
// BUILD
// =============================================================================

/// Merge the month's menu and schedule data onto its grid.
///
/// # Errors
///
/// Returns [`CalendarError`] when `year`/`month` are out of range.
pub fn build_month_calendar(input: &RenderInput<'_>) -> Result<CalendarView, CalendarError> {
    let grid = month_grid(input.year, input.month)?;
    let columns = ColumnWidthPlan::from(input.weekend);
    let title = format!("{} {}년 {}월 {} 식단", input.school_name, grid.year, u8::from(grid.month), input.meal_label);

    let weeks = grid
        .weeks
        .into_iter()
        .map(|week| week.map(|cell| build_cell(cell, input)))
        .collect();

    Ok(CalendarView { title, columns, weeks })
}

fn build_cell(cell: DayCell, input: &RenderInput<'_>) -> CellView {
    let day = cell.date.day();
    if !cell.in_month {
        return CellView::OtherMonth { day };
    }

    let key = DateKey::from(cell.date);
    let kind = DayKind::of(cell.date.weekday());
    let menu = input.menu.get(&key);

    let dishes = menu.map(|items| {
        items
            .iter()
            .map(|raw| {
                let parsed = parse_dish(raw);
                let long_name = parsed.is_long_name();
                DishView {
                    name: parsed.name,
                    long_name,
                    allergy_codes: parsed.allergy_codes.filter(|_| input.show_allergy),
                }
            })
            .collect()
    });

    CellView::Day(DayView {
        day,
        kind,
        empty_weekend: kind != DayKind::Weekday && menu.is_none(),
        event: input.schedule.get(&key).cloned(),
        dishes,
    })
}

/// Render a month as a self-contained HTML fragment.
///
/// # Errors
///
/// Returns [`CalendarError`] when `year`/`month` are out of range.
pub fn render_month_calendar(input: &RenderInput<'_>) -> Result<String, CalendarError> {
    Ok(build_month_calendar(input)?.render().into_string())
}

// =============================================================================
// HTML
// =============================================================================

const CALENDAR_CSS: &str = r"
.calendar-container { font-family: 'Malgun Gothic', sans-serif; border-radius: 10px; overflow: hidden; box-shadow: 0 4px 12px rgba(0,0,0,0.1); background: #fff; }
.calendar-header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 15px; text-align: center; font-size: 24px; font-weight: bold; }
.calendar-table { width: 100%; border-collapse: collapse; table-layout: fixed; }
.calendar-table th { padding: 10px; text-align: center; font-size: 14px; background-color: #f8f9ff; border: 1px solid #e9e9e9; }
.calendar-table td { min-height: 120px; padding: 8px; border: 1px solid #e9e9e9; vertical-align: top; word-break: break-all; }
.day-number { font-weight: bold; font-size: 14px; margin-bottom: 5px; }
.sunday .day-number { color: #e74c3c; }
.saturday .day-number { color: #3498db; }
.other-month { background-color: #f5f5f5; color: #ccc; }
.empty-weekend { background-color: #f8f9fa; opacity: 0.7; }
.empty-weekend .day-number { color: #b0b0b0; }
.menu-list { list-style: none; padding: 0; margin: 0; font-size: 12.5px; }
.menu-item { background-color: rgba(102, 126, 234, 0.08); border-radius: 4px; padding: 5px 7px; margin-bottom: 4px; line-height: 1.3; }
.allergy-info { font-size: 11px; color: #e74c3c; margin-left: 4px; }
.long-menu-name { font-size: 11px; font-weight: 500; }
.event-name { font-size: 11.5px; font-weight: bold; background-color: #e8f5e9; color: #2e7d32; padding: 3px 6px; border-radius: 4px; margin-bottom: 5px; display: inline-block; max-width: 100%; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
@media (max-width: 768px) {
  .calendar-header { font-size: 18px; padding: 12px; }
  .calendar-table th { font-size: 12px; padding: 8px 4px; }
  .calendar-table td { padding: 4px; min-height: 100px; }
  .day-number { font-size: 12px; }
  .menu-list { font-size: 11px; }
  .menu-item { padding: 4px 5px; }
  .event-name { font-size: 10px; padding: 2px 4px; }
}
";

const HEADER_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

fn header_style(column: usize, width: f64) -> String {
    let color = match column {
        0 => "color: #e74c3c; ",
        6 => "color: #3498db; ",
        _ => "",
    };
    format!("{color}width: {width}%;")
}

impl Render for CalendarView {
    fn render(&self) -> Markup {
        html! {
            style { (PreEscaped(CALENDAR_CSS)) }
            div class="calendar-container" {
                div class="calendar-header" { (self.title) }
                table class="calendar-table" {
                    thead {
                        tr {
                            @for (i, (label, width)) in HEADER_LABELS.iter().zip(self.columns.widths()).enumerate() {
                                th style=(header_style(i, *width)) { (label) }
                            }
                        }
                    }
                    tbody {
                        @for week in &self.weeks {
                            tr {
                                @for cell in week { (cell) }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl DayView {
    /// `None` for a plain weekday so the cell carries no class attribute.
    fn css_class(&self) -> Option<String> {
        let classes: Vec<&str> = self
            .empty_weekend
            .then_some("empty-weekend")
            .into_iter()
            .chain(self.kind.css_class())
            .collect();
        (!classes.is_empty()).then(|| classes.join(" "))
    }
}

impl Render for CellView {
    fn render(&self) -> Markup {
        match self {
            Self::OtherMonth { day } => html! {
                td class="other-month" { div class="day-number" { (day) } }
            },
            Self::Day(view) => html! {
                td class=[view.css_class()] {
                    div class="day-number" { (view.day) }
                    @if let Some(event) = &view.event {
                        div class="event-name" title=(event) { "🗓️ " (event) }
                    }
                    @if let Some(dishes) = &view.dishes {
                        ul class="menu-list" {
                            @for dish in dishes { (dish) }
                        }
                    }
                }
            },
        }
    }
}

impl Render for DishView {
    fn render(&self) -> Markup {
        html! {
            li class="menu-item" {
                @if self.long_name {
                    span class="long-menu-name" { (self.name) }
                } @else {
                    (self.name)
                }
                @if let Some(codes) = &self.allergy_codes {
                    @let names = describe_codes(codes);
                    span class="allergy-info" title=[(!names.is_empty()).then(|| names.join(", "))] {
                        "(" (codes) ")"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
