//! Monthly meal calendar: dish parsing, column layout and grid rendering.
//!
//! DESIGN
//! ======
//! Pure transformation over already-fetched data. Callers hand in a
//! [`MenuMap`] and [`ScheduleMap`] for one month and get back markup; nothing
//! here performs I/O or keeps state between calls.

pub mod allergy;
pub mod date;
pub mod dish;
pub mod grid;
pub mod layout;
pub mod render;

pub use date::{DateKey, MenuMap, ScheduleMap};
pub use layout::WeekendFlags;
pub use render::{RenderInput, render_month_calendar};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u8),
    #[error("year {0} is outside the supported range")]
    YearOutOfRange(i32),
}
