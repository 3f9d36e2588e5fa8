//! Column width allocation for the 7-day grid.
//!
//! Weekend columns that carry no menu all month shrink to a fixed narrow
//! width; the remaining percentage is split evenly across the wide columns.

use time::Weekday;

use super::date::MenuMap;

/// Width (percent) of a weekend column with no menu data.
pub const NARROW_WIDTH: f64 = 4.0;

const COLUMNS: usize = 7;

/// Whether any day of the month serves a menu on Saturday / Sunday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekendFlags {
    pub saturday_has_menu: bool,
    pub sunday_has_menu: bool,
}

impl WeekendFlags {
    /// Scan a month's menu keys for weekend service days.
    #[must_use]
    pub fn from_menu(menu: &MenuMap) -> Self {
        let mut flags = Self::default();
        for key in menu.keys() {
            match key.date().weekday() {
                Weekday::Saturday => flags.saturday_has_menu = true,
                Weekday::Sunday => flags.sunday_has_menu = true,
                _ => {}
            }
            if flags.saturday_has_menu && flags.sunday_has_menu {
                break;
            }
        }
        flags
    }
}

/// Percentage widths in Sunday-first column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnWidthPlan {
    widths: [f64; COLUMNS],
}

impl ColumnWidthPlan {
    #[must_use]
    pub fn widths(&self) -> &[f64; COLUMNS] {
        &self.widths
    }
}

/// Compute the width plan for a month given which weekend days carry menus.
#[must_use]
pub fn column_widths(saturday_has_menu: bool, sunday_has_menu: bool) -> ColumnWidthPlan {
    let narrow_cols = u8::from(!saturday_has_menu) + u8::from(!sunday_has_menu);
    #[allow(clippy::cast_possible_truncation)]
    let wide_cols = COLUMNS as u8 - narrow_cols;
    let total_wide = 100.0 - f64::from(narrow_cols) * NARROW_WIDTH;

    // Unreachable with five fixed weekday columns; kept so the division is total.
    let wide = if wide_cols > 0 { total_wide / f64::from(wide_cols) } else { NARROW_WIDTH };

    let sunday = if sunday_has_menu { wide } else { NARROW_WIDTH };
    let saturday = if saturday_has_menu { wide } else { NARROW_WIDTH };

    ColumnWidthPlan { widths: [sunday, wide, wide, wide, wide, wide, saturday] }
}

impl From<WeekendFlags> for ColumnWidthPlan {
    fn from(flags: WeekendFlags) -> Self {
        column_widths(flags.saturday_has_menu, flags.sunday_has_menu)
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
