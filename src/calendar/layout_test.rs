use super::*;
use crate::calendar::date::DateKey;

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn total(plan: &ColumnWidthPlan) -> f64 {
    plan.widths().iter().sum()
}

// =============================================================================
// column_widths
// =============================================================================

#[test]
fn all_flag_combinations_sum_to_100() {
    for sat in [false, true] {
        for sun in [false, true] {
            let plan = column_widths(sat, sun);
            assert!(approx(total(&plan), 100.0), "sat={sat} sun={sun} total={}", total(&plan));
            assert_eq!(approx(plan.widths()[6], NARROW_WIDTH), !sat);
            assert_eq!(approx(plan.widths()[0], NARROW_WIDTH), !sun);
        }
    }
}

#[test]
fn no_weekend_menus_gives_two_narrow_columns() {
    let plan = column_widths(false, false);
    assert!(approx(plan.widths()[0], 4.0));
    assert!(approx(plan.widths()[6], 4.0));
    for w in &plan.widths()[1..6] {
        assert!(approx(*w, 18.4));
    }
}

#[test]
fn full_week_is_uniform() {
    let plan = column_widths(true, true);
    for w in plan.widths() {
        assert!(approx(*w, 100.0 / 7.0));
    }
}

#[test]
fn saturday_only_widens_saturday() {
    let plan = column_widths(true, false);
    assert!(approx(plan.widths()[0], NARROW_WIDTH));
    assert!(approx(plan.widths()[6], 96.0 / 6.0));
    assert!(approx(plan.widths()[1], 16.0));
}

// =============================================================================
// WeekendFlags
// =============================================================================

fn menu_on(keys: &[&str]) -> MenuMap {
    keys.iter()
        .map(|k| (DateKey::parse(k).unwrap(), vec!["밥".to_owned()]))
        .collect()
}

#[test]
fn weekday_only_menu_has_no_weekend_flags() {
    // 2024-04-01 Mon .. 2024-04-05 Fri
    let flags = WeekendFlags::from_menu(&menu_on(&["20240401", "20240402", "20240405"]));
    assert_eq!(flags, WeekendFlags::default());
}

#[test]
fn detects_saturday_and_sunday() {
    // 2024-04-06 Sat, 2024-04-14 Sun
    let flags = WeekendFlags::from_menu(&menu_on(&["20240401", "20240406"]));
    assert!(flags.saturday_has_menu);
    assert!(!flags.sunday_has_menu);

    let flags = WeekendFlags::from_menu(&menu_on(&["20240406", "20240414"]));
    assert!(flags.saturday_has_menu);
    assert!(flags.sunday_has_menu);
}

#[test]
fn plan_from_flags_matches_column_widths() {
    let flags = WeekendFlags { saturday_has_menu: true, sunday_has_menu: false };
    assert_eq!(ColumnWidthPlan::from(flags), column_widths(true, false));
}
