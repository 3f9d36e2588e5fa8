use super::*;
use crate::calendar::date::{MenuMap, ScheduleMap};

fn key(raw: &str) -> DateKey {
    DateKey::parse(raw).unwrap()
}

fn april_menu() -> MenuMap {
    let mut menu = MenuMap::new();
    menu.insert(key("20240401"), vec!["현미밥(5.6)".into(), "김치".into()]);
    menu.insert(key("20240402"), vec!["치즈돈까스와데미글라스소스(1.2.5.6.10)".into()]);
    // 2024-04-06 is a Saturday.
    menu.insert(key("20240406"), vec!["주먹밥".into()]);
    // Adjacent-month dates that share the first/last grid rows.
    menu.insert(key("20240331"), vec!["삼월메뉴".into()]);
    menu.insert(key("20240503"), vec!["오월메뉴".into()]);
    menu
}

fn april_schedule() -> ScheduleMap {
    let mut schedule = ScheduleMap::new();
    schedule.insert(key("20240410"), "국회의원선거, 임시휴업일".into());
    schedule.insert(key("20240501"), "근로자의날".into());
    schedule
}

fn input<'a>(menu: &'a MenuMap, schedule: &'a ScheduleMap, show_allergy: bool) -> RenderInput<'a> {
    RenderInput {
        school_name: "테스트초등학교",
        year: 2024,
        month: 4,
        menu,
        schedule,
        meal_label: "중식",
        show_allergy,
        // Set explicitly: the fixture's 2024-03-31 padding key is a Sunday.
        weekend: WeekendFlags { saturday_has_menu: true, sunday_has_menu: false },
    }
}

fn day_view(view: &CalendarView, day: u8) -> &DayView {
    view.weeks
        .iter()
        .flatten()
        .find_map(|cell| match cell {
            CellView::Day(d) if d.day == day => Some(d),
            _ => None,
        })
        .unwrap()
}

// =============================================================================
// STRUCTURE
// =============================================================================

#[test]
fn april_2024_renders_five_rows_of_seven() {
    let (menu, schedule) = (april_menu(), april_schedule());
    let view = build_month_calendar(&input(&menu, &schedule, false)).unwrap();
    assert_eq!(view.weeks.len(), 5);
    assert!(view.weeks.iter().all(|w| w.len() == 7));

    let html = view.render().into_string();
    assert_eq!(html.matches("<tr>").count(), 6); // header + 5 weeks
    assert_eq!(html.matches("<td").count(), 35);
}

#[test]
fn title_names_school_month_and_meal() {
    let (menu, schedule) = (april_menu(), april_schedule());
    let view = build_month_calendar(&input(&menu, &schedule, false)).unwrap();
    assert_eq!(view.title, "테스트초등학교 2024년 4월 중식 식단");
}

#[test]
fn other_month_cells_ignore_data() {
    let (menu, schedule) = (april_menu(), april_schedule());
    let view = build_month_calendar(&input(&menu, &schedule, false)).unwrap();

    assert_eq!(view.weeks[0][0], CellView::OtherMonth { day: 31 });
    let last = view.weeks.last().unwrap();
    assert_eq!(last[3], CellView::OtherMonth { day: 1 });
    assert_eq!(last[5], CellView::OtherMonth { day: 3 });

    let html = view.render().into_string();
    assert!(!html.contains("삼월메뉴"));
    assert!(!html.contains("오월메뉴"));
    assert!(!html.contains("근로자의날"));
    assert!(html.contains(r#"<td class="other-month"><div class="day-number">31</div></td>"#));
}

#[test]
fn day_without_data_still_has_day_number() {
    let (menu, schedule) = (april_menu(), april_schedule());
    let view = build_month_calendar(&input(&menu, &schedule, false)).unwrap();
    let day = day_view(&view, 3);
    assert_eq!(day.kind, DayKind::Weekday);
    assert!(day.event.is_none());
    assert!(day.dishes.is_none());
    assert!(view.render().into_string().contains(r#"<td><div class="day-number">3</div></td>"#));
}

// =============================================================================
// WEEKENDS
// =============================================================================

#[test]
fn empty_weekend_styling_keeps_day_number() {
    let (menu, schedule) = (april_menu(), april_schedule());
    let view = build_month_calendar(&input(&menu, &schedule, false)).unwrap();

    // Sunday 7th: no menu.
    let sunday = day_view(&view, 7);
    assert_eq!(sunday.kind, DayKind::Sunday);
    assert!(sunday.empty_weekend);

    // Saturday 6th: has menu.
    let saturday = day_view(&view, 6);
    assert_eq!(saturday.kind, DayKind::Saturday);
    assert!(!saturday.empty_weekend);

    let html = view.render().into_string();
    assert!(html.contains(r#"<td class="empty-weekend sunday"><div class="day-number">7</div></td>"#));
    assert!(html.contains(r#"<td class="saturday"><div class="day-number">6</div>"#));
}

#[test]
fn header_widths_follow_weekend_flags() {
    let (menu, schedule) = (april_menu(), april_schedule());
    let html = render_month_calendar(&input(&menu, &schedule, false)).unwrap();
    // Saturday has menu, Sunday does not: 96 / 6 = 16 for wide columns.
    assert!(html.contains(r#"<th style="color: #e74c3c; width: 4%;">일</th>"#));
    assert!(html.contains(r#"<th style="width: 16%;">월</th>"#));
    assert!(html.contains(r#"<th style="color: #3498db; width: 16%;">토</th>"#));
}

// =============================================================================
// MENU + SCHEDULE
// =============================================================================

#[test]
fn schedule_badge_has_tooltip() {
    let (menu, schedule) = (april_menu(), april_schedule());
    let html = render_month_calendar(&input(&menu, &schedule, false)).unwrap();
    assert!(html.contains(
        r#"<div class="event-name" title="국회의원선거, 임시휴업일">🗓️ 국회의원선거, 임시휴업일</div>"#
    ));
}

#[test]
fn allergy_codes_hidden_by_default() {
    let (menu, schedule) = (april_menu(), april_schedule());
    let view = build_month_calendar(&input(&menu, &schedule, false)).unwrap();
    let dishes = day_view(&view, 1).dishes.as_ref().unwrap();
    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0].name, "현미밥");
    assert!(dishes[0].allergy_codes.is_none());

    let html = view.render().into_string();
    assert!(html.contains(r#"<ul class="menu-list"><li class="menu-item">현미밥</li><li class="menu-item">김치</li></ul>"#));
    assert!(!html.contains("allergy-info\""));
}

#[test]
fn allergy_codes_shown_when_enabled() {
    let (menu, schedule) = (april_menu(), april_schedule());
    let html = render_month_calendar(&input(&menu, &schedule, true)).unwrap();
    assert!(html.contains(r#"현미밥<span class="allergy-info" title="대두, 밀">(5.6)</span>"#));
    // Dish without codes gets no annotation.
    assert!(html.contains(r#"<li class="menu-item">김치</li>"#));
}

#[test]
fn long_names_use_compact_style() {
    let (menu, schedule) = (april_menu(), april_schedule());
    let html = render_month_calendar(&input(&menu, &schedule, false)).unwrap();
    assert!(html.contains(r#"<span class="long-menu-name">치즈돈까스와데미글라스소스</span>"#));
}

#[test]
fn text_is_escaped() {
    let mut menu = MenuMap::new();
    menu.insert(key("20240401"), vec!["<script>".into()]);
    let mut schedule = ScheduleMap::new();
    schedule.insert(key("20240402"), r#"a"b"#.into());
    let mut inp = input(&menu, &schedule, false);
    inp.school_name = "A&B";

    let html = render_month_calendar(&inp).unwrap();
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(html.contains(r#"title="a&quot;b""#));
    assert!(html.contains("A&amp;B 2024년"));
}

// =============================================================================
// CONTRACT
// =============================================================================

#[test]
fn rendering_is_idempotent() {
    let (menu, schedule) = (april_menu(), april_schedule());
    let inp = input(&menu, &schedule, true);
    assert_eq!(render_month_calendar(&inp).unwrap(), render_month_calendar(&inp).unwrap());
}

#[test]
fn invalid_month_is_rejected() {
    let (menu, schedule) = (MenuMap::new(), ScheduleMap::new());
    let mut inp = input(&menu, &schedule, false);
    inp.month = 13;
    assert_eq!(render_month_calendar(&inp), Err(CalendarError::InvalidMonth(13)));
}

#[test]
fn empty_maps_render_bare_grid() {
    let (menu, schedule) = (MenuMap::new(), ScheduleMap::new());
    let view = build_month_calendar(&input(&menu, &schedule, false)).unwrap();
    assert!(view.weeks.iter().flatten().all(|cell| match cell {
        CellView::OtherMonth { .. } => true,
        CellView::Day(d) => d.event.is_none() && d.dishes.is_none(),
    }));
}
