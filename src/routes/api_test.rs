use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;

use super::*;
use crate::calendar::{MenuMap, ScheduleMap};
use crate::state::test_helpers::{MenuReply, MockNeis, april_menu, april_schedule, school, test_app_state};

fn calendar_query() -> CalendarQuery {
    CalendarQuery {
        office: Some("B10".into()),
        school: "7010001".into(),
        name: Some("한빛초등학교".into()),
        year: 2024,
        month: 4,
        meal: MealKind::Lunch,
        allergy: None,
    }
}

#[tokio::test]
async fn schools_returns_search_results() {
    let mock = Arc::new(MockNeis::new(vec![school("한빛초등학교", "7010001")], MenuReply::Fail, ScheduleMap::new()));
    let query = SchoolsQuery { office: Some("B10".into()), name: " 한빛 ".into() };

    let Json(found) = schools(State(test_app_state(mock.clone())), Query(query)).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].code, "7010001");
    assert_eq!(mock.calls(), vec!["search:B10:한빛".to_string()]);
}

#[tokio::test]
async fn schools_uses_default_office_when_absent() {
    let mock = Arc::new(MockNeis::new(Vec::new(), MenuReply::Fail, ScheduleMap::new()));
    let query = SchoolsQuery { office: None, name: String::new() };

    let Json(found) = schools(State(test_app_state(mock.clone())), Query(query)).await.unwrap();

    assert!(found.is_empty());
    assert_eq!(mock.calls(), vec!["search:K10:".to_string()]);
}

#[tokio::test]
async fn schools_rejects_unknown_office() {
    let mock = Arc::new(MockNeis::new(Vec::new(), MenuReply::Fail, ScheduleMap::new()));
    let query = SchoolsQuery { office: Some("Z99".into()), name: "한빛".into() };

    let result = schools(State(test_app_state(mock.clone())), Query(query)).await;

    assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn schools_maps_search_failure_to_bad_gateway() {
    let mock = Arc::new(MockNeis::search_failing());
    let query = SchoolsQuery { office: None, name: "한빛".into() };

    let result = schools(State(test_app_state(mock)), Query(query)).await;

    assert_eq!(result.err(), Some(StatusCode::BAD_GATEWAY));
}

#[tokio::test]
async fn calendar_renders_fragment() {
    let mock = Arc::new(MockNeis::new(Vec::new(), MenuReply::Ok(april_menu()), april_schedule()));

    let Html(body) = calendar(State(test_app_state(mock.clone())), Query(calendar_query())).await.unwrap();

    assert!(body.starts_with("<style>"));
    assert!(body.contains("한빛초등학교 2024년 4월 중식 식단"));
    assert!(body.contains("국회의원선거"));
    assert!(!body.contains("<html"));
    assert_eq!(
        mock.calls(),
        vec!["menu:7010001:2024:4:2".to_string(), "schedule:7010001:2024:4".to_string()]
    );
}

#[tokio::test]
async fn calendar_title_falls_back_to_school_code() {
    let mock = Arc::new(MockNeis::new(Vec::new(), MenuReply::Ok(april_menu()), ScheduleMap::new()));
    let query = CalendarQuery { name: None, ..calendar_query() };

    let Html(body) = calendar(State(test_app_state(mock)), Query(query)).await.unwrap();

    assert!(body.contains("7010001 2024년 4월 중식 식단"));
}

#[tokio::test]
async fn calendar_no_data_is_not_found() {
    let mock = Arc::new(MockNeis::new(Vec::new(), MenuReply::Ok(MenuMap::new()), ScheduleMap::new()));

    let (status, message) = calendar(State(test_app_state(mock)), Query(calendar_query()))
        .await
        .unwrap_err();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message, no_data_message("한빛초등학교", 2024, 4));
}

#[tokio::test]
async fn calendar_fetch_failure_is_service_unavailable() {
    let mock = Arc::new(MockNeis::new(Vec::new(), MenuReply::Fail, april_schedule()));

    let (status, message) = calendar(State(test_app_state(mock)), Query(calendar_query()))
        .await
        .unwrap_err();

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(message, FETCH_FAILED);
}

#[tokio::test]
async fn calendar_invalid_month_is_bad_request() {
    let mock = Arc::new(MockNeis::new(Vec::new(), MenuReply::Ok(april_menu()), ScheduleMap::new()));
    let query = CalendarQuery { month: 0, ..calendar_query() };

    let (status, _) = calendar(State(test_app_state(mock.clone())), Query(query)).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn calendar_unknown_office_is_bad_request() {
    let mock = Arc::new(MockNeis::new(Vec::new(), MenuReply::Ok(april_menu()), ScheduleMap::new()));
    let query = CalendarQuery { office: Some("nope".into()), ..calendar_query() };

    let (status, _) = calendar(State(test_app_state(mock)), Query(query)).await.unwrap_err();

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
