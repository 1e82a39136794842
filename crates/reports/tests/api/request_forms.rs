use crate::helpers::{body_text, spawn_app, station, MockReportAccess, DOWNLOAD_URL};
use axum::http::{header, StatusCode};
use std::sync::Arc;
use time::OffsetDateTime;

fn isusm_db(calls: usize) -> MockReportAccess {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_network_stations()
        .withf(|network| network == "ISUSM")
        .times(calls)
        .returning(|_| {
            Ok(vec![
                station("AEEI4", "Ames", "ISUSM"),
                station("BOOI4", "Boone", "ISUSM"),
            ])
        });
    report_db
}

#[tokio::test]
async fn hourly_form_lists_stations_and_defaults_to_today() {
    let test_app = spawn_app(Arc::new(isusm_db(1))).await;
    let response = test_app.get("/agclimate/hist/hourly").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    let today = OffsetDateTime::now_utc().date();

    assert!(html.contains("Hourly Data Request Form:"));
    assert!(html.contains(r#"action="/request/isusm""#));
    assert!(html.contains("Boone (BOOI4)"));
    assert!(html.contains(r#"<option value="2013">"#));
    assert!(html.contains(&format!(
        r#"<option value="{}" selected>"#,
        today.year()
    )));
    assert!(html.contains(&format!(
        r#"<option value="{}" selected>{}</option>"#,
        today.day(),
        today.day()
    )));
    assert!(!html.contains(" checked"));
}

#[tokio::test]
async fn daily_form_round_trips_selection() {
    let test_app = spawn_app(Arc::new(isusm_db(1))).await;
    let response = test_app
        .get("/agclimate/hist/daily?sts=BOOI4&year1=2015&month1=2&day1=31&delim=tab&todisk=yes")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("Daily Data Request Form:"));
    assert!(html.contains(r#"name="mode" value="daily""#));
    assert!(html.contains(r#"value="BOOI4" checked"#));
    assert!(!html.contains(r#"value="AEEI4" checked"#));
    assert!(html.contains(r#"<option value="2015" selected>"#));
    assert!(html.contains(r#"<option value="2" selected>February</option>"#));
    assert!(html.contains(r#"<option value="31" selected>31</option>"#));
    assert!(html.contains(r#"<option value="tab" selected>"#));
    assert!(html.contains(r#"value="yes" checked"#));
}

#[tokio::test]
async fn invalid_form_values_are_rejected() {
    let test_app = spawn_app(Arc::new(isusm_db(0))).await;
    let response = test_app.get("/agclimate/hist/hourly?month1=13").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn request_redirects_to_download_service() {
    let test_app = spawn_app(Arc::new(isusm_db(0))).await;
    let response = test_app
        .get(
            "/request/isusm?mode=daily&sts=AEEI4&sts=BOOI4&year1=2020&month1=1&day1=1\
             &year2=2020&month2=12&day2=31&delim=tab",
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!(
            "{}?mode=daily&sts=AEEI4&sts=BOOI4&year1=2020&month1=1&day1=1\
             &year2=2020&month2=12&day2=31&delim=tab",
            DOWNLOAD_URL
        )
        .as_str()
    );
}

#[tokio::test]
async fn request_without_stations_is_rejected() {
    let test_app = spawn_app(Arc::new(isusm_db(0))).await;
    let response = test_app
        .get("/request/isusm?mode=hourly&year1=2020&month1=1&day1=1")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("No stations selected"));
}
