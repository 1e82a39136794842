use crate::helpers::{body_text, spawn_app, station, MockReportAccess};
use axum::http::{header, StatusCode};
use reports::{ClimateDay, ClimateVariable};
use std::sync::Arc;

fn climate_days() -> Vec<ClimateDay> {
    (0..366i32)
        .map(|i| ClimateDay {
            valid: format!("2000-day-{}", i),
            max: Some(50.0 + f64::from(i % 40)),
            min: Some(-10.0 + f64::from(i % 40)),
            avg: Some(20.0 + f64::from(i % 40)),
            years: Some(118),
        })
        .collect()
}

#[tokio::test]
async fn chart_is_svg_document() {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_network_stations()
        .withf(|network| network == "IACLIMATE")
        .times(1)
        .returning(|_| Ok(vec![station("IA0200", "Ames", "IACLIMATE")]));
    report_db
        .expect_daily_climate()
        .withf(|station_id, variable| station_id == "IA0200" && *variable == ClimateVariable::High)
        .times(1)
        .returning(|_, _| Ok(climate_days()));

    let test_app = spawn_app(Arc::new(report_db)).await;
    // identifiers are matched case insensitively
    let response = test_app
        .get("/plotting/coop/extremes?station=ia0200&var=high")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
    let svg = body_text(response).await;
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Daily High Temp Extremes for Ames"));
    assert!(svg.contains("Climate Record: 118 years"));
    assert!(svg.contains("Average (F)"));
}

#[tokio::test]
async fn station_without_metadata_uses_identifier() {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_network_stations()
        .times(1)
        .returning(|_| Ok(Vec::new()));
    report_db
        .expect_daily_climate()
        .times(1)
        .returning(|_, _| Ok(climate_days()));

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app
        .get("/plotting/coop/extremes?station=IA2203&var=low")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Daily Low Temp Extremes for IA2203"));
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    let mut report_db = MockReportAccess::new();
    report_db.expect_network_stations().times(0);
    report_db.expect_daily_climate().times(0);

    let test_app = spawn_app(Arc::new(report_db)).await;

    let response = test_app.get("/plotting/coop/extremes?var=high").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("station"));

    let response = test_app
        .get("/plotting/coop/extremes?station=IA0200")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("var"));

    let response = test_app
        .get("/plotting/coop/extremes?station=IA0200&var=precip")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn station_without_climate_is_not_found() {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_network_stations()
        .times(1)
        .returning(|_| Ok(Vec::new()));
    report_db
        .expect_daily_climate()
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app
        .get("/plotting/coop/extremes?station=XX9999&var=high")
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
