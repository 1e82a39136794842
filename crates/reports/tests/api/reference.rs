use crate::helpers::{body_text, spawn_app, station, MockReportAccess};
use axum::http::{header, StatusCode};
use reports::db;
use std::sync::Arc;

#[tokio::test]
async fn reference_script_defines_lookup_tables() {
    let test_app = spawn_app(Arc::new(MockReportAccess::new())).await;
    let response = test_app.get("/lsr/wfos.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript"
    );
    let script = body_text(response).await;
    assert!(script.starts_with("Ext.namespace('iemdata');"));
    assert!(script.contains("iemdata.wfos = ["));
    assert!(script.contains(r#"["DMX","DES_MOINES"]"#));
    assert!(script.contains("iemdata.vtecSignificanceStore"));
}

#[tokio::test]
async fn reference_table_as_json() {
    let test_app = spawn_app(Arc::new(MockReportAccess::new())).await;
    let response = test_app.get("/json/reference/vtec_significance").await;

    assert_eq!(response.status(), StatusCode::OK);
    let entries: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    let warning = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["code"] == "W")
        .unwrap();
    assert_eq!(warning["name"], "Warning");
}

#[tokio::test]
async fn unknown_reference_table_is_not_found() {
    let test_app = spawn_app(Arc::new(MockReportAccess::new())).await;
    let response = test_app.get("/json/reference/counties").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_callback_is_rejected() {
    let test_app = spawn_app(Arc::new(MockReportAccess::new())).await;
    let response = test_app
        .get("/json/reference/states?callback=alert(1)")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn home_page_links_reports() {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_network_stations()
        .withf(|network| network == "IACLIMATE")
        .times(1)
        .returning(|_| Ok(vec![station("IA0200", "Ames", "IACLIMATE")]));

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app.get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"href="/ASOS/reports/mon_prec""#));
    assert!(html.contains(r#"href="/agclimate/hist/daily""#));
    assert!(html.contains("Ames (IA0200)"));
}

#[tokio::test]
async fn home_page_reports_database_failure() {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_network_stations()
        .times(1)
        .returning(|_| Err(db::Error::Query(sqlx::Error::PoolTimedOut)));

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app.get("/").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, r#"{"error":"internal error"}"#);
}

#[tokio::test]
async fn api_docs_are_served() {
    let test_app = spawn_app(Arc::new(MockReportAccess::new())).await;
    let response = test_app.get("/docs").await;

    assert_eq!(response.status(), StatusCode::OK);
}
