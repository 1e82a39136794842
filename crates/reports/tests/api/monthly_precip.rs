use crate::helpers::{body_text, precip, spawn_app, station, MockReportAccess};
use axum::http::{header, StatusCode};
use reports::db;
use std::sync::Arc;

fn dsm_rows() -> Vec<reports::MonthlyPrecip> {
    vec![
        precip("DSM", 1, 1.0),
        precip("DSM", 3, 3.0),
        precip("DSM", 5, 2.0),
        precip("DSM", 6, 2.0),
        precip("DSM", 7, 2.0),
        precip("DSM", 8, 2.0),
        precip("AMW", 7, 0.0),
    ]
}

fn asos_stations() -> Vec<reports::Station> {
    vec![
        station("AMW", "Ames", "IA_ASOS"),
        station("DSM", "Des Moines", "IA_ASOS"),
    ]
}

#[tokio::test]
async fn report_renders_pivot_table() {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_monthly_precip()
        .withf(|year, network| *year == 2023 && network == "IA_ASOS")
        .times(1)
        .returning(|_, _| Ok(dsm_rows()));
    report_db
        .expect_network_stations()
        .withf(|network| network == "IA_ASOS")
        .times(1)
        .returning(|_| Ok(asos_stations()));

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app.get("/ASOS/reports/mon_prec?year=2023").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("2023 Iowa ASOS Precipitation Report"));
    assert!(html.contains("No attempt was made to estimate missing data."));
    assert!(html.contains(r#"<option value="2023" selected>"#));
    assert!(html.contains(r#"<option value="2004">"#));
    assert!(html.contains("Des Moines"));
    // DSM: MJJA then annual total
    assert!(html.contains(
        r#"<td class="has-text-right">8.00</td><td class="has-text-right">12.00</td>"#
    ));
    // AMW recorded a dry July, every other month is missing
    assert!(html.contains(r#"<td class="has-text-right">0.00</td>"#));
    assert!(html.contains(r#"<td class="has-text-right">M</td>"#));

    // stations are listed by identifier
    let amw = html.find("<td>AMW</td>").unwrap();
    let dsm = html.find("<td>DSM</td>").unwrap();
    assert!(amw < dsm);
}

#[tokio::test]
async fn unknown_year_is_not_found() {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_monthly_precip()
        .times(1)
        .returning(|year, _| Err(db::Error::NoDataForYear(year)));
    report_db.expect_network_stations().times(0);

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app.get("/ASOS/reports/mon_prec?year=1990").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("no data for year 1990"));
}

#[tokio::test]
async fn database_failure_is_internal_error() {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_monthly_precip()
        .times(1)
        .returning(|_, _| Err(db::Error::Query(sqlx::Error::PoolTimedOut)));

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app.get("/ASOS/reports/mon_prec?year=2023").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, r#"{"error":"internal error"}"#);
}

#[tokio::test]
async fn json_report_marks_missing_months() {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_monthly_precip()
        .withf(|year, network| *year == 2023 && network == "NE_ASOS")
        .times(1)
        .returning(|_, _| Ok(dsm_rows()));
    report_db
        .expect_network_stations()
        .times(1)
        .returning(|_| Ok(asos_stations()));

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app
        .get("/json/monthly_precip?year=2023&network=NE_ASOS")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let report: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();

    assert_eq!(report["year"], 2023);
    assert_eq!(report["network"], "NE_ASOS");
    let dsm = &report["rows"][1];
    assert_eq!(dsm["station_id"], "DSM");
    assert_eq!(dsm["months"][0], 1.0);
    assert!(dsm["months"][1].is_null());
    assert_eq!(dsm["mjja"], "8.00");
    assert_eq!(dsm["annual"], "12.00");
}

#[tokio::test]
async fn stations_json_supports_callback() {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_network_stations()
        .withf(|network| network == "ISUSM")
        .times(1)
        .returning(|_| Ok(vec![station("AEEI4", "Ames", "ISUSM")]));

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app
        .get("/json/stations?network=ISUSM&callback=loadStations")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript"
    );
    let body = body_text(response).await;
    assert!(body.starts_with("loadStations([{"));
    assert!(body.contains(r#""station_id":"AEEI4""#));
    assert!(body.ends_with("])"));
}

#[tokio::test]
async fn stations_json_requires_network() {
    let mut report_db = MockReportAccess::new();
    report_db.expect_network_stations().times(0);

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app.get("/json/stations").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("network"));
}

#[tokio::test]
async fn station_without_summer_data_totals_zero() {
    let mut report_db = MockReportAccess::new();
    report_db
        .expect_monthly_precip()
        .times(2)
        .returning(|_, _| Ok(vec![precip("DSM", 1, 1.5)]));
    report_db
        .expect_network_stations()
        .times(2)
        .returning(|_| Ok(asos_stations()));

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app.get("/ASOS/reports/mon_prec?year=2023").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    // MJJA then annual total
    assert!(html.contains(
        r#"<td class="has-text-right">0.00</td><td class="has-text-right">1.50</td>"#
    ));
    assert!(!html.contains("-0.00"));

    let response = test_app.get("/json/monthly_precip?year=2023").await;
    let report: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(report["rows"][0]["mjja"], "0.00");
    assert_eq!(report["rows"][0]["annual"], "1.50");
}

#[tokio::test]
async fn report_defaults_to_current_year() {
    let this_year = time::OffsetDateTime::now_utc().year();

    let mut report_db = MockReportAccess::new();
    report_db
        .expect_monthly_precip()
        .withf(move |year, network| *year == this_year && network == "IA_ASOS")
        .times(1)
        .returning(|_, _| Ok(dsm_rows()));
    report_db
        .expect_network_stations()
        .times(1)
        .returning(|_| Ok(asos_stations()));

    let test_app = spawn_app(Arc::new(report_db)).await;
    let response = test_app.get("/ASOS/reports/mon_prec").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&format!("{} Iowa ASOS Precipitation Report", this_year)));
    assert!(html.contains(&format!(r#"<option value="{}" selected>"#, this_year)));
}
