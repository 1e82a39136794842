use std::sync::{Arc, Once};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use log::LevelFilter;
use mockall::mock;
use reports::{
    app, db, setup_logger, AppState, ClimateDay, ClimateVariable, MonthlyPrecip, Networks,
    ReportData, Station,
};
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
}

static INIT_LOGGER: Once = Once::new();
fn init_logger() {
    INIT_LOGGER.call_once(|| {
        setup_logger().level(LevelFilter::Debug).apply().unwrap();
    });
}

pub const DOWNLOAD_URL: &str = "https://mesonet.example.edu/cgi-bin/request/isusm.py";

pub async fn spawn_app(report_db: Arc<dyn ReportData>) -> TestApp {
    init_logger();

    let app_state = AppState {
        static_dir: String::from("./static"),
        remote_url: String::from("http://127.0.0.1:9810"),
        download_url: String::from(DOWNLOAD_URL),
        networks: Networks::default(),
        report_db,
    };
    let app = app(app_state);

    TestApp { app }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Response {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap();

        self.app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn body_text(response: Response) -> String {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

pub fn station(id: &str, name: &str, network: &str) -> Station {
    Station {
        station_id: id.to_string(),
        name: name.to_string(),
        network: network.to_string(),
        state: "IA".to_string(),
    }
}

pub fn precip(station_id: &str, month: u32, precip: f64) -> MonthlyPrecip {
    MonthlyPrecip {
        station_id: station_id.to_string(),
        month,
        precip,
    }
}

mock! {
    pub ReportAccess {}
    #[async_trait]
    impl ReportData for ReportAccess {
        async fn monthly_precip(&self, year: i32, network: &str) -> Result<Vec<MonthlyPrecip>, db::Error>;
        async fn network_stations(&self, network: &str) -> Result<Vec<Station>, db::Error>;
        async fn daily_climate(
            &self,
            station_id: &str,
            variable: ClimateVariable,
        ) -> Result<Vec<ClimateDay>, db::Error>;
    }
}
