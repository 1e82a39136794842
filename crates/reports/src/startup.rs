use crate::{
    db::{ClimateVariable, ObservationDb, ReportData, Station},
    extremes_chart, home_handler, isusm_daily_handler, isusm_download, isusm_hourly_handler,
    monthly_precip_handler, monthly_precip_json, network_stations,
    reference::{ReferenceEntry, ReferenceTable},
    reference_script_handler, reference_table, routes,
    templates::PrecipTableRow,
    Networks,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::info;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use utoipa::{
    openapi::{server::Server, OpenApi as OpenApiDoc},
    OpenApi,
};
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub static_dir: String,
    /// Public base url, advertised as the server in the api docs
    pub remote_url: String,
    /// External bulk download service behind the request forms
    pub download_url: String,
    pub networks: Networks,
    pub report_db: Arc<dyn ReportData>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::json::reference::reference_table,
        routes::json::reference::reference_script_handler,
        routes::json::stations::network_stations,
        routes::json::monthly_precip::monthly_precip_json,
        routes::plotting::extremes::extremes_chart,
    ),
    components(
        schemas(
            Station,
            ClimateVariable,
            ReferenceTable,
            ReferenceEntry,
            PrecipTableRow,
            routes::json::MonthlyPrecipReport,
        )
    ),
    tags(
        (name = "iem reports api", description = "report data, reference tables and climate charts behind the IEM report pages")
    )
)]
struct ApiDoc;

pub async fn build_app_state(
    remote_url: String,
    static_dir: String,
    database: String,
    download_url: String,
    networks: Networks,
) -> Result<AppState, anyhow::Error> {
    let report_db = Arc::new(
        ObservationDb::open(&database)
            .await
            .map_err(|e| anyhow!("error opening observation database: {}", e))?,
    );

    Ok(AppState {
        static_dir,
        remote_url,
        download_url,
        networks,
        report_db,
    })
}

pub fn api_docs(remote_url: &str) -> OpenApiDoc {
    let mut docs = ApiDoc::openapi();
    docs.servers = Some(vec![Server::new(remote_url)]);
    docs
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = api_docs(&app_state.remote_url);
    let serve_static = ServeDir::new(&app_state.static_dir);
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // UI routes
        .route("/", get(home_handler))
        .route("/ASOS/reports/mon_prec", get(monthly_precip_handler))
        .route("/agclimate/hist/hourly", get(isusm_hourly_handler))
        .route("/agclimate/hist/daily", get(isusm_daily_handler))
        .route("/request/isusm", get(isusm_download))
        // Chart
        .route("/plotting/coop/extremes", get(extremes_chart))
        // Reference data and JSON API
        .route("/lsr/wfos.js", get(reference_script_handler))
        .route("/json/reference/{table}", get(reference_table))
        .route("/json/stations", get(network_stations))
        .route("/json/monthly_precip", get(monthly_precip_json))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .nest_service("/static", serve_static)
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request","new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
