use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

use super::json_response;
use crate::{precip_report_rows, templates::PrecipTableRow, AppError, AppState};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PrecipReportParams {
    /// Year of the report, defaults to the current year
    pub year: Option<i32>,
    /// Station network, defaults to the configured ASOS network
    pub network: Option<String>,
    pub callback: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MonthlyPrecipReport {
    pub year: i32,
    pub network: String,
    pub rows: Vec<PrecipTableRow>,
}

#[utoipa::path(
    get,
    path = "/json/monthly_precip",
    params(PrecipReportParams),
    responses(
        (status = OK, description = "Monthly precipitation per station, null for months without data", body = MonthlyPrecipReport),
        (status = NOT_FOUND, description = "No data for the requested year"),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query precipitation")
    ))]
pub async fn monthly_precip_json(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PrecipReportParams>,
) -> Result<Response, AppError> {
    let year = params
        .year
        .unwrap_or_else(|| OffsetDateTime::now_utc().year());
    let network = params
        .network
        .unwrap_or_else(|| state.networks.asos.clone());

    let rows = precip_report_rows(&state, year, &network).await?;
    let report = MonthlyPrecipReport {
        year,
        network,
        rows,
    };
    json_response(&report, params.callback.as_deref())
}
