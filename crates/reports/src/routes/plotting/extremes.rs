use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderValue},
    response::IntoResponse,
};
use log::debug;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{chart::ExtremesChart, AppError, AppState, ClimateVariable};

pub const SVG: &str = "image/svg+xml";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExtremesParams {
    /// Climate station identifier, case insensitive
    pub station: Option<String>,
    /// `high` or `low`
    pub var: Option<String>,
}

#[utoipa::path(
    get,
    path = "/plotting/coop/extremes",
    params(ExtremesParams),
    responses(
        (status = OK, description = "Daily record extremes chart", content_type = "image/svg+xml", body = String),
        (status = BAD_REQUEST, description = "Missing station or variable, or unknown variable"),
        (status = NOT_FOUND, description = "No climate record for the station"),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query or draw the chart")
    ))]
pub async fn extremes_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExtremesParams>,
) -> Result<impl IntoResponse, AppError> {
    let station_id = params
        .station
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingParameter("station"))?
        .to_uppercase();
    let variable: ClimateVariable = params
        .var
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or(AppError::MissingParameter("var"))?
        .parse()
        .map_err(AppError::BadRequest)?;

    let station_name = state
        .report_db
        .network_stations(&state.networks.climate)
        .await?
        .into_iter()
        .find(|s| s.station_id == station_id)
        .map(|s| s.name)
        .unwrap_or_else(|| station_id.clone());

    let days = state
        .report_db
        .daily_climate(&station_id, variable)
        .await?;
    debug!(
        "charting {} days of {} for station {}",
        days.len(),
        variable,
        station_id
    );

    let svg = ExtremesChart {
        station_id: &station_id,
        station_name: &station_name,
        variable,
        days: &days,
    }
    .render_svg()?;

    Ok(([(CONTENT_TYPE, HeaderValue::from_static(SVG))], svg))
}
