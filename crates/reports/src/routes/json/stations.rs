use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::json_response;
use crate::{AppError, AppState, Station};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StationsParams {
    /// Network identifier, e.g. `IA_ASOS`
    pub network: Option<String>,
    pub callback: Option<String>,
}

#[utoipa::path(
    get,
    path = "/json/stations",
    params(StationsParams),
    responses(
        (status = OK, description = "Stations of the network ordered by identifier", body = Vec<Station>),
        (status = BAD_REQUEST, description = "Missing network or invalid callback"),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to query stations")
    ))]
pub async fn network_stations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StationsParams>,
) -> Result<Response, AppError> {
    let network = params
        .network
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(AppError::MissingParameter("network"))?;

    let stations = state.report_db.network_stations(network).await?;
    json_response(&stations, params.callback.as_deref())
}
