use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::{
    reference::network_label,
    templates::{home_page, HomeData},
    AppError, AppState,
};

/// Handler for the index page (GET /)
pub async fn home_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let climate_stations = state
        .report_db
        .network_stations(&state.networks.climate)
        .await?;

    let data = HomeData {
        climate_label: network_label(&state.networks.climate),
        climate_stations,
    };
    Ok(Html(home_page(&data).into_string()))
}
