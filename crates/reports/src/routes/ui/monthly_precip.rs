use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use time::{macros::format_description, OffsetDateTime};

use crate::{
    pivot::PrecipPivot,
    reference::network_label,
    templates::{monthly_precip_page, precip_table_rows, MonthlyPrecipData, PrecipTableRow},
    AppError, AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct MonthlyPrecipParams {
    pub year: Option<i32>,
    pub network: Option<String>,
}

/// Handler for GET /ASOS/reports/mon_prec
pub async fn monthly_precip_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MonthlyPrecipParams>,
) -> Result<Html<String>, AppError> {
    let now = OffsetDateTime::now_utc();
    let year = params.year.unwrap_or(now.year());
    let network = params
        .network
        .unwrap_or_else(|| state.networks.asos.clone());

    let rows = precip_report_rows(&state, year, &network).await?;

    let data = MonthlyPrecipData {
        year,
        last_year: now.year(),
        network_label: network_label(&network),
        network,
        generated_at: generated_at(now),
        rows,
    };
    Ok(Html(monthly_precip_page(&data).into_string()))
}

/// Query, pivot and format one year of a network. Fails when the year has no
/// summary table.
pub async fn precip_report_rows(
    state: &AppState,
    year: i32,
    network: &str,
) -> Result<Vec<PrecipTableRow>, AppError> {
    let monthly = state.report_db.monthly_precip(year, network).await?;
    let pivot = PrecipPivot::from_rows(monthly);

    let names: HashMap<String, String> = state
        .report_db
        .network_stations(network)
        .await?
        .into_iter()
        .map(|s| (s.station_id, s.name))
        .collect();

    Ok(precip_table_rows(&pivot, &names))
}

/// `05 Jun 2024 02 pm`
fn generated_at(now: OffsetDateTime) -> String {
    now.format(format_description!(
        "[day] [month repr:short] [year] [hour repr:12] [period case:lower]"
    ))
    .unwrap_or_default()
}
