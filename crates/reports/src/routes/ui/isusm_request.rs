use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use time::OffsetDateTime;

use crate::{
    request_form::{RequestForm, RequestMode},
    templates::{isusm_request_page, RequestPageData},
    AppError, AppState,
};

/// Handler for GET /agclimate/hist/hourly
pub async fn isusm_hourly_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    request_page(&state, RequestMode::Hourly, &pairs).await
}

/// Handler for GET /agclimate/hist/daily
pub async fn isusm_daily_handler(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    request_page(&state, RequestMode::Daily, &pairs).await
}

async fn request_page(
    state: &AppState,
    mode: RequestMode,
    pairs: &[(String, String)],
) -> Result<Html<String>, AppError> {
    let today = OffsetDateTime::now_utc().date();
    let mut form = RequestForm::from_pairs(pairs, today)?;
    // the page decides the interval, not the query string
    form.mode = mode;

    let stations = state
        .report_db
        .network_stations(&state.networks.isusm)
        .await?;

    let data = RequestPageData {
        form,
        stations,
        last_year: today.year(),
    };
    Ok(Html(isusm_request_page(&data).into_string()))
}
