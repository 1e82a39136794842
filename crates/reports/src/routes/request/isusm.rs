use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Redirect,
};
use log::info;
use time::OffsetDateTime;

use crate::{request_form::RequestForm, AppError, AppState};

/// Handler for GET /request/isusm: hands a valid selection to the download
/// service with a `303 See Other`
pub async fn isusm_download(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Redirect, AppError> {
    let today = OffsetDateTime::now_utc().date();
    let form = RequestForm::from_pairs(&pairs, today)?;
    let url = form.download_url(&state.download_url)?;

    info!(
        "redirecting {} request for {} station(s) to download service",
        form.mode,
        form.stations.len()
    );
    Ok(Redirect::to(&url))
}
