use axum::{
    extract::{Path, Query},
    http::{header::CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::{json_response, JAVASCRIPT};
use crate::{
    reference::{reference_script, ReferenceEntry, ReferenceTable},
    AppError,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// JSONP function name to wrap the response in
    pub callback: Option<String>,
}

#[utoipa::path(
    get,
    path = "/json/reference/{table}",
    params(
        ("table" = ReferenceTable, Path, description = "Reference table to list"),
        CallbackParams
    ),
    responses(
        (status = OK, description = "Entries of the reference table", body = Vec<ReferenceEntry>),
        (status = BAD_REQUEST, description = "Invalid callback name"),
        (status = NOT_FOUND, description = "Unknown reference table")
    ))]
pub async fn reference_table(
    Path(table): Path<String>,
    Query(params): Query<CallbackParams>,
) -> Result<Response, AppError> {
    let table: ReferenceTable = table.parse().map_err(|_| AppError::UnknownTable(table))?;
    json_response(&table.rows(), params.callback.as_deref())
}

#[utoipa::path(
    get,
    path = "/lsr/wfos.js",
    responses(
        (status = OK, description = "Reference tables as client side script", content_type = "application/javascript", body = String)
    ))]
pub async fn reference_script_handler() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, HeaderValue::from_static(JAVASCRIPT))],
        reference_script(),
    )
}
