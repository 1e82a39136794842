//! JSON endpoints. Each one accepts an optional JSONP `callback`.

pub mod monthly_precip;
pub mod reference;
pub mod stations;

pub use monthly_precip::{monthly_precip_json, MonthlyPrecipReport, PrecipReportParams};
pub use reference::{reference_script_handler, reference_table};
pub use stations::{network_stations, StationsParams};

use std::sync::LazyLock;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use regex::Regex;
use serde::Serialize;

use crate::AppError;

static CALLBACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$")
        .expect("callback pattern is valid")
});

pub const JAVASCRIPT: &str = "application/javascript";

/// Plain JSON, or `callback(<json>)` as a script when a callback is named
pub fn json_response<T: Serialize>(value: &T, callback: Option<&str>) -> Result<Response, AppError> {
    let Some(callback) = callback.filter(|c| !c.is_empty()) else {
        return Ok(Json(value).into_response());
    };
    if !CALLBACK.is_match(callback) {
        return Err(AppError::BadRequest(format!("invalid callback: {}", callback)));
    }

    let body = format!("{}({})", callback, serde_json::to_string(value)?);
    Ok((
        [(CONTENT_TYPE, HeaderValue::from_static(JAVASCRIPT))],
        body,
    )
        .into_response())
}
