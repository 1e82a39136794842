use crate::{chart, db, request_form};
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use hyper::StatusCode;
use log::error;
use serde_json::json;
use std::borrow::Borrow;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid parameter: {0}")]
    BadRequest(String),
    #[error("Failed to get report data: {0}")]
    ReportData(#[from] db::Error),
    #[error("Failed to build chart: {0}")]
    Chart(#[from] chart::Error),
    #[error("Invalid download request: {0}")]
    RequestForm(#[from] request_form::Error),
    #[error("Unknown reference table: {0}")]
    UnknownTable(String),
    #[error("Failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) | AppError::BadRequest(_) | AppError::RequestForm(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::ReportData(db::Error::NoDataForYear(_))
            | AppError::Chart(chart::Error::NoData(_))
            | AppError::UnknownTable(_) => StatusCode::NOT_FOUND,
            AppError::ReportData(db::Error::Query(_))
            | AppError::Chart(chart::Error::Draw(_))
            | AppError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("error handling request: {}", self.to_string());

        let status = self.status();
        let error_message = match self.borrow() {
            AppError::ReportData(db::Error::NoDataForYear(year)) => {
                format!("no data for year {}", year)
            }
            _ if status == StatusCode::INTERNAL_SERVER_ERROR => String::from("internal error"),
            _ => self.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
        }));
        (status, body).into_response()
    }
}
