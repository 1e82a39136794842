mod app_error;
pub mod chart;
pub mod db;
pub mod pivot;
pub mod reference;
pub mod request_form;
pub mod routes;
mod startup;
pub mod templates;
mod utils;

pub use app_error::AppError;
pub use db::{ClimateDay, ClimateVariable, MonthlyPrecip, ObservationDb, ReportData, Station};
pub use routes::*;
pub use startup::*;
pub use utils::*;
