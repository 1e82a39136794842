mod home;
mod isusm_request;
mod monthly_precip;

pub use home::home_handler;
pub use isusm_request::{isusm_daily_handler, isusm_hourly_handler};
pub use monthly_precip::{monthly_precip_handler, precip_report_rows, MonthlyPrecipParams};
