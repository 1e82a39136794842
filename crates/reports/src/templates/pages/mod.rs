mod home;
mod isusm_request;
mod monthly_precip;

pub use home::{home_page, HomeData};
pub use isusm_request::{isusm_request_page, RequestPageData};
pub use monthly_precip::{monthly_precip_page, MonthlyPrecipData, FIRST_REPORT_YEAR};
