pub mod components;
pub mod fragments;
pub mod layouts;
pub mod pages;

pub use fragments::{precip_table_rows, PrecipTableRow, VariableDescription};
pub use layouts::{CurrentPage, PageConfig};
pub use pages::{
    home_page, isusm_request_page, monthly_precip_page, HomeData, MonthlyPrecipData,
    RequestPageData,
};
