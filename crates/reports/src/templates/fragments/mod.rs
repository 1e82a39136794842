mod precip_table;
mod station_checkboxes;
mod variable_list;

pub use precip_table::{precip_table, precip_table_rows, PrecipTableRow, MONTH_ABBREVIATIONS};
pub use station_checkboxes::station_checkboxes;
pub use variable_list::{variable_list, VariableDescription, DAILY_VARIABLES, HOURLY_VARIABLES};
