mod breadcrumb;
mod navbar;
mod selectors;

pub use breadcrumb::{breadcrumb, Crumb};
pub use navbar::navbar;
pub use selectors::{day_select, month_select, select_control, year_select, MONTH_NAMES};
