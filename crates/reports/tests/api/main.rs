mod extremes;
mod helpers;
mod monthly_precip;
mod reference;
mod request_forms;
