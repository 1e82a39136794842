pub mod json;
pub mod plotting;
pub mod request;
pub mod ui;

pub use json::*;
pub use plotting::*;
pub use request::*;
pub use ui::*;
