pub mod extremes;

pub use extremes::{extremes_chart, ExtremesParams, SVG};
