use maud::{html, Markup};

/// Column of the downloaded file and what it holds
pub type VariableDescription = (&'static str, &'static str);

pub const HOURLY_VARIABLES: &[VariableDescription] = &[
    (
        "station",
        "National Weather Service Location Identifier for the site. This is a five character identifier.",
    ),
    ("valid", "Timestamp of the observation either in CST or CDT"),
    ("tmpf", "Air Temperature [F]"),
    ("relh", "Relative Humidity [%]"),
    ("solar", "Solar Radiation [W/m^2]"),
    ("precip", "One Hour Precipitation [inch]"),
    ("speed", "Wind Speed [mph]"),
    ("drct", "Wind Direction [degrees North]"),
    ("et", "Potential Evapotranspiration (Alfalfa) [inch]"),
    ("soil04t", "4 inch Depth Soil Temperature [F]"),
    ("soil12t", "12 inch Depth Soil Temperature [F]"),
    ("soil24t", "24 inch Depth Soil Temperature [F]"),
    ("soil50t", "50 inch Depth Soil Temperature [F]"),
    ("soil12vwc", "12 inch Depth Soil Volumetric Water Content [%]"),
    ("soil24vwc", "24 inch Depth Soil Volumetric Water Content [%]"),
    ("soil50vwc", "50 inch Depth Soil Volumetric Water Content [%]"),
];

pub const DAILY_VARIABLES: &[VariableDescription] = &[
    (
        "station",
        "National Weather Service Location Identifier for the site. This is a five character identifier.",
    ),
    ("valid", "Date of the observation, local calendar day"),
    ("high", "High Air Temperature [F]"),
    ("low", "Low Air Temperature [F]"),
    ("rh", "Average Relative Humidity [%]"),
    ("solar", "Solar Radiation [MJ/m^2]"),
    ("precip", "Daily Precipitation [inch]"),
    ("speed", "Average Wind Speed [mph]"),
    ("gust", "Peak Wind Gust [mph]"),
    ("et", "Potential Evapotranspiration (Alfalfa) [inch]"),
    ("soil04t", "4 inch Depth Average Soil Temperature [F]"),
    ("soil12t", "12 inch Depth Average Soil Temperature [F]"),
    ("soil24t", "24 inch Depth Average Soil Temperature [F]"),
    ("soil50t", "50 inch Depth Average Soil Temperature [F]"),
    ("soil12vwc", "12 inch Depth Soil Volumetric Water Content [%]"),
    ("soil24vwc", "24 inch Depth Soil Volumetric Water Content [%]"),
    ("soil50vwc", "50 inch Depth Soil Volumetric Water Content [%]"),
];

pub fn variable_list(variables: &[VariableDescription]) -> Markup {
    html! {
        dl class="variable-list" {
            @for (name, description) in variables {
                dt { code { (name) } }
                dd { (description) }
            }
        }
    }
}
