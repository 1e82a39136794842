//! Bulk download request forms
//!
//! The request pages post back (GET) their selection: checked stations, a
//! start and end date split into year/month/day fields, the delimiter and
//! whether to save to disk. A valid selection is handed off to the external
//! download service as a redirect.

use std::{fmt, str::FromStr, sync::LazyLock};

use itertools::Itertools;
use regex::Regex;
use time::Date;

/// First year of the soil moisture network archive
pub const ISUSM_START_YEAR: i32 = 2013;

static STATION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{1,16}$").expect("station id pattern is valid"));

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("No stations selected")]
    NoStations,
    #[error("Invalid station identifier: {0}")]
    InvalidStation(String),
    #[error("Invalid value for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Unknown delimiter: {0}")]
    UnknownDelimiter(String),
    #[error("Unknown request mode: {0}")]
    UnknownMode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelection {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl From<Date> for DateSelection {
    fn from(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
            day: date.day(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    #[default]
    Hourly,
    Daily,
}

impl RequestMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMode::Hourly => "hourly",
            RequestMode::Daily => "daily",
        }
    }
}

impl FromStr for RequestMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(RequestMode::Hourly),
            "daily" => Ok(RequestMode::Daily),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    pub const ALL: [Delimiter; 2] = [Delimiter::Comma, Delimiter::Tab];

    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Tab => "tab",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Delimiter::Comma => "Comma Delimited",
            Delimiter::Tab => "Tab Delimited",
        }
    }
}

impl FromStr for Delimiter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "comma" => Ok(Delimiter::Comma),
            "tab" => Ok(Delimiter::Tab),
            other => Err(Error::UnknownDelimiter(other.to_string())),
        }
    }
}

/// Current selection of a download request form
#[derive(Debug, Clone, PartialEq)]
pub struct RequestForm {
    pub mode: RequestMode,
    pub stations: Vec<String>,
    pub start: DateSelection,
    pub end: DateSelection,
    pub delimiter: Delimiter,
    pub to_disk: bool,
}

impl RequestForm {
    /// Empty selection with both dates on `today`
    pub fn new(mode: RequestMode, today: Date) -> Self {
        Self {
            mode,
            stations: Vec::new(),
            start: today.into(),
            end: today.into(),
            delimiter: Delimiter::default(),
            to_disk: false,
        }
    }

    /// Builds the selection from query string pairs. `sts` may repeat; date
    /// fields that are absent keep `today`. Day-of-month combinations such as
    /// February 31 are passed through untouched.
    pub fn from_pairs(pairs: &[(String, String)], today: Date) -> Result<Self, Error> {
        let mut form = Self::new(RequestMode::default(), today);

        for (key, value) in pairs {
            let value = value.trim();
            match key.as_str() {
                "sts" => {
                    if !value.is_empty() && !form.stations.iter().any(|s| s == value) {
                        form.stations.push(value.to_string());
                    }
                }
                "mode" => form.mode = value.parse()?,
                "delim" => form.delimiter = value.parse()?,
                "todisk" => form.to_disk = value == "yes",
                "year1" => form.start.year = parse_number("year1", value, 1..=9999)?,
                "month1" => form.start.month = parse_number("month1", value, 1..=12)?,
                "day1" => form.start.day = parse_number("day1", value, 1..=31)?,
                "year2" => form.end.year = parse_number("year2", value, 1..=9999)?,
                "month2" => form.end.month = parse_number("month2", value, 1..=12)?,
                "day2" => form.end.day = parse_number("day2", value, 1..=31)?,
                _ => {}
            }
        }

        Ok(form)
    }

    pub fn is_selected(&self, station_id: &str) -> bool {
        self.stations.iter().any(|s| s == station_id)
    }

    /// Checks that the selection can be handed to the download service
    pub fn validate(&self) -> Result<(), Error> {
        if self.stations.is_empty() {
            return Err(Error::NoStations);
        }
        if let Some(bad) = self.stations.iter().find(|s| !STATION_ID.is_match(s)) {
            return Err(Error::InvalidStation(bad.clone()));
        }
        Ok(())
    }

    /// Location of the download service for this selection
    pub fn download_url(&self, service_url: &str) -> Result<String, Error> {
        self.validate()?;

        let stations = self.stations.iter().map(|s| format!("sts={}", s)).join("&");
        let query = format!(
            "mode={}&{}&year1={}&month1={}&day1={}&year2={}&month2={}&day2={}&delim={}",
            self.mode,
            stations,
            self.start.year,
            self.start.month,
            self.start.day,
            self.end.year,
            self.end.month,
            self.end.day,
            self.delimiter.as_str(),
        );
        let todisk = if self.to_disk { "&todisk=yes" } else { "" };
        let separator = if service_url.contains('?') { '&' } else { '?' };

        Ok(format!("{}{}{}{}", service_url, separator, query, todisk))
    }
}

fn parse_number<T>(
    field: &'static str,
    value: &str,
    range: std::ops::RangeInclusive<T>,
) -> Result<T, Error>
where
    T: FromStr + PartialOrd,
{
    value
        .parse::<T>()
        .ok()
        .filter(|n| range.contains(n))
        .ok_or_else(|| Error::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
