mod observations;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

pub use observations::ObservationDb;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query observation database: {0}")]
    Query(#[from] sqlx::Error),
    #[error("No data for year {0}")]
    NoDataForYear(i32),
}

/// Read-only access to the observation archive
#[async_trait]
pub trait ReportData: Sync + Send {
    /// Summed daily precipitation per (station, month) for one year of a
    /// network. Days with a negative (flagged) value are left out.
    async fn monthly_precip(&self, year: i32, network: &str) -> Result<Vec<MonthlyPrecip>, Error>;
    async fn network_stations(&self, network: &str) -> Result<Vec<Station>, Error>;
    /// Daily climatology for a station, ordered by day of year
    async fn daily_climate(
        &self,
        station_id: &str,
        variable: ClimateVariable,
    ) -> Result<Vec<ClimateDay>, Error>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Station {
    pub station_id: String,
    pub name: String,
    pub network: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPrecip {
    pub station_id: String,
    /// 1 = January
    pub month: u32,
    pub precip: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClimateDay {
    /// Day of the reference year, `YYYY-MM-DD`
    pub valid: String,
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub years: Option<i64>,
}

/// Daily climate variable that has record max/min columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClimateVariable {
    High,
    Low,
}

impl ClimateVariable {
    pub fn column(&self) -> &'static str {
        match self {
            ClimateVariable::High => "high",
            ClimateVariable::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClimateVariable::High => "High",
            ClimateVariable::Low => "Low",
        }
    }
}

impl fmt::Display for ClimateVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for ClimateVariable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(ClimateVariable::High),
            "low" => Ok(ClimateVariable::Low),
            other => Err(format!("unknown climate variable: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climate_variable_parsing() {
        assert_eq!("high".parse::<ClimateVariable>(), Ok(ClimateVariable::High));
        assert_eq!(" LOW ".parse::<ClimateVariable>(), Ok(ClimateVariable::Low));
        assert!("precip; DROP TABLE climate".parse::<ClimateVariable>().is_err());
    }
}
