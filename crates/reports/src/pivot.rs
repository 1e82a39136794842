//! Monthly precipitation pivot
//!
//! Folds `(station, month, value)` aggregates into one fixed 12 slot row per
//! station and computes the derived totals shown on the report. A slot is
//! `None` when the database had no aggregate for that month, which is not the
//! same thing as a month with zero precipitation.

use std::collections::BTreeMap;
use std::ops::Range;

use log::warn;

use crate::db::MonthlyPrecip;

pub const MONTHS: usize = 12;

/// Marker rendered for a month without data
pub const MISSING: &str = "M";

/// May through August, zero based
pub const MJJA: Range<usize> = 4..8;

pub type MonthlyValues = [Option<f64>; MONTHS];

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PrecipPivot {
    stations: BTreeMap<String, MonthlyValues>,
}

impl PrecipPivot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = MonthlyPrecip>,
    {
        rows.into_iter().fold(Self::new(), |mut pivot, row| {
            pivot.insert(&row.station_id, row.month, row.precip);
            pivot
        })
    }

    /// Store `value` for a 1-based `month`. A repeated (station, month) pair
    /// overwrites the earlier value.
    pub fn insert(&mut self, station_id: &str, month: u32, value: f64) {
        let Some(slot) = (month as usize).checked_sub(1).filter(|i| *i < MONTHS) else {
            warn!(
                "ignoring precip for station {} with month out of range: {}",
                station_id, month
            );
            return;
        };
        let values = self
            .stations
            .entry(station_id.to_owned())
            .or_insert([None; MONTHS]);
        values[slot] = Some(value);
    }

    pub fn get(&self, station_id: &str) -> Option<&MonthlyValues> {
        self.stations.get(station_id)
    }

    /// Stations in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MonthlyValues)> {
        self.stations.iter().map(|(id, values)| (id.as_str(), values))
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Sum of the present values in `window`; missing months add nothing, so a
/// window with no data at all sums to zero.
pub fn window_total(values: &MonthlyValues, window: Range<usize>) -> f64 {
    values[window].iter().flatten().fold(0.0, |total, v| total + v)
}

pub fn mjja_total(values: &MonthlyValues) -> f64 {
    window_total(values, MJJA)
}

pub fn annual_total(values: &MonthlyValues) -> f64 {
    window_total(values, 0..MONTHS)
}

pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_cell(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), format_amount)
}
