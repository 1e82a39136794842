//! Daily climate extremes chart
//!
//! Plots the record maximum, record minimum and average of one daily climate
//! variable across the 366 days of a leap reference year, with month dividers
//! and the freezing line, as an SVG document.

use plotters::prelude::*;

use crate::db::{ClimateDay, ClimateVariable};

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 480;

/// Day-of-year offsets labelled on the x axis
const MONTH_TICKS: [(i32, &str); 13] = [
    (0, "Jan 1"),
    (31, "Feb 1"),
    (60, "Mar 1"),
    (91, "Apr 1"),
    (121, "May 1"),
    (152, "Jun 1"),
    (182, "Jul 1"),
    (213, "Aug 1"),
    (244, "Sept 1"),
    (274, "Oct 1"),
    (305, "Nov 1"),
    (335, "Dec 1"),
    (365, "Dec 31"),
];

/// Quarter boundaries are drawn darker than the other month dividers
const QUARTER_STARTS: [i32; 3] = [91, 182, 274];

const FREEZING_F: f64 = 32.0;

const TAN: RGBColor = RGBColor(210, 180, 140);
const BROWN: RGBColor = RGBColor(165, 42, 42);

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No climate data for station {0}")]
    NoData(String),
    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

pub struct ExtremesChart<'a> {
    pub station_id: &'a str,
    pub station_name: &'a str,
    pub variable: ClimateVariable,
    pub days: &'a [ClimateDay],
}

impl ExtremesChart<'_> {
    pub fn title(&self) -> String {
        format!(
            "Daily {} Temp Extremes for {}",
            self.variable.label(),
            self.station_name
        )
    }

    /// Length of the record, taken from the last day like the table stores it
    pub fn subtitle(&self) -> String {
        let years = self
            .days
            .iter()
            .rev()
            .find_map(|d| d.years)
            .unwrap_or_default();
        format!("Climate Record: {} years", years)
    }

    pub fn render_svg(&self) -> Result<String, Error> {
        if self.days.is_empty() {
            return Err(Error::NoData(self.station_id.to_string()));
        }

        let mut svg = String::new();
        self.draw(&mut svg)
            .map_err(|e| Error::Draw(e.to_string()))?;
        Ok(svg)
    }

    fn series(&self, value: fn(&ClimateDay) -> Option<f64>) -> Vec<(i32, f64)> {
        self.days
            .iter()
            .zip(0..)
            .filter_map(|(day, x)| value(day).map(|v| (x, v)))
            .collect()
    }

    /// y range covering every value and the freezing line, padded a little
    fn y_range(&self) -> (f64, f64) {
        let values = self
            .days
            .iter()
            .flat_map(|d| [d.max, d.min, d.avg])
            .flatten()
            .chain(std::iter::once(FREEZING_F));
        let (low, high) = values.fold((f64::MAX, f64::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let pad = ((high - low) * 0.05).max(1.0);
        (low - pad, high + pad)
    }

    fn draw(&self, svg: &mut String) -> Result<(), Box<dyn std::error::Error>> {
        let var = self.variable.column();
        let (y_min, y_max) = self.y_range();
        let maxes = self.series(|d| d.max);
        let mins = self.series(|d| d.min);
        let avgs = self.series(|d| d.avg);

        let root = SVGBackend::with_string(svg, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;
        let root = root.titled(&self.title(), ("sans-serif", 16).into_font())?;
        root.draw_text(
            &self.subtitle(),
            &("sans-serif", 12).into_font().color(&BLACK),
            (40, 0),
        )?;

        let mut chart = ChartBuilder::on(&root)
            .margin_top(20i32)
            .margin_left(10i32)
            .margin_right(40i32)
            .x_label_area_size(60u32)
            .y_label_area_size(50u32)
            .build_cartesian_2d(
                (0i32..366i32).with_key_points(MONTH_TICKS.iter().map(|(x, _)| *x).collect()),
                y_min..y_max,
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(MONTH_TICKS.len() + 1)
            .x_label_formatter(&|x: &i32| {
                MONTH_TICKS
                    .iter()
                    .find(|(tick, _)| tick == x)
                    .map(|(_, label)| label.to_string())
                    .unwrap_or_default()
            })
            .x_desc("Date")
            .y_desc("Temperature [F]")
            .draw()?;

        for (x, _) in MONTH_TICKS.iter().skip(1).take(MONTH_TICKS.len() - 2) {
            let color = if QUARTER_STARTS.contains(x) { BLACK } else { TAN };
            chart.draw_series(LineSeries::new(vec![(*x, y_min), (*x, y_max)], color))?;
        }
        chart.draw_series(LineSeries::new(
            vec![(0, FREEZING_F), (365, FREEZING_F)],
            BLUE.stroke_width(2),
        ))?;

        chart
            .draw_series(LineSeries::new(maxes, RED))?
            .label(format!("Max {} (F)", var))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
        chart
            .draw_series(LineSeries::new(mins, BLUE))?
            .label(format!("Min {} (F)", var))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        chart
            .draw_series(LineSeries::new(avgs, BROWN))?
            .label("Average (F)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BROWN));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}
