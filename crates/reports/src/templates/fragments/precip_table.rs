use std::collections::HashMap;

use maud::{html, Markup};
use serde::Serialize;
use utoipa::ToSchema;

use crate::pivot::{annual_total, format_amount, format_cell, mjja_total, PrecipPivot};

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One formatted line of the precipitation report
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PrecipTableRow {
    pub station_id: String,
    pub station_name: String,
    /// Monthly totals, `None` where the month has no data
    pub months: Vec<Option<f64>>,
    pub cells: Vec<String>,
    pub mjja: String,
    pub annual: String,
}

/// Builds the report rows in station order. Stations without a name in
/// `names` get an empty name.
pub fn precip_table_rows(pivot: &PrecipPivot, names: &HashMap<String, String>) -> Vec<PrecipTableRow> {
    pivot
        .iter()
        .map(|(station_id, values)| PrecipTableRow {
            station_id: station_id.to_string(),
            station_name: names.get(station_id).cloned().unwrap_or_default(),
            months: values.to_vec(),
            cells: values.iter().map(|v| format_cell(*v)).collect(),
            mjja: format_amount(mjja_total(values)),
            annual: format_amount(annual_total(values)),
        })
        .collect()
}

pub fn precip_table(rows: &[PrecipTableRow]) -> Markup {
    html! {
        div class="table-container" {
            table id="datagrid" class="table is-bordered is-narrow is-hoverable is-fullwidth" {
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        @for month in MONTH_ABBREVIATIONS {
                            th class="has-text-right" { (month) }
                        }
                        th class="has-text-right" { b { "MJJA" } }
                        th class="has-text-right" { b { "Year" } }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.station_id) }
                            td { (row.station_name) }
                            @for cell in &row.cells {
                                td class="has-text-right" { (cell) }
                            }
                            td class="has-text-right" { (row.mjja) }
                            td class="has-text-right" { (row.annual) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MonthlyPrecip;

    fn dsm_pivot() -> PrecipPivot {
        let values = [
            (1, 1.0),
            (3, 3.0),
            (5, 2.0),
            (6, 2.0),
            (7, 2.0),
            (8, 2.0),
        ];
        PrecipPivot::from_rows(values.into_iter().map(|(month, precip)| MonthlyPrecip {
            station_id: "DSM".into(),
            month,
            precip,
        }))
    }

    #[test]
    fn rows_carry_formatted_cells_and_totals() {
        let names = HashMap::from([("DSM".to_string(), "Des Moines".to_string())]);
        let rows = precip_table_rows(&dsm_pivot(), &names);

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.station_name, "Des Moines");
        assert_eq!(
            row.cells,
            vec!["1.00", "M", "3.00", "M", "2.00", "2.00", "2.00", "2.00", "M", "M", "M", "M"]
        );
        assert_eq!(row.mjja, "8.00");
        assert_eq!(row.annual, "12.00");
        assert_eq!(row.months[1], None);
    }

    #[test]
    fn unknown_station_has_empty_name() {
        let rows = precip_table_rows(&dsm_pivot(), &HashMap::new());
        assert_eq!(rows[0].station_name, "");
    }

    #[test]
    fn table_has_sixteen_columns() {
        let rows = precip_table_rows(&dsm_pivot(), &HashMap::new());
        let html = precip_table(&rows).into_string();

        assert!(html.contains(r#"id="datagrid""#));
        assert_eq!(html.matches("</th>").count(), 16);
        assert_eq!(html.matches("<td").count(), 16);
        assert!(html.contains("<td class=\"has-text-right\">M</td>"));
        assert!(html.contains("<td class=\"has-text-right\">8.00</td>"));
    }
}
