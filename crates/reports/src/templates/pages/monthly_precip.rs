use maud::{html, Markup};

use crate::templates::{
    components::{year_select, Crumb},
    fragments::{precip_table, PrecipTableRow},
    layouts::{base, CurrentPage, PageConfig},
};

/// Oldest year offered by the year selector
pub const FIRST_REPORT_YEAR: i32 = 2004;

pub struct MonthlyPrecipData {
    pub year: i32,
    pub last_year: i32,
    pub network: String,
    pub network_label: String,
    /// `dd Mon YYYY hh am/pm`
    pub generated_at: String,
    pub rows: Vec<PrecipTableRow>,
}

pub fn monthly_precip_page(data: &MonthlyPrecipData) -> Markup {
    let title = format!("{} Monthly Precipitation", data.network_label);
    let config = PageConfig {
        title: &title,
        current_page: CurrentPage::Precipitation,
        breadcrumb: vec![
            Crumb::link("ASOS Mainpage", "/"),
            Crumb::here(format!(
                "{} {} Precipitation Report",
                data.year, data.network_label
            )),
        ],
    };

    base(&config, monthly_precip_content(data))
}

fn monthly_precip_content(data: &MonthlyPrecipData) -> Markup {
    html! {
        div class="content" {
            p {
                "This table was generated at " (data.generated_at)
                " and is based on available ASOS data. "
                strong { "No attempt was made to estimate missing data." }
            }
        }

        form name="change" method="get" class="mb-4" {
            div class="field is-grouped" {
                div class="control" {
                    (year_select(FIRST_REPORT_YEAR, data.last_year, data.year, "year"))
                }
                input type="hidden" name="network" value=(data.network);
                div class="control" {
                    input class="button is-small" type="submit" value="Change Year";
                }
            }
        }

        p class="mb-4" {
            button id="create-grid" class="button is-small is-info is-light" type="button" {
                "Interactive Grid"
            }
        }

        @if data.rows.is_empty() {
            div class="has-text-centered has-text-grey py-4" {
                p { "No precipitation reports for this year." }
            }
        } @else {
            (precip_table(&data.rows))
        }
    }
}
