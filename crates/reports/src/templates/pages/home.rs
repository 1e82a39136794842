use maud::{html, Markup};

use crate::{
    db::{ClimateVariable, Station},
    reference::ReferenceTable,
    templates::{
        components::select_control,
        layouts::{base, CurrentPage, PageConfig},
    },
};

pub struct HomeData {
    pub climate_label: String,
    pub climate_stations: Vec<Station>,
}

pub fn home_page(data: &HomeData) -> Markup {
    let config = PageConfig {
        title: "IEM Reports",
        current_page: CurrentPage::Home,
        breadcrumb: Vec::new(),
    };

    base(&config, home_content(data))
}

fn home_content(data: &HomeData) -> Markup {
    html! {
        div class="columns" {
            div class="column is-half" {
                div class="box" {
                    h2 class="title is-5" { "Reports" }
                    ul {
                        li { a href="/ASOS/reports/mon_prec" { "ASOS Monthly Precipitation" } }
                        li { a href="/agclimate/hist/hourly" { "ISU Soil Moisture Hourly Data Request" } }
                        li { a href="/agclimate/hist/daily" { "ISU Soil Moisture Daily Data Request" } }
                    }
                }

                div class="box" {
                    h2 class="title is-5" { "Reference Tables" }
                    ul {
                        li { a href="/lsr/wfos.js" { "Client side lookup script" } }
                        @for table in ReferenceTable::ALL {
                            li {
                                a href=(format!("/json/reference/{}", table.slug())) { (table.title()) }
                            }
                        }
                    }
                }
            }

            div class="column is-half" {
                div class="box" {
                    h2 class="title is-5" { "Daily Temperature Extremes" }
                    p class="mb-3" {
                        "Record daily high and low temperatures for a "
                        (data.climate_label) " station."
                    }
                    form method="get" action="/plotting/coop/extremes" {
                        div class="field" {
                            label class="label is-small" { "Station" }
                            (select_control(
                                "station",
                                data.climate_stations.iter().map(|s| {
                                    (s.station_id.clone(), format!("{} ({})", s.name, s.station_id))
                                }),
                                "",
                            ))
                        }
                        div class="field" {
                            label class="label is-small" { "Variable" }
                            (select_control(
                                "var",
                                [ClimateVariable::High, ClimateVariable::Low]
                                    .iter()
                                    .map(|v| (v.column().to_string(), format!("{} Temperature", v.label()))),
                                ClimateVariable::High.column(),
                            ))
                        }
                        button class="button is-primary is-small" type="submit" { "Make Plot" }
                    }
                }
            }
        }
    }
}
