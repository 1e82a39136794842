use maud::{html, Markup};

use crate::{
    db::Station,
    request_form::{Delimiter, RequestForm, RequestMode, ISUSM_START_YEAR},
    templates::{
        components::{day_select, month_select, select_control, year_select, Crumb},
        fragments::{station_checkboxes, variable_list, DAILY_VARIABLES, HOURLY_VARIABLES},
        layouts::{base, CurrentPage, PageConfig},
    },
};

pub struct RequestPageData {
    pub form: RequestForm,
    pub stations: Vec<Station>,
    pub last_year: i32,
}

fn mode_title(mode: RequestMode) -> &'static str {
    match mode {
        RequestMode::Hourly => "Hourly",
        RequestMode::Daily => "Daily",
    }
}

pub fn isusm_request_page(data: &RequestPageData) -> Markup {
    let title = format!(
        "ISU Soil Moisture {} Data Request",
        mode_title(data.form.mode)
    );
    let config = PageConfig {
        title: &title,
        current_page: CurrentPage::SoilMoisture,
        breadcrumb: vec![Crumb::link("Reports", "/"), Crumb::here(title.clone())],
    };

    base(&config, request_content(data))
}

fn request_content(data: &RequestPageData) -> Markup {
    let form = &data.form;
    let (other_mode, variables) = match form.mode {
        RequestMode::Hourly => (RequestMode::Daily, HOURLY_VARIABLES),
        RequestMode::Daily => (RequestMode::Hourly, DAILY_VARIABLES),
    };

    html! {
        h3 class="title is-4" { (mode_title(form.mode)) " Data Request Form:" }

        div class="content" {
            p {
                b { "Information:" }
                " This interface accesses the archive of daily and hourly weather data collected \
                  from the Iowa Agclimate Automated Weather stations. Please select the appropriate \
                  stations and weather variables desired below."
            }
            p {
                b { "Data Interval:" }
                " Currently you are selected to download " (form.mode.as_str()) " data. You may wish to \
                  change this to "
                a href=(format!("/agclimate/hist/{}", other_mode)) { (other_mode.as_str()) " data" }
                "."
            }
        }

        div class="columns" {
            div class="column is-half" {
                form name="dl" method="get" action="/request/isusm" {
                    input type="hidden" name="mode" value=(form.mode.as_str());

                    h4 class="subtitle is-5" { "Select station(s):" }
                    (station_checkboxes(&data.stations, form))

                    h4 class="subtitle is-5 mt-4" { "Select the time interval:" }
                    table class="table is-narrow" {
                        thead {
                            tr { th {} th { "Year:" } th { "Month:" } th { "Day:" } }
                        }
                        tbody {
                            tr {
                                th { "Starting On:" }
                                td { (year_select(ISUSM_START_YEAR, data.last_year, form.start.year, "year1")) }
                                td { (month_select(form.start.month, "month1")) }
                                td { (day_select(form.start.day, "day1")) }
                            }
                            tr {
                                th { "Ending On:" }
                                td { (year_select(ISUSM_START_YEAR, data.last_year, form.end.year, "year2")) }
                                td { (month_select(form.end.month, "month2")) }
                                td { (day_select(form.end.day, "day2")) }
                            }
                        }
                    }

                    h4 class="subtitle is-5" { "Options:" }
                    div class="field" {
                        label class="checkbox" {
                            input type="checkbox" name="todisk" value="yes" checked[form.to_disk];
                            " Download directly to disk"
                        }
                    }
                    div class="field" {
                        label class="label is-small" { "Delimination:" }
                        (select_control(
                            "delim",
                            Delimiter::ALL.iter().map(|d| (d.as_str().to_string(), d.label().to_string())),
                            form.delimiter.as_str(),
                        ))
                    }

                    h4 class="subtitle is-5" { "Submit your request:" }
                    div class="buttons" {
                        input class="button is-primary" type="submit" value="Submit Query";
                        input class="button" type="reset";
                    }
                }
            }

            div class="column is-half" {
                h4 class="subtitle is-5" { "Description of variables in download" }
                (variable_list(variables))
            }
        }
    }
}
