use maud::{html, Markup};

use crate::{db::Station, request_form::RequestForm};

/// One `sts` checkbox per station, checked when the form already selected it
pub fn station_checkboxes(stations: &[Station], form: &RequestForm) -> Markup {
    html! {
        div class="field station-list" {
            @if stations.is_empty() {
                p class="has-text-grey" { "No stations available." }
            }
            @for station in stations {
                label class="checkbox is-block" {
                    input type="checkbox" name="sts" value=(station.station_id)
                        checked[form.is_selected(&station.station_id)];
                    " "
                    (station.name) " (" (station.station_id) ")"
                }
            }
        }
    }
}
