use maud::{html, Markup};

use crate::templates::layouts::CurrentPage;

pub fn navbar(current_page: CurrentPage) -> Markup {
    html! {
        nav class="navbar mb-4" role="navigation" aria-label="main navigation" {
            div class="navbar-menu is-active" {
                div class="navbar-start" {
                    a href="/" class=(nav_item_class(current_page, CurrentPage::Home)) {
                        span class="icon-text" {
                            span class="icon" { (home_icon()) }
                            span { "Reports" }
                        }
                    }
                    a href="/ASOS/reports/mon_prec"
                      class=(nav_item_class(current_page, CurrentPage::Precipitation)) {
                        span class="icon-text" {
                            span class="icon" { (rain_icon()) }
                            span { "ASOS Precipitation" }
                        }
                    }
                    a href="/agclimate/hist/hourly"
                      class=(nav_item_class(current_page, CurrentPage::SoilMoisture)) {
                        span class="icon-text" {
                            span class="icon" { (download_icon()) }
                            span { "Soil Moisture Data" }
                        }
                    }
                }
            }
        }
    }
}

fn nav_item_class(current: CurrentPage, page: CurrentPage) -> &'static str {
    if current == page {
        "navbar-item is-active"
    } else {
        "navbar-item"
    }
}

fn home_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" {}
            polyline points="9 22 9 12 15 12 15 22" {}
        }
    }
}

fn rain_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            line x1="8" y1="19" x2="8" y2="21" {}
            line x1="8" y1="13" x2="8" y2="15" {}
            line x1="16" y1="19" x2="16" y2="21" {}
            line x1="16" y1="13" x2="16" y2="15" {}
            line x1="12" y1="21" x2="12" y2="23" {}
            line x1="12" y1="15" x2="12" y2="17" {}
            path d="M20 16.58A5 5 0 0 0 18 7h-1.26A8 8 0 1 0 4 15.25" {}
        }
    }
}

fn download_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" {}
            polyline points="7 10 12 15 17 10" {}
            line x1="12" y1="15" x2="12" y2="3" {}
        }
    }
}
