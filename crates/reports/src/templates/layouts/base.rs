use maud::{html, Markup, DOCTYPE};

use crate::templates::components::{breadcrumb, navbar, Crumb};

pub struct PageConfig<'a> {
    pub title: &'a str,
    pub current_page: CurrentPage,
    /// Trail shown above the content, empty for top level pages
    pub breadcrumb: Vec<Crumb>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CurrentPage {
    Home,
    Precipitation,
    SoilMoisture,
}

pub fn base(config: &PageConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@1.0.4/css/bulma.min.css";
                link rel="stylesheet" href="/static/styles.min.css";
            }
            body {
                section class="section" {
                    div class="container" {
                        nav class="level mb-4" {
                            div class="level-left" {
                                a href="/" class="has-text-current" style="text-decoration: none;" {
                                    h1 class="title level-item" { "IEM Reports" }
                                }
                            }
                            div class="level-right" {
                                p class="level-item" {
                                    a href="/docs" class="button is-link is-light is-small" {
                                        "API Docs"
                                    }
                                }
                            }
                        }

                        (navbar(config.current_page))

                        @if !config.breadcrumb.is_empty() {
                            (breadcrumb(&config.breadcrumb))
                        }

                        div id="main-content" {
                            (content)
                        }
                    }
                }

                script src="/static/app.min.js" {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_wraps_content() {
        let config = PageConfig {
            title: "Test Page",
            current_page: CurrentPage::Home,
            breadcrumb: vec![Crumb::link("Home", "/"), Crumb::here("Test")],
        };
        let page = base(&config, html! { p { "body text" } }).into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Test Page</title>"));
        assert!(page.contains("body text"));
        assert!(page.contains("class=\"breadcrumb"));
        assert!(page.contains("/static/app.min.js"));
    }
}
