use maud::{html, Markup};

#[derive(Debug, Clone)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    /// The page being shown, rendered without a link
    pub fn here(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

pub fn breadcrumb(trail: &[Crumb]) -> Markup {
    html! {
        nav class="breadcrumb mb-4" aria-label="breadcrumbs" {
            ul {
                @for crumb in trail {
                    @match &crumb.href {
                        Some(href) => {
                            li { a href=(href) { (crumb.label) } }
                        }
                        None => {
                            li class="is-active" { a href="#" aria-current="page" { (crumb.label) } }
                        }
                    }
                }
            }
        }
    }
}
