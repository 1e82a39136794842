//! Year, month and day drop-downs bound to the current form value
//!
//! Each widget renders a `<select>` over a closed range with the option equal
//! to the current value marked `selected`. Impossible dates such as February
//! 31 are not prevented here.

use maud::{html, Markup};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Years `first..=last`, newest last
pub fn year_select(first: i32, last: i32, selected: i32, name: &str) -> Markup {
    select_control(
        name,
        (first..=last).map(|y| (y.to_string(), y.to_string())),
        &selected.to_string(),
    )
}

pub fn month_select(selected: u8, name: &str) -> Markup {
    select_control(
        name,
        (1u8..=12)
            .zip(MONTH_NAMES)
            .map(|(m, label)| (m.to_string(), label.to_string())),
        &selected.to_string(),
    )
}

pub fn day_select(selected: u8, name: &str) -> Markup {
    select_control(
        name,
        (1u8..=31).map(|d| (d.to_string(), d.to_string())),
        &selected.to_string(),
    )
}

/// `options` are `(value, label)` pairs
pub fn select_control<I>(name: &str, options: I, selected: &str) -> Markup
where
    I: IntoIterator<Item = (String, String)>,
{
    html! {
        div class="select is-small" {
            select name=(name) {
                @for (value, label) in options {
                    option value=(value) selected[value == selected] { (label) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_options(markup: &str) -> Vec<&str> {
        markup
            .split("<option")
            .filter(|o| o.contains(" selected"))
            .collect()
    }

    #[test]
    fn year_range_is_closed() {
        let html = year_select(2004, 2024, 2010, "year").into_string();

        assert!(html.contains(r#"name="year""#));
        assert!(html.contains(r#"value="2004""#));
        assert!(html.contains(r#"value="2024""#));
        assert!(!html.contains(r#"value="2003""#));
        assert!(!html.contains(r#"value="2025""#));
        assert_eq!(html.matches("<option").count(), 21);
    }

    #[test]
    fn current_value_is_selected_once() {
        let html = year_select(2004, 2024, 2010, "year").into_string();
        let selected = selected_options(&html);

        assert_eq!(selected.len(), 1);
        assert!(selected[0].contains(r#"value="2010""#));
    }

    #[test]
    fn month_select_uses_names() {
        let html = month_select(2, "month1").into_string();
        let selected = selected_options(&html);

        assert_eq!(html.matches("<option").count(), 12);
        assert!(selected[0].contains(r#"value="2""#));
        assert!(selected[0].contains("February"));
    }

    #[test]
    fn day_select_allows_31_for_any_month() {
        let html = day_select(31, "day2").into_string();
        let selected = selected_options(&html);

        assert_eq!(html.matches("<option").count(), 31);
        assert!(selected[0].contains(r#"value="31""#));
        assert!(html.contains(r#"name="day2""#));
    }

    #[test]
    fn out_of_range_value_selects_nothing() {
        let html = year_select(2013, 2020, 2030, "year1").into_string();
        assert!(selected_options(&html).is_empty());
    }
}
