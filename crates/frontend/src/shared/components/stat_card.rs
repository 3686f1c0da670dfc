use crate::shared::format::format_value;
use crate::shared::locale::use_locale;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;

/// Summary card showing one labelled numeric value.
///
/// `None` renders an em dash placeholder instead of a number. The value is
/// plain data: the card is re-created whenever the report document changes,
/// while the number format follows the locale signal reactively.
#[component]
pub fn StatCard(
    /// Label displayed above the value (already localized by the caller)
    label: String,
    /// Primary numeric value (None = no data)
    value: Option<f64>,
    /// How to format the value
    format: ValueFormat,
) -> impl IntoView {
    let locale = use_locale();

    let formatted = move || match value {
        Some(v) => format_value(v, format, locale.get()),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
