//! Reusable stat card for dashboard summary figures.

#[cfg(test)]
#[path = "metric_card_test.rs"]
mod metric_card_test;

use leptos::prelude::*;

/// A single dashboard metric: label, headline value, and a hint line.
///
/// `value` is pre-formatted by the caller; missing backend data renders as
/// the `"--"` placeholder rather than an empty card.
#[component]
pub fn MetricCard(label: &'static str, value: Signal<String>, hint: Signal<String>) -> impl IntoView {
    view! {
        <div class="metric-card">
            <p class="metric-card__label">{label}</p>
            <p class="metric-card__value">{value}</p>
            <p class="metric-card__hint">{hint}</p>
        </div>
    }
}

/// Format an optional count for a metric card.
pub(crate) fn format_count(value: Option<i64>) -> String {
    value.map_or_else(|| "--".to_owned(), |count| count.to_string())
}

/// Format an optional percentage for a metric card.
pub(crate) fn format_percent(value: Option<i64>) -> String {
    value.map_or_else(|| "--".to_owned(), |score| format!("{score}%"))
}
