//! Summary tile - icon badge, label and a live number

use leptos::prelude::*;

use super::Icon;
use crate::types::Gradient;

/// One summary counter above the tool grid.
#[component]
pub fn StatTile(
    /// Caption under the icon
    label: &'static str,
    /// Badge icon path
    icon: &'static str,
    /// Badge background
    gradient: Gradient,
    /// Rendered number, updated when metrics arrive
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <div class="stat-badge" style=format!("background-image: {}", gradient.css())>
                <Icon path=icon size="28" />
            </div>
            <div class="stat-text">
                <p class="stat-label">{label}</p>
                <p class="stat-value">{move || value.get()}</p>
            </div>
        </div>
    }
}
