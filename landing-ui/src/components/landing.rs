//! The landing page: summary tiles, header, tool grid, footer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ICON_MEDAL, ICON_SPARKLE, ICON_TARGET, Icon, StatTile, ToolGrid};
use crate::config::LandingConfig;
use crate::metrics::MetricsState;
use crate::source::{HttpMetricsSource, Liveness, SharedSource, load_into};
use crate::types::{Gradient, View};

const ACTIVATIONS_BADGE: Gradient = Gradient {
    from: "#6366f1",
    to: "#a855f7",
};
const TARGET_BADGE: Gradient = Gradient {
    from: "#3b82f6",
    to: "#14b8a6",
};

/// Landing page for the phone number tools.
///
/// Fetches the activation counters once per mount and renders one card per
/// tool. The counters come from a [`SharedSource`] in context if there is
/// one, otherwise from [`LandingConfig::metrics_endpoint`] (itself taken from
/// context, or the default config). Clicking a card calls
/// `on_navigate` with that tool's [`View`].
#[component]
pub fn LandingPage(
    /// Called with the destination view when a tool card is clicked
    #[prop(into)]
    on_navigate: Callback<View>,
) -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let (metrics, set_metrics) = signal(MetricsState::default());

    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.retire()
    });

    // Effects only run in the browser; SSR renders the zeroed tiles.
    let source = use_context::<SharedSource>()
        .unwrap_or_else(|| SharedSource::new(HttpMetricsSource::new(config.metrics_endpoint)));
    Effect::new(move |_| {
        let source = source.clone();
        let liveness = liveness.clone();
        spawn_local(async move {
            load_into(&source, &liveness, |state| set_metrics.set(state)).await;
        });
    });

    let total_activations = Signal::derive(move || metrics.get().total_activations.to_string());
    let remaining_target = Signal::derive(move || metrics.get().remaining_target.to_string());

    view! {
        <div class="landing">
            <div class="stat-grid">
                <StatTile
                    label="Total Activations"
                    icon=ICON_MEDAL
                    gradient=ACTIVATIONS_BADGE
                    value=total_activations
                />
                <StatTile
                    label="Remaining Target"
                    icon=ICON_TARGET
                    gradient=TARGET_BADGE
                    value=remaining_target
                />
            </div>
            <LandingHeader />
            <ToolGrid on_navigate=on_navigate />
            <LandingFooter />
        </div>
    }
}

#[component]
fn LandingHeader() -> impl IntoView {
    view! {
        <header class="landing-header fade-in">
            <div class="landing-badge">
                <Icon path=ICON_SPARKLE size="16" class="badge-icon" />
                <span>"Advanced Phone Number Tools"</span>
            </div>
            <h1 class="landing-title">"Transform Your Numbers"</h1>
            <p class="landing-subtitle">
                "Powerful tools for managing, analyzing, and processing phone numbers with advanced features"
            </p>
        </header>
    }
}

#[component]
fn LandingFooter() -> impl IntoView {
    view! {
        <footer class="landing-footer fade-in" style="animation-delay: 400ms">
            <span>"Built with"</span>
            <span class="heart">"♥"</span>
            <span>"by TAB"</span>
        </footer>
    }
}
