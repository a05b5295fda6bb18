// numtools landing - Leptos 0.8 client app
//
// Hosts the landing page and owns navigation between it and the tools.

mod routing;
mod sections;

use leptos::prelude::*;
use numtools_ui::components::LandingPage;
use numtools_ui::config::LandingConfig;
use numtools_ui::styles::LANDING_CSS;
use numtools_ui::telemetry;
use numtools_ui::types::View;
use sections::ToolFrame;
use tracing::info;

fn main() {
    console_error_panic_hook::set_once();

    let config = LandingConfig::from_document();
    telemetry::init(&config.log_level);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        endpoint = %config.metrics_endpoint,
        "starting numtools landing"
    );

    leptos::mount::mount_to_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}

#[component]
fn App() -> impl IntoView {
    let (current, set_current) = signal(routing::initial_view());

    let navigate = Callback::new(move |view: View| {
        set_current.set(view);
        routing::sync_fragment(view);
    });

    // Back/forward buttons change the fragment without going through `navigate`.
    let listener = window_event_listener(leptos::ev::hashchange, move |_| {
        if let Some(view) = routing::fragment_view() {
            if current.get_untracked() != view {
                set_current.set(view);
            }
        }
    });
    on_cleanup(move || listener.remove());

    view! {
        <style>{LANDING_CSS}</style>
        <main class="app-main">
            {move || match current.get() {
                View::Landing => view! { <LandingPage on_navigate=navigate /> }.into_any(),
                view => view! { <ToolFrame view=view on_navigate=navigate /> }.into_any(),
            }}
        </main>
    }
}
