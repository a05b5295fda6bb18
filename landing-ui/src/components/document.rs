//! Root document component - the complete HTML page for static rendering

use leptos::prelude::*;

use super::LandingPage;
use crate::config::{LandingConfig, META_LOG_LEVEL, META_METRICS_ENDPOINT};
use crate::styles::LANDING_CSS;
use crate::types::View;

/// Full HTML document wrapping [`LandingPage`].
///
/// The resolved config is written back as meta tags so a client bundle
/// loaded into this page picks up the same endpoint.
#[component]
pub fn LandingDocument(config: LandingConfig) -> impl IntoView {
    let endpoint = config.metrics_endpoint.clone();
    let log_level = config.log_level.clone();
    provide_context(config);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name=META_METRICS_ENDPOINT content=endpoint />
                <meta name=META_LOG_LEVEL content=log_level />
                <title>"Phone Number Tools"</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <main class="app-main">
                    <LandingPage on_navigate=Callback::new(|_view: View| {}) />
                </main>
            </body>
        </html>
    }
}
