//! # numtools-ui
//!
//! Leptos components for the landing page of the phone number tools.
//!
//! The page shows two team-wide counters pulled from a spreadsheet-backed
//! endpoint (total activations and remaining target) and one navigation
//! card per tool. The hosting app decides what navigation means; the page
//! only reports which [`types::View`] was picked.
//!
//! ## Quick Start
//!
//! Client-side (with the `csr` feature), mount the page and route on the
//! callback:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use numtools_ui::{components::LandingPage, config::LandingConfig, types::View};
//!
//! provide_context(LandingConfig::from_document());
//! let (view, set_view) = signal(View::Landing);
//! view! { <LandingPage on_navigate=move |v: View| set_view.set(v) /> }
//! ```
//!
//! Static rendering, e.g. for a pre-rendered `index.html`:
//!
//! ```rust
//! use numtools_ui::{render_landing, config::LandingConfig};
//!
//! let html = render_landing(&LandingConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Transform Your Numbers"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - view identifiers and the tool catalog
//! - [`metrics`] - agent rows, field coercion, counter reduction
//! - [`source`] - the metrics endpoint and fetch lifetime
//! - [`components`] - Leptos UI components
//! - [`config`] - endpoint and log level resolution
//! - [`telemetry`] - `tracing` output to the browser console
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod error;
pub mod metrics;
pub mod source;
pub mod styles;
pub mod telemetry;
pub mod types;

use components::LandingDocument;
use config::LandingConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use error::MetricsError;

/// Render the landing page as a complete HTML document.
///
/// No effects run during static rendering, so the counters show their
/// initial zeroes; a client bundle loaded into the page fills them in.
pub fn render_landing(config: &LandingConfig) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let doc = view! { <LandingDocument config=config.clone() /> };
        doc.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
