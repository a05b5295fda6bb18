//! Landing page configuration.
//!
//! Values are resolved in two layers:
//!
//! 1. Build time: `NUMTOOLS_METRICS_ENDPOINT` and `NUMTOOLS_LOG_LEVEL`
//!    environment variables seen by `rustc` (via `option_env!`).
//! 2. Page time: `<meta name="numtools:metrics-endpoint" content="...">` and
//!    `<meta name="numtools:log-level" content="...">` in the hosting
//!    document, so one build can be pointed at different sheets.
//!
//! The resolved config is handed to components through Leptos context
//! (`provide_context`); [`crate::components::LandingPage`] falls back to
//! [`LandingConfig::default`] when none was provided.

use serde::{Deserialize, Serialize};

/// Meta tag overriding the metrics endpoint.
pub const META_METRICS_ENDPOINT: &str = "numtools:metrics-endpoint";
/// Meta tag overriding the log level.
pub const META_LOG_LEVEL: &str = "numtools:log-level";

const DEFAULT_METRICS_ENDPOINT: &str = "/api/metrics";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings for the landing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// URL answering `GET` with the agent rows as a JSON array
    pub metrics_endpoint: String,
    /// Log level (trace, debug, info, warn, error, off)
    pub log_level: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            metrics_endpoint: option_env!("NUMTOOLS_METRICS_ENDPOINT")
                .unwrap_or(DEFAULT_METRICS_ENDPOINT)
                .to_string(),
            log_level: option_env!("NUMTOOLS_LOG_LEVEL")
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_string(),
        }
    }
}

impl LandingConfig {
    /// Apply overrides looked up by meta tag name. Blank values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(endpoint) = non_blank(META_METRICS_ENDPOINT) {
            self.metrics_endpoint = endpoint;
        }
        if let Some(level) = non_blank(META_LOG_LEVEL) {
            self.log_level = level;
        }
        self
    }

    /// Defaults overridden by the current document's meta tags.
    ///
    /// Outside a browser there is no document and this is just
    /// [`LandingConfig::default`].
    pub fn from_document() -> Self {
        Self::default().with_overrides(document_meta)
    }
}

#[cfg(target_arch = "wasm32")]
fn document_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
}

#[cfg(not(target_arch = "wasm32"))]
fn document_meta(_name: &str) -> Option<String> {
    None
}
