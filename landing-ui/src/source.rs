//! Where the counters come from, and how a fetch is tied to a mounted page.
//!
//! [`MetricsSource`] is the seam between the page and the network. The
//! browser implementation, [`HttpMetricsSource`], issues a single
//! unauthenticated `GET`. [`load_metrics`] turns any failure into the zeroed
//! state after logging it, so the page never has to handle an error.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::future::{FutureExt, LocalBoxFuture};
use tracing::{debug, error};

use crate::error::Result;
use crate::metrics::MetricsState;

/// Produces the raw response body of the metrics endpoint.
pub trait MetricsSource {
    /// Fetch the body once. Implementations report transport and status
    /// failures as errors; the body is parsed by the caller.
    fn fetch(&self) -> impl Future<Output = Result<String>>;
}

/// `GET`s the configured endpoint with the browser's `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpMetricsSource {
    endpoint: String,
}

impl HttpMetricsSource {
    /// Source reading from `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// The URL this source reads from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MetricsSource for HttpMetricsSource {
    #[cfg(target_arch = "wasm32")]
    async fn fetch(&self) -> Result<String> {
        use crate::error::MetricsError;
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let window = web_sys::window().ok_or_else(|| MetricsError::Network("no window".into()))?;

        let response = JsFuture::from(window.fetch_with_str(&self.endpoint))
            .await
            .map_err(js_error)?;
        let response: web_sys::Response = response.dyn_into().map_err(js_error)?;

        if !response.ok() {
            return Err(MetricsError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        text.as_string()
            .ok_or_else(|| MetricsError::Network("response body is not text".into()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn fetch(&self) -> Result<String> {
        Err(crate::error::MetricsError::Network(format!(
            "cannot fetch {} outside a browser",
            self.endpoint
        )))
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> crate::error::MetricsError {
    use wasm_bindgen::JsCast;

    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    };
    crate::error::MetricsError::Network(message)
}

type FetchFn = dyn Fn() -> LocalBoxFuture<'static, Result<String>> + Send + Sync;

/// Type-erased [`MetricsSource`] that can be handed through Leptos context.
///
/// `LandingPage` uses a `SharedSource` from context when one is provided and
/// falls back to an [`HttpMetricsSource`] for the configured endpoint.
#[derive(Clone)]
pub struct SharedSource(Arc<FetchFn>);

impl SharedSource {
    /// Wrap `source`; each fetch runs on a clone of it.
    pub fn new<S>(source: S) -> Self
    where
        S: MetricsSource + Clone + Send + Sync + 'static,
    {
        Self(Arc::new(move || {
            let source = source.clone();
            async move { source.fetch().await }.boxed_local()
        }))
    }
}

impl fmt::Debug for SharedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSource(..)")
    }
}

impl MetricsSource for SharedSource {
    fn fetch(&self) -> impl Future<Output = Result<String>> {
        (self.0)()
    }
}

/// Fetch, parse and reduce. Errors are returned to the caller.
pub async fn fetch_metrics<S: MetricsSource>(source: &S) -> Result<MetricsState> {
    let body = source.fetch().await?;
    let state = MetricsState::from_json(&body)?;
    debug!(
        total_activations = state.total_activations,
        remaining_target = state.remaining_target,
        "metrics loaded"
    );
    Ok(state)
}

/// Like [`fetch_metrics`], but never fails: errors are logged and the
/// zeroed state is returned, which renders the same as an empty sheet.
pub async fn load_metrics<S: MetricsSource>(source: &S) -> MetricsState {
    match fetch_metrics(source).await {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "Error fetching metrics");
            MetricsState::default()
        }
    }
}

/// Liveness flag shared between a mounted component and its in-flight fetch.
///
/// The component retires the flag in its cleanup; the fetch checks it before
/// writing results back. Clones share the same flag.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    /// A new, live flag.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Whether the owner is still mounted.
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the owner as gone. Idempotent.
    pub fn retire(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Load metrics and hand them to `apply`, unless `liveness` was retired
/// while the request was in flight.
///
/// Returns whether `apply` ran.
pub async fn load_into<S, F>(source: &S, liveness: &Liveness, apply: F) -> bool
where
    S: MetricsSource,
    F: FnOnce(MetricsState),
{
    let state = load_metrics(source).await;
    if liveness.is_alive() {
        apply(state);
        true
    } else {
        debug!("landing page unmounted before metrics arrived; dropping result");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricsError;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    enum Reply {
        Body(&'static str),
        Status(u16),
        Offline,
    }

    struct FakeSource {
        reply: Reply,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
            }
        }
    }

    impl MetricsSource for FakeSource {
        async fn fetch(&self) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            match self.reply {
                Reply::Body(body) => Ok(body.to_string()),
                Reply::Status(code) => Err(MetricsError::Status(code)),
                Reply::Offline => Err(MetricsError::Network("offline".into())),
            }
        }
    }

    const EXAMPLE: &str = r#"[
        {"Silver": 2, "Gold": 1, "Platinum": 0, "Standard": 0, "Target": 5},
        {"Silver": 0, "Gold": 0, "Platinum": 0, "Standard": 3, "Target": 5}
    ]"#;

    #[test]
    fn loads_and_reduces_rows() {
        let source = FakeSource::new(Reply::Body(EXAMPLE));
        let state = block_on(load_metrics(&source));
        assert_eq!(state.total_activations, 6);
        assert_eq!(state.remaining_target, 4);
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn server_error_leaves_zeroes() {
        let source = FakeSource::new(Reply::Status(500));
        assert_eq!(block_on(load_metrics(&source)), MetricsState::default());

        let err = block_on(fetch_metrics(&source)).unwrap_err();
        assert!(matches!(err, MetricsError::Status(500)));
    }

    #[test]
    fn network_failure_leaves_zeroes() {
        let source = FakeSource::new(Reply::Offline);
        assert_eq!(block_on(load_metrics(&source)), MetricsState::default());
    }

    #[test]
    fn malformed_body_leaves_zeroes() {
        let source = FakeSource::new(Reply::Body("<!doctype html>"));
        assert_eq!(block_on(load_metrics(&source)), MetricsState::default());

        let source = FakeSource::new(Reply::Body(r#"{"rows": []}"#));
        assert_eq!(block_on(load_metrics(&source)), MetricsState::default());
    }

    #[test]
    fn null_row_leaves_zeroes() {
        let source = FakeSource::new(Reply::Body(r#"[{"Silver": 2, "Target": 5}, null]"#));
        assert_eq!(block_on(load_metrics(&source)), MetricsState::default());

        let err = block_on(fetch_metrics(&source)).unwrap_err();
        assert!(matches!(err, MetricsError::NullRow(1)));
    }

    #[test]
    fn live_owner_receives_result() {
        let source = FakeSource::new(Reply::Body(EXAMPLE));
        let liveness = Liveness::new();
        let mut seen = None;
        let applied = block_on(load_into(&source, &liveness, |s| seen = Some(s)));
        assert!(applied);
        assert_eq!(seen.map(|s| s.total_activations), Some(6));
    }

    #[test]
    fn retired_owner_is_not_written() {
        let source = FakeSource::new(Reply::Body(EXAMPLE));
        let liveness = Liveness::new();
        liveness.clone().retire();
        let mut seen = None;
        let applied = block_on(load_into(&source, &liveness, |s| seen = Some(s)));
        assert!(!applied);
        assert!(seen.is_none());
        assert_eq!(source.calls.get(), 1);
    }

    #[derive(Clone)]
    struct CountingSource {
        body: &'static str,
        calls: Arc<std::sync::atomic::AtomicUsize>,
    }

    impl MetricsSource for CountingSource {
        async fn fetch(&self) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.to_string())
        }
    }

    #[test]
    fn shared_source_forwards_to_the_wrapped_source() {
        let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let shared = SharedSource::new(CountingSource {
            body: EXAMPLE,
            calls: Arc::clone(&calls),
        });

        let state = block_on(load_metrics(&shared.clone()));
        assert_eq!(state.remaining_target, 4);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(format!("{shared:?}"), "SharedSource(..)");
    }

    #[test]
    fn native_http_source_reports_network_error() {
        let source = HttpMetricsSource::new("/api/metrics");
        assert_eq!(source.endpoint(), "/api/metrics");
        let err = block_on(source.fetch()).unwrap_err();
        assert!(matches!(err, MetricsError::Network(_)));
    }
}
