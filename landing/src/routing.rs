// URL fragment <-> View mapping
//
// Views live in the fragment (`#/merge`) so a reload or a shared link lands
// on the same tool without a server-side router.

use numtools_ui::types::{UnknownView, View};
use tracing::warn;

/// Fragment (including `#`) that represents `view`.
pub fn fragment_for(view: View) -> String {
    match view {
        View::Landing => "#/".to_string(),
        view => format!("#/{}", view),
    }
}

/// Parse a fragment as produced by [`fragment_for`]. An empty fragment is
/// the landing page.
pub fn view_from_fragment(fragment: &str) -> Result<View, UnknownView> {
    let id = fragment.trim_start_matches('#').trim_start_matches('/');
    if id.is_empty() {
        return Ok(View::Landing);
    }
    id.parse()
}

/// View named by the current URL fragment, or `None` (logged) if the
/// fragment is unreadable or names no view.
pub fn fragment_view() -> Option<View> {
    let hash = web_sys::window()?.location().hash().ok()?;
    match view_from_fragment(&hash) {
        Ok(view) => Some(view),
        Err(err) => {
            warn!(error = %err, fragment = %hash, "ignoring URL fragment");
            None
        }
    }
}

/// View to show on startup.
pub fn initial_view() -> View {
    fragment_view().unwrap_or_default()
}

/// Mirror `view` into the URL fragment.
pub fn sync_fragment(view: View) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_hash(&fragment_for(view)) {
        warn!(?err, %view, "could not update URL fragment");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_round_trip_every_view() {
        for view in View::ALL {
            assert_eq!(view_from_fragment(&fragment_for(view)), Ok(view));
        }
    }

    #[test]
    fn empty_fragment_is_landing() {
        assert_eq!(view_from_fragment(""), Ok(View::Landing));
        assert_eq!(view_from_fragment("#"), Ok(View::Landing));
        assert_eq!(view_from_fragment("#/"), Ok(View::Landing));
    }

    #[test]
    fn bare_ids_are_accepted() {
        assert_eq!(view_from_fragment("#merge"), Ok(View::Merge));
        assert_eq!(view_from_fragment("#/landing"), Ok(View::Landing));
    }

    #[test]
    fn unknown_fragment_is_an_error() {
        assert_eq!(
            view_from_fragment("#/settings"),
            Err(UnknownView("settings".into()))
        );
    }
}
