//! Navigation cards for the four tools

use leptos::prelude::*;

use super::{ICON_ARROW_RIGHT, Icon};
use crate::types::{TOOLS, ToolDescriptor, View};

/// Grid of every tool in [`TOOLS`], in catalog order.
#[component]
pub fn ToolGrid(
    /// Receives the tool's view when its card is clicked
    on_navigate: Callback<View>,
) -> impl IntoView {
    view! {
        <div class="tool-grid">
            {TOOLS
                .iter()
                .map(|tool| view! { <ToolCard tool=tool on_navigate=on_navigate /> })
                .collect_view()}
        </div>
    }
}

/// A single clickable tool card.
#[component]
pub fn ToolCard(
    /// Catalog entry to render
    tool: &'static ToolDescriptor,
    /// Receives `tool.id` on click
    on_navigate: Callback<View>,
) -> impl IntoView {
    let gradient = tool.gradient.css();

    view! {
        <button
            class="tool-card"
            data-view=tool.id.as_str()
            style=format!("animation-delay: {}ms", tool.delay_ms)
            on:click=move |_| activate(tool, &on_navigate)
        >
            <div class="tool-card-glow" style=format!("background-image: {}", gradient)></div>
            <div class="tool-card-body">
                <div class="tool-card-top">
                    <div class="tool-badge" style=format!("background-image: {}", gradient)>
                        <Icon path=tool.icon.path() />
                    </div>
                    <Icon path=ICON_ARROW_RIGHT size="20" class="tool-arrow" />
                </div>
                <h2 class="tool-name">{tool.name}</h2>
                <p class="tool-description">{tool.description}</p>
                <div class="tool-card-underline" style=format!("background-image: {}", gradient)></div>
            </div>
        </button>
    }
}

/// Hand a card activation to the host. The card's own id is the only value
/// ever passed.
pub(crate) fn activate(tool: &ToolDescriptor, on_navigate: &Callback<View>) {
    on_navigate.run(tool.id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[test]
    fn each_card_navigates_to_its_own_view() {
        let owner = Owner::new();
        owner.with(|| {
            let seen = Arc::new(Mutex::new(Vec::new()));
            let on_navigate = Callback::new({
                let seen = Arc::clone(&seen);
                move |view: View| seen.lock().unwrap().push(view)
            });

            for tool in &TOOLS {
                seen.lock().unwrap().clear();
                activate(tool, &on_navigate);
                assert_eq!(*seen.lock().unwrap(), vec![tool.id]);
            }
        });
    }

    #[test]
    fn cards_never_emit_landing() {
        let owner = Owner::new();
        owner.with(|| {
            let seen = Arc::new(Mutex::new(Vec::new()));
            let on_navigate = Callback::new({
                let seen = Arc::clone(&seen);
                move |view: View| seen.lock().unwrap().push(view)
            });

            TOOLS.iter().for_each(|tool| activate(tool, &on_navigate));
            let seen = seen.lock().unwrap();
            assert_eq!(seen.len(), TOOLS.len());
            assert!(seen.iter().all(|view| view.is_tool()));
        });
    }
}
