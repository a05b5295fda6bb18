use leptos::prelude::*;
use numtools_ui::components::{ICON_ARROW_LEFT, Icon};
use numtools_ui::types::{View, tool};

/// Frame around a destination tool: back button, title, and the slot the
/// tool mounts into.
#[component]
pub fn ToolFrame(view: View, on_navigate: Callback<View>) -> impl IntoView {
    let (name, description) = tool(view)
        .map(|t| (t.name, t.description))
        .unwrap_or((view.as_str(), ""));

    view! {
        <section class="tool-frame fade-in" data-view=view.as_str()>
            <button class="back-button" on:click=move |_| on_navigate.run(View::Landing)>
                <Icon path=ICON_ARROW_LEFT size="16" />
                "Back to tools"
            </button>
            <h1 class="tool-frame-title">{name}</h1>
            <p class="tool-frame-description">{description}</p>
            <div class="tool-slot" id=format!("tool-{}", view)></div>
        </section>
    }
}
