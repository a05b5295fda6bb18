//! SVG icon components using Phosphor Icons.
//!
//! Inline SVG icons for the landing page. Paths are drawn on Phosphor's
//! 256x256 grid (Regular weight) so they share one `viewBox`.

use leptos::prelude::*;

use crate::types::ToolIcon;

/// Renders an inline SVG icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_TARGET size="28" class="tile-icon" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    #[prop(into)]
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

impl ToolIcon {
    /// Path data for this tool's badge icon.
    pub fn path(self) -> &'static str {
        match self {
            ToolIcon::Table => ICON_TABLE,
            ToolIcon::Shuffle => ICON_SHUFFLE,
            ToolIcon::FileText => ICON_FILE_TEXT,
            ToolIcon::Layers => ICON_STACK,
        }
    }
}

// =============================================================================
// Phosphor Icons (Regular weight) - https://phosphoricons.com/
// =============================================================================

/// Spreadsheet grid (Table)
pub const ICON_TABLE: &str = "M224,48H32a8,8,0,0,0-8,8V192a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A8,8,0,0,0,224,48ZM40,112H80v32H40Zm56,0H216v32H96ZM216,64V96H40V64ZM40,160H80v32H40Zm176,32H96V160H216v32Z";

/// Crossing arrows (Shuffle)
pub const ICON_SHUFFLE: &str = "M237.66,178.34a8,8,0,0,1,0,11.32l-24,24a8,8,0,0,1-11.32-11.32L212.69,192H200.94a72.12,72.12,0,0,1-58.59-30.15l-41.72-58.4A56.1,56.1,0,0,0,55.06,80H32a8,8,0,0,1,0-16H55.06a72.12,72.12,0,0,1,58.59,30.15l41.72,58.4A56.1,56.1,0,0,0,200.94,176h11.75l-10.35-10.34a8,8,0,0,1,11.32-11.32ZM143,107a8,8,0,0,0,11.16-1.86l1.2-1.67A56.1,56.1,0,0,1,200.94,80h11.75L202.34,90.34a8,8,0,0,0,11.32,11.32l24-24a8,8,0,0,0,0-11.32l-24-24a8,8,0,0,0-11.32,11.32L212.69,64H200.94a72.12,72.12,0,0,0-58.59,30.15l-1.2,1.67A8,8,0,0,0,143,107Zm-30,42a8,8,0,0,0-11.16,1.86l-1.2,1.67A56.1,56.1,0,0,1,55.06,176H32a8,8,0,0,0,0,16H55.06a72.12,72.12,0,0,0,58.59-30.15l1.2-1.67A8,8,0,0,0,113,149Z";

/// Document with text lines (FileText)
pub const ICON_FILE_TEXT: &str = "M213.66,82.34l-56-56A8,8,0,0,0,152,24H56A16,16,0,0,0,40,40V216a16,16,0,0,0,16,16H200a16,16,0,0,0,16-16V88A8,8,0,0,0,213.66,82.34ZM160,51.31,188.69,80H160ZM200,216H56V40h88V88a8,8,0,0,0,8,8h48V216Zm-32-80a8,8,0,0,1-8,8H96a8,8,0,0,1,0-16h64A8,8,0,0,1,168,136Zm0,32a8,8,0,0,1-8,8H96a8,8,0,0,1,0-16h64A8,8,0,0,1,168,168Z";

/// Stacked sheets (Stack)
pub const ICON_STACK: &str = "M230.91,172A8,8,0,0,1,228,182.91l-96,56a8,8,0,0,1-8.06,0l-96-56A8,8,0,0,1,36,169.09l92,53.65,92-53.65A8,8,0,0,1,230.91,172ZM220,121.09l-92,53.65L36,121.09A8,8,0,0,0,28,134.91l96,56a8,8,0,0,0,8.06,0l96-56A8,8,0,1,0,220,121.09ZM24,80a8,8,0,0,1,4-6.91l96-56a8,8,0,0,1,8.06,0l96,56a8,8,0,0,1,0,13.82l-96,56a8,8,0,0,1-8.06,0l-96-56A8,8,0,0,1,24,80Zm23.88,0L128,126.74,208.12,80,128,33.26Z";

/// Arrow pointing right (ArrowRight)
pub const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";

/// Arrow pointing left (ArrowLeft)
pub const ICON_ARROW_LEFT: &str = "M224,128a8,8,0,0,1-8,8H59.31l58.35,58.34a8,8,0,0,1-11.32,11.32l-72-72a8,8,0,0,1,0-11.32l72-72a8,8,0,0,1,11.32,11.32L59.31,120H216A8,8,0,0,1,224,128Z";

/// Four-point sparkle (Sparkle)
pub const ICON_SPARKLE: &str = "M197.58,129.06,146,110l-19-51.62a15.92,15.92,0,0,0-29.88,0L78,110l-51.62,19a15.92,15.92,0,0,0,0,29.88L78,178l19,51.62a15.92,15.92,0,0,0,29.88,0L146,178l51.62-19a15.92,15.92,0,0,0,0-29.88ZM137,164.22a8,8,0,0,0-4.74,4.74L112,223.85,91.78,169A8,8,0,0,0,87,164.22L32.15,144,87,123.78A8,8,0,0,0,91.78,119L112,64.15,132.22,119a8,8,0,0,0,4.74,4.74L191.85,144Z";

/// Ribbon medal (Medal)
pub const ICON_MEDAL: &str = "M216,96A88,88,0,1,0,72,163.83V240a8,8,0,0,0,11.58,7.16L128,225l44.43,22.21A8.07,8.07,0,0,0,176,248a8,8,0,0,0,8-8V163.83A87.85,87.85,0,0,0,216,96ZM56,96a72,72,0,1,1,72,72A72.08,72.08,0,0,1,56,96ZM168,227.06l-36.43-18.21a8,8,0,0,0-7.16,0L88,227.06V174.37a87.89,87.89,0,0,0,80,0ZM128,152a56,56,0,1,0-56-56A56.06,56.06,0,0,0,128,152Zm0-96a40,40,0,1,1-40,40A40,40,0,0,1,128,56Z";

/// Bullseye with arrow (Target)
pub const ICON_TARGET: &str = "M221.87,83.16A104.1,104.1,0,1,1,195.67,49l22.67-22.68a8,8,0,0,1,11.32,11.32l-96,96a8,8,0,0,1-11.32-11.32l27.72-27.72a40,40,0,1,0,17.87,31.09,8,8,0,1,1,16-.9,56,56,0,1,1-22.38-41.65L184.3,60.39a87.88,87.88,0,1,0,23,29.67,8,8,0,0,1,14.54-6.9Z";
