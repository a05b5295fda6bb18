//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument (static rendering only)
//! └── LandingPage
//!     ├── StatTile: Total Activations
//!     ├── StatTile: Remaining Target
//!     ├── LandingHeader
//!     ├── ToolGrid
//!     │   └── ToolCard (one per entry in TOOLS)
//!     └── LandingFooter
//! ```
//!
//! # Usage
//!
//! In a client-side app, mount [`LandingPage`] and handle navigation:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use numtools_ui::components::LandingPage;
//! use numtools_ui::types::View;
//!
//! let (view, set_view) = signal(View::Landing);
//! view! { <LandingPage on_navigate=move |v: View| set_view.set(v) /> }
//! ```

mod document;
mod icons;
mod landing;
mod stat_tile;
mod tool_card;

pub use document::LandingDocument;
pub use icons::*;
pub use landing::LandingPage;
pub use stat_tile::StatTile;
pub use tool_card::{ToolCard, ToolGrid};
