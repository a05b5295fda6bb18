//! Static data model for the landing page.
//!
//! The view identifiers and the tool catalog live side by side so the
//! cards and the host application's router can never disagree about
//! which destinations exist:
//!
//! - [`View`] - every view the host application can show
//! - [`ToolDescriptor`] - one navigation card, keyed by a [`View`]
//! - [`TOOLS`] - the fixed catalog, in render order
//!
//! # Example
//!
//! ```rust
//! use numtools_ui::types::{View, TOOLS, tool};
//!
//! assert_eq!(TOOLS.len(), 4);
//! assert_eq!(tool(View::Merge).map(|t| t.name), Some("Merge Files"));
//! assert_eq!("viewer".parse::<View>().ok(), Some(View::Viewer));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A view the host application knows how to display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// The landing page itself.
    #[default]
    Landing,
    /// Manual shuffle tool.
    Shuffle,
    /// CSV table viewer.
    Viewer,
    /// Number shuffler.
    Manual,
    /// CSV merge/split tool.
    Merge,
}

impl View {
    /// All views, landing first.
    pub const ALL: [View; 5] = [
        View::Landing,
        View::Shuffle,
        View::Viewer,
        View::Manual,
        View::Merge,
    ];

    /// Stable identifier used in URLs and serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Shuffle => "shuffle",
            View::Viewer => "viewer",
            View::Manual => "manual",
            View::Merge => "merge",
        }
    }

    /// Whether this view is one of the destination tools.
    pub fn is_tool(self) -> bool {
        self != View::Landing
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name any [`View`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view: {0:?}")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// Icon shown in a tool card's badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolIcon {
    /// Spreadsheet grid
    Table,
    /// Crossing arrows
    Shuffle,
    /// Document with lines
    FileText,
    /// Stacked sheets
    Layers,
}

/// Two-stop horizontal gradient used for a card's icon badge and glow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    /// Left color (CSS color value)
    pub from: &'static str,
    /// Right color (CSS color value)
    pub to: &'static str,
}

impl Gradient {
    /// CSS `linear-gradient` value, left to right.
    pub fn css(&self) -> String {
        format!("linear-gradient(to right, {}, {})", self.from, self.to)
    }
}

const TEAL: &str = "#14b8a6";
const CYAN: &str = "#06b6d4";
const EMERALD: &str = "#10b981";
const AMBER: &str = "#f59e0b";

/// One navigation card on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// View the card navigates to
    pub id: View,
    /// Card title
    pub name: &'static str,
    /// One-line pitch under the title
    pub description: &'static str,
    /// Badge icon
    pub icon: ToolIcon,
    /// Badge and hover gradient
    pub gradient: Gradient,
    /// Entrance animation delay in milliseconds
    pub delay_ms: u32,
}

/// The tool catalog, in render order.
pub static TOOLS: [ToolDescriptor; 4] = [
    ToolDescriptor {
        id: View::Viewer,
        name: "Table Viewer",
        description: "View, manage, and analyze phone numbers from CSV files with advanced features",
        icon: ToolIcon::Table,
        gradient: Gradient { from: TEAL, to: CYAN },
        delay_ms: 100,
    },
    ToolDescriptor {
        id: View::Shuffle,
        name: "Manual Shuffle",
        description: "Manually input and process phone numbers with bulk operations and CSV management",
        icon: ToolIcon::Shuffle,
        gradient: Gradient { from: EMERALD, to: TEAL },
        delay_ms: 0,
    },
    ToolDescriptor {
        id: View::Manual,
        name: "Number Shuffler",
        description: "Generate intelligent variations of phone numbers using advanced algorithms",
        icon: ToolIcon::FileText,
        gradient: Gradient { from: CYAN, to: AMBER },
        delay_ms: 200,
    },
    ToolDescriptor {
        id: View::Merge,
        name: "Merge Files",
        description: "Combine multiple CSV files, remove duplicates, and split into manageable chunks",
        icon: ToolIcon::Layers,
        gradient: Gradient { from: AMBER, to: EMERALD },
        delay_ms: 300,
    },
];

/// Look up the catalog entry for a view. `None` for [`View::Landing`].
pub fn tool(view: View) -> Option<&'static ToolDescriptor> {
    TOOLS.iter().find(|t| t.id == view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn catalog_order_is_declaration_order() {
        let ids: Vec<View> = TOOLS.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![View::Viewer, View::Shuffle, View::Manual, View::Merge]);
    }

    #[test]
    fn catalog_covers_every_tool_view_once() {
        let ids: HashSet<View> = TOOLS.iter().map(|t| t.id).collect();
        let tools: HashSet<View> = View::ALL.into_iter().filter(|v| v.is_tool()).collect();
        assert_eq!(ids.len(), TOOLS.len());
        assert_eq!(ids, tools);
    }

    #[test]
    fn landing_has_no_card() {
        assert!(tool(View::Landing).is_none());
        assert_eq!(tool(View::Shuffle).map(|t| t.name), Some("Manual Shuffle"));
    }

    #[test]
    fn view_parses_its_own_identifier() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
        }
        assert_eq!("Landing".parse::<View>(), Err(UnknownView("Landing".into())));
        assert!("".parse::<View>().is_err());
    }

    #[test]
    fn view_serializes_lowercase() {
        let json = serde_json::to_string(&View::Merge).unwrap();
        assert_eq!(json, "\"merge\"");
        let back: View = serde_json::from_str("\"viewer\"").unwrap();
        assert_eq!(back, View::Viewer);
    }

    #[test]
    fn gradient_css_runs_left_to_right() {
        let g = Gradient { from: "#000", to: "#fff" };
        assert_eq!(g.css(), "linear-gradient(to right, #000, #fff)");
    }
}
