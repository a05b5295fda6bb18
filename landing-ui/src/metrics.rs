//! Agent rows and the two landing-page counters derived from them.
//!
//! The remote endpoint is a spreadsheet export: one JSON object per agent,
//! keyed by column header. Cells arrive as numbers, numeric strings, blanks,
//! or junk, so every field goes through [`parse_agent_row`], which never
//! fails and falls back to a per-field default:
//!
//! | column     | default |
//! |------------|---------|
//! | `Silver`   | 0       |
//! | `Gold`     | 0       |
//! | `Platinum` | 0       |
//! | `Standard` | 0       |
//! | `Target`   | 10      |
//!
//! # Example
//!
//! ```rust
//! use numtools_ui::metrics::MetricsState;
//!
//! let body = r#"[
//!     {"Silver": 2, "Gold": 1, "Platinum": 0, "Standard": 0, "Target": 5},
//!     {"Silver": 0, "Gold": 0, "Platinum": 0, "Standard": 3, "Target": 5}
//! ]"#;
//! let state = MetricsState::from_json(body).unwrap();
//! assert_eq!(state.total_activations, 6);
//! assert_eq!(state.remaining_target, 4);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MetricsError, Result};

/// Target assumed for an agent whose `Target` cell is blank or unreadable.
pub const DEFAULT_TARGET: u64 = 10;

const SILVER: &str = "Silver";
const GOLD: &str = "Gold";
const PLATINUM: &str = "Platinum";
const STANDARD: &str = "Standard";
const TARGET: &str = "Target";

/// One agent's activations by tier plus their target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Silver tier activations
    pub silver: u64,
    /// Gold tier activations
    pub gold: u64,
    /// Platinum tier activations
    pub platinum: u64,
    /// Standard tier activations
    pub standard: u64,
    /// Activation target for this agent
    pub target: u64,
}

impl Default for AgentRecord {
    fn default() -> Self {
        Self {
            silver: 0,
            gold: 0,
            platinum: 0,
            standard: 0,
            target: DEFAULT_TARGET,
        }
    }
}

impl AgentRecord {
    /// Activations across all four tiers.
    pub fn activations(&self) -> u64 {
        self.silver
            .saturating_add(self.gold)
            .saturating_add(self.platinum)
            .saturating_add(self.standard)
    }
}

/// Build an [`AgentRecord`] from one raw row.
///
/// Missing, blank, zero, negative or non-numeric cells take the column
/// default. Fractions are truncated. This is stricter than a JavaScript
/// `Number(cell) || default` read, which keeps negatives and fractions;
/// counts and targets here are non-negative integers.
///
/// A row that is not a JSON object has no cells at all, so it yields
/// [`AgentRecord::default`]. [`parse_payload`] rejects `null` rows before
/// they get here.
pub fn parse_agent_row(row: &Value) -> AgentRecord {
    let Some(cells) = row.as_object() else {
        return AgentRecord::default();
    };
    let field = |key: &str, default: u64| cells.get(key).and_then(positive_count).unwrap_or(default);

    AgentRecord {
        silver: field(SILVER, 0),
        gold: field(GOLD, 0),
        platinum: field(PLATINUM, 0),
        standard: field(STANDARD, 0),
        target: field(TARGET, DEFAULT_TARGET),
    }
}

/// Parse a response body into agent records.
///
/// The body must be a JSON array; its elements go through
/// [`parse_agent_row`]. A `null` element fails the whole payload.
pub fn parse_payload(body: &str) -> Result<Vec<AgentRecord>> {
    let value: Value = serde_json::from_str(body)?;
    let rows = match value {
        Value::Array(rows) => rows,
        other => return Err(MetricsError::NotAnArray(json_kind(&other))),
    };

    rows.iter()
        .enumerate()
        .map(|(index, row)| match row {
            Value::Null => Err(MetricsError::NullRow(index)),
            row => Ok(parse_agent_row(row)),
        })
        .collect()
}

/// Counters shown in the two summary tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsState {
    /// Sum of all tier counts over every agent.
    pub total_activations: u64,
    /// Sum of all targets minus `total_activations`. Negative once the team
    /// overshoots its combined target.
    pub remaining_target: i64,
}

impl MetricsState {
    /// Reduce agent records into the two counters.
    pub fn from_records(records: &[AgentRecord]) -> Self {
        let total_activations = records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.activations()));
        let total_target = records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.target));

        Self {
            total_activations,
            remaining_target: saturating_i64(total_target) - saturating_i64(total_activations),
        }
    }

    /// Parse a response body and reduce it in one go.
    pub fn from_json(body: &str) -> Result<Self> {
        parse_payload(body).map(|records| Self::from_records(&records))
    }
}

fn saturating_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Accept a cell only when it coerces to a finite, strictly positive number.
fn positive_count(cell: &Value) -> Option<u64> {
    let n = coerce_number(cell)?;
    if n.is_finite() && n > 0.0 {
        // `as` saturates at u64::MAX for huge values
        Some(n.trunc() as u64)
    } else {
        None
    }
}

/// Loose numeric reading of a spreadsheet cell.
///
/// Numbers pass through, booleans are 0/1, null and blank strings are 0,
/// strings are parsed after trimming (with `0x`/`0o`/`0b` integer prefixes).
/// Arrays, objects and unparseable strings have no numeric value.
fn coerce_number(cell: &Value) -> Option<f64> {
    match cell {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_numeric_str(s),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_numeric_str(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64);
    }

    // Rust also accepts "inf"/"nan" spellings; those are rejected as non-finite later.
    s.parse::<f64>().ok()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(silver: u64, gold: u64, platinum: u64, standard: u64, target: u64) -> AgentRecord {
        AgentRecord {
            silver,
            gold,
            platinum,
            standard,
            target,
        }
    }

    #[test]
    fn parses_well_formed_row() {
        let row = json!({"Silver": 2, "Gold": 1, "Platinum": 4, "Standard": 3, "Target": 20});
        assert_eq!(parse_agent_row(&row), record(2, 1, 4, 3, 20));
    }

    #[test]
    fn missing_target_defaults_to_ten() {
        let row = json!({"Silver": 1});
        assert_eq!(parse_agent_row(&row), record(1, 0, 0, 0, 10));
    }

    #[test]
    fn zero_target_is_treated_as_unset() {
        let row = json!({"Target": 0});
        assert_eq!(parse_agent_row(&row).target, DEFAULT_TARGET);
    }

    #[test]
    fn non_numeric_cells_fall_back_to_defaults() {
        let row = json!({
            "Silver": "lots",
            "Gold": [1, 2],
            "Platinum": {"n": 3},
            "Standard": "",
            "Target": "n/a"
        });
        assert_eq!(parse_agent_row(&row), record(0, 0, 0, 0, 10));
    }

    #[test]
    fn numeric_strings_are_read() {
        let row = json!({
            "Silver": " 7 ",
            "Gold": "2.9",
            "Platinum": "0x10",
            "Standard": "1e2",
            "Target": "250"
        });
        assert_eq!(parse_agent_row(&row), record(7, 2, 16, 100, 250));
    }

    #[test]
    fn booleans_nulls_and_negatives() {
        let row = json!({
            "Silver": true,
            "Gold": false,
            "Platinum": null,
            "Standard": -4,
            "Target": -1
        });
        assert_eq!(parse_agent_row(&row), record(1, 0, 0, 0, 10));
    }

    #[test]
    fn non_finite_strings_are_rejected() {
        let row = json!({"Silver": "Infinity", "Target": "NaN"});
        assert_eq!(parse_agent_row(&row), record(0, 0, 0, 0, 10));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let row = json!({"silver": 5, "TARGET": 50});
        assert_eq!(parse_agent_row(&row), AgentRecord::default());
    }

    #[test]
    fn non_object_row_is_an_empty_record() {
        assert_eq!(parse_agent_row(&json!(42)), AgentRecord::default());
        assert_eq!(parse_agent_row(&json!(null)), AgentRecord::default());
        assert_eq!(parse_agent_row(&json!("row")), AgentRecord::default());
    }

    #[test]
    fn reduces_example_rows() {
        let state = MetricsState::from_json(
            r#"[
                {"Silver": 2, "Gold": 1, "Platinum": 0, "Standard": 0, "Target": 5},
                {"Silver": 0, "Gold": 0, "Platinum": 0, "Standard": 3, "Target": 5}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            state,
            MetricsState {
                total_activations: 6,
                remaining_target: 4,
            }
        );
    }

    #[test]
    fn empty_array_is_zero() {
        assert_eq!(MetricsState::from_json("[]").unwrap(), MetricsState::default());
    }

    #[test]
    fn remaining_goes_negative_past_target() {
        let state = MetricsState::from_records(&[record(8, 4, 0, 0, 10)]);
        assert_eq!(state.total_activations, 12);
        assert_eq!(state.remaining_target, -2);
    }

    #[test]
    fn rows_without_target_add_ten_each() {
        let state = MetricsState::from_json(r#"[{}, {"Gold": 3}, {"Target": "x"}]"#).unwrap();
        assert_eq!(state.total_activations, 3);
        assert_eq!(state.remaining_target, 27);
    }

    #[test]
    fn sums_match_per_record_totals() {
        let records = vec![
            record(1, 2, 3, 4, 15),
            record(0, 0, 0, 0, 10),
            record(5, 0, 5, 0, 8),
        ];
        let state = MetricsState::from_records(&records);
        let activations: u64 = records.iter().map(AgentRecord::activations).sum();
        let targets: u64 = records.iter().map(|r| r.target).sum();
        assert_eq!(state.total_activations, activations);
        assert_eq!(state.remaining_target, targets as i64 - activations as i64);
    }

    #[test]
    fn payload_must_be_an_array() {
        let err = parse_payload(r#"{"Silver": 1}"#).unwrap_err();
        assert!(matches!(err, MetricsError::NotAnArray("an object")));
        assert_eq!(err.to_string(), "expected a JSON array of rows, got an object");
    }

    #[test]
    fn null_row_fails_the_payload() {
        let err = parse_payload(r#"[{"Silver": 2, "Target": 5}, null]"#).unwrap_err();
        assert!(matches!(err, MetricsError::NullRow(1)));
        assert!(MetricsState::from_json("[null]").is_err());
    }

    #[test]
    fn scalar_rows_are_still_empty_records() {
        let records = parse_payload(r#"[7, "agent", true]"#).unwrap();
        assert_eq!(records, vec![AgentRecord::default(); 3]);
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err = parse_payload("<html>oops</html>").unwrap_err();
        assert!(matches!(err, MetricsError::Decode(_)));
    }
}
