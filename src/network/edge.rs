//! Edge records as supplied by the graph editor
//!
//! The editor stores an edge weight as a free-form label: a number, a string,
//! or nothing at all. Labels are parsed the way an integer-prefix parser does
//! (`"12ms"` is 12) and fractional numbers are truncated (`2.5` is 2). Anything
//! that does not yield a non-negative integer, including booleans, arrays and
//! objects, falls back to [`DEFAULT_WEIGHT`].

use netroute_algorithms::{NodeIndex, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Weight used when an edge has no usable label
pub const DEFAULT_WEIGHT: Weight = 1;

/// Edge weight label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightLabel {
    Number(i64),
    Text(String),
    /// Fractional or beyond the `i64` range
    Float(f64),
    /// Any other JSON value; never a usable weight
    Other(serde_json::Value),
}

impl WeightLabel {
    /// The weight this label denotes, if it denotes one
    pub fn parse_weight(&self) -> Option<Weight> {
        match self {
            WeightLabel::Number(n) => Weight::try_from(*n).ok(),
            WeightLabel::Text(s) => parse_integer_prefix(s),
            WeightLabel::Float(f) => {
                let whole = f.trunc();
                // -0.5 truncates to -0.0, which is a valid zero
                if whole.is_finite() && whole >= 0.0 {
                    Some(whole as Weight)
                } else {
                    None
                }
            }
            WeightLabel::Other(_) => None,
        }
    }
}

impl fmt::Display for WeightLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightLabel::Number(n) => write!(f, "{}", n),
            WeightLabel::Text(s) => f.write_str(s),
            WeightLabel::Float(x) => write!(f, "{}", x),
            WeightLabel::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for WeightLabel {
    fn from(n: i64) -> Self {
        WeightLabel::Number(n)
    }
}

impl From<&str> for WeightLabel {
    fn from(s: &str) -> Self {
        WeightLabel::Text(s.to_string())
    }
}

impl From<String> for WeightLabel {
    fn from(s: String) -> Self {
        WeightLabel::Text(s)
    }
}

/// Leading whitespace, optional sign, then as many decimal digits as present.
/// Negative values are rejected.
fn parse_integer_prefix(s: &str) -> Option<Weight> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let value: Weight = digits.parse().unwrap_or(Weight::MAX);
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

/// An undirected, labelled edge between two editor nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: NodeIndex,
    pub target: NodeIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<WeightLabel>,
}

impl EdgeRecord {
    pub fn new(source: NodeIndex, target: NodeIndex) -> Self {
        EdgeRecord {
            source,
            target,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<WeightLabel>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Weight used for routing, without touching the label
    pub fn weight(&self) -> Weight {
        self.label
            .as_ref()
            .and_then(WeightLabel::parse_weight)
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Weight used for routing. A missing or unusable label is replaced by
    /// the default so later reads of this edge see it.
    pub fn resolve_weight(&mut self) -> Weight {
        if let Some(weight) = self.label.as_ref().and_then(WeightLabel::parse_weight) {
            return weight;
        }

        debug!(
            "Edge ({}, {}): label {:?} unusable, defaulting weight to {}",
            self.source, self.target, self.label, DEFAULT_WEIGHT
        );
        self.label = Some(WeightLabel::Number(DEFAULT_WEIGHT as i64));
        DEFAULT_WEIGHT
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!(WeightLabel::from("7").parse_weight(), Some(7));
        assert_eq!(WeightLabel::from("  +12ms").parse_weight(), Some(12));
        assert_eq!(WeightLabel::from("0").parse_weight(), Some(0));
        assert_eq!(WeightLabel::from("-0").parse_weight(), Some(0));
        assert_eq!(WeightLabel::from("-3").parse_weight(), None);
        assert_eq!(WeightLabel::from("fast").parse_weight(), None);
        assert_eq!(WeightLabel::from("").parse_weight(), None);
        assert_eq!(WeightLabel::from(4i64).parse_weight(), Some(4));
        assert_eq!(WeightLabel::from(-4i64).parse_weight(), None);
    }

    #[test]
    fn test_resolve_weight_writes_default_back() {
        let mut edge = EdgeRecord::new(0, 1);
        assert_eq!(edge.resolve_weight(), 1);
        assert_eq!(edge.label, Some(WeightLabel::Number(1)));

        let mut edge = EdgeRecord::new(0, 1).with_label("n/a");
        assert_eq!(edge.weight(), 1);
        assert_eq!(edge.label, Some(WeightLabel::from("n/a")));
        assert_eq!(edge.resolve_weight(), 1);
        assert_eq!(edge.label, Some(WeightLabel::Number(1)));
    }

    #[test]
    fn test_resolve_weight_keeps_valid_label() {
        let mut edge = EdgeRecord::new(2, 3).with_label("5");
        assert_eq!(edge.resolve_weight(), 5);
        assert_eq!(edge.label, Some(WeightLabel::from("5")));
    }

    #[test]
    fn test_deserialize_mixed_labels() {
        let edges: Vec<EdgeRecord> = serde_json::from_str(
            r#"[{"source":0,"target":1,"label":3},
                {"source":1,"target":2,"label":"4"},
                {"source":2,"target":0}]"#,
        )
        .unwrap();

        assert_eq!(edges[0].weight(), 3);
        assert_eq!(edges[1].weight(), 4);
        assert_eq!(edges[2].label, None);
    }

    #[test]
    fn test_deserialize_odd_labels() {
        let mut edges: Vec<EdgeRecord> = serde_json::from_str(
            r#"[{"source":0,"target":1,"label":2.5},
                {"source":1,"target":2,"label":true},
                {"source":2,"target":3,"label":18446744073709551615},
                {"source":3,"target":4,"label":-0.5},
                {"source":4,"target":5,"label":-2.5},
                {"source":5,"target":6,"label":[1, 2]}]"#,
        )
        .unwrap();

        assert_eq!(edges[0].label, Some(WeightLabel::Float(2.5)));
        assert_eq!(edges[0].weight(), 2);
        assert_eq!(edges[1].weight(), DEFAULT_WEIGHT);
        assert!(edges[2].label.as_ref().and_then(WeightLabel::parse_weight).is_some());
        assert_eq!(edges[3].weight(), 0);
        assert_eq!(edges[4].weight(), DEFAULT_WEIGHT);
        assert_eq!(edges[5].weight(), DEFAULT_WEIGHT);

        assert_eq!(edges[1].resolve_weight(), DEFAULT_WEIGHT);
        assert_eq!(edges[1].label, Some(WeightLabel::Number(1)));
        assert_eq!(edges[0].resolve_weight(), 2);
        assert_eq!(edges[0].label, Some(WeightLabel::Float(2.5)));
    }
}
