//! Visualization type discriminator
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Selects which renderer consumes a trace
///
/// Unrecognized tags are preserved verbatim in [`VisualizationKind::Other`]
/// and render with the generic array view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisualizationKind {
    Array,
    TwoPointers,
    DpTable,
    Stack,
    SlidingWindow,
    HashMap,
    StockChart,
    Subarray,
    Stairs,
    Other(String),
}

impl VisualizationKind {
    /// Every kind with a dedicated renderer
    pub const KNOWN: [VisualizationKind; 9] = [
        VisualizationKind::Array,
        VisualizationKind::TwoPointers,
        VisualizationKind::DpTable,
        VisualizationKind::Stack,
        VisualizationKind::SlidingWindow,
        VisualizationKind::HashMap,
        VisualizationKind::StockChart,
        VisualizationKind::Subarray,
        VisualizationKind::Stairs,
    ];

    pub fn parse(tag: &str) -> Self {
        match tag {
            "array" => VisualizationKind::Array,
            "two_pointers" => VisualizationKind::TwoPointers,
            "dp_table" => VisualizationKind::DpTable,
            "stack" => VisualizationKind::Stack,
            "sliding_window" => VisualizationKind::SlidingWindow,
            "hash_map" => VisualizationKind::HashMap,
            "stock_chart" => VisualizationKind::StockChart,
            "subarray" => VisualizationKind::Subarray,
            "stairs" => VisualizationKind::Stairs,
            other => VisualizationKind::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VisualizationKind::Array => "array",
            VisualizationKind::TwoPointers => "two_pointers",
            VisualizationKind::DpTable => "dp_table",
            VisualizationKind::Stack => "stack",
            VisualizationKind::SlidingWindow => "sliding_window",
            VisualizationKind::HashMap => "hash_map",
            VisualizationKind::StockChart => "stock_chart",
            VisualizationKind::Subarray => "subarray",
            VisualizationKind::Stairs => "stairs",
            VisualizationKind::Other(tag) => tag,
        }
    }

    /// The kind whose renderer actually applies (unknown tags map to `Array`)
    pub fn effective(&self) -> VisualizationKind {
        match self {
            VisualizationKind::Other(_) => VisualizationKind::Array,
            known => known.clone(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, VisualizationKind::Other(_))
    }

    /// Whether the custom input panel offers a separate target field
    pub fn accepts_target(&self) -> bool {
        matches!(self, VisualizationKind::HashMap | VisualizationKind::TwoPointers)
    }
}

impl From<String> for VisualizationKind {
    fn from(tag: String) -> Self {
        VisualizationKind::parse(&tag)
    }
}

impl From<VisualizationKind> for String {
    fn from(kind: VisualizationKind) -> Self {
        kind.as_str().to_owned()
    }
}

impl Display for VisualizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip_through_str() {
        for kind in VisualizationKind::KNOWN.iter() {
            assert_eq!(&VisualizationKind::parse(kind.as_str()), kind);
            assert!(kind.is_known());
        }
    }

    #[test]
    fn test_unknown_tag_falls_back_to_array() {
        let kind: VisualizationKind = serde_json::from_str("\"graph_bfs\"").unwrap();
        assert_eq!(kind, VisualizationKind::Other("graph_bfs".into()));
        assert_eq!(kind.effective(), VisualizationKind::Array);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"graph_bfs\"");
    }

    #[test]
    fn test_target_field_only_for_lookup_kinds() {
        assert!(VisualizationKind::HashMap.accepts_target());
        assert!(VisualizationKind::TwoPointers.accepts_target());
        assert!(!VisualizationKind::Stairs.accepts_target());
    }
}
