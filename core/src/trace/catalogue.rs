//! Static catalogue of pre-authored visualizations
//!
//! Common problems ship with hand-written traces so they load instantly
//! without a generation round trip. The built-in set is embedded at compile
//! time; additional catalogues with the same JSON shape can be loaded from
//! disk.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};

use super::source::{ProblemVisualization, SourceError, TraceSource};

const BUILTIN_CATALOGUE: &str = include_str!("../../data/catalogue.json");

/// Problem identifier to prebuilt visualization
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    entries: BTreeMap<String, ProblemVisualization>,
}

impl Catalogue {
    /// The catalogue bundled with the crate
    pub fn builtin() -> Result<Self, SourceError> {
        Self::from_json(BUILTIN_CATALOGUE)
    }

    /// Parses a catalogue document (an object keyed by problem id)
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let entries: BTreeMap<String, ProblemVisualization> = serde_json::from_str(json)?;
        info!("Loaded visualization catalogue with {} problems", entries.len());
        Ok(Self { entries })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| SourceError::Upstream(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn get(&self, problem_id: &str) -> Option<&ProblemVisualization> {
        self.entries.get(problem_id)
    }

    pub fn problem_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TraceSource for Catalogue {
    fn load(&self, problem_id: &str) -> Result<ProblemVisualization, SourceError> {
        debug!("Catalogue lookup for '{}'", problem_id);
        self.get(problem_id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(problem_id.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{Annotation, DataValue, VisualizationKind};

    #[test]
    fn test_builtin_catalogue_loads_every_problem() {
        let catalogue = Catalogue::builtin().unwrap();
        let ids: Vec<&str> = catalogue.problem_ids().collect();
        assert_eq!(
            ids,
            vec![
                "best-time-to-buy-and-sell-stock",
                "climbing-stairs",
                "maximum-subarray",
                "two-sum",
                "valid-parentheses",
            ]
        );
    }

    #[test]
    fn test_two_sum_trace_shape() {
        let catalogue = Catalogue::builtin().unwrap();
        let two_sum = catalogue.load("two-sum").unwrap();
        let trace = &two_sum.visualization;
        assert_eq!(trace.kind(), &VisualizationKind::HashMap);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.last_step().info("found"), Some(&Annotation::Text("2+7=9".into())));
        assert_eq!(two_sum.explanation.problem_category, "Hash Map / Two Pointers");
    }

    #[test]
    fn test_stairs_trace_ends_with_eight_ways() {
        let catalogue = Catalogue::builtin().unwrap();
        let stairs = catalogue.load("climbing-stairs").unwrap().visualization;
        assert_eq!(stairs.len(), 6);
        assert_eq!(stairs.last_step().info_number("ways"), Some(8.0));
    }

    #[test]
    fn test_stack_trace_uses_character_data() {
        let catalogue = Catalogue::builtin().unwrap();
        let stack = catalogue.load("valid-parentheses").unwrap().visualization;
        assert_eq!(stack.data().flatten(), vec![DataValue::from(")"), DataValue::from("]")]);
    }

    #[test]
    fn test_unknown_problem_is_not_found() {
        let catalogue = Catalogue::builtin().unwrap();
        let err = catalogue.load("n-queens").unwrap_err();
        assert!(matches!(err, SourceError::NotFound(id) if id == "n-queens"));
    }
}
