//! Completion overlay
//!
//! Once playback rests on the terminal step the learner gets a summary with
//! the algorithm's result and a replay action. Which annotation holds "the
//! result" depends on the visualization type, so the lookup goes through a
//! per-type table rather than a hard-coded chain of keys.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::playback::{PlaybackController, TimerBackend};
use crate::trace::{Step, VisualizationKind};

/// Per-type primary result key with a generic fallback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultKeys {
    /// Key consulted when the type has no override or its key is absent
    pub fallback: String,

    /// Visualization type tag to primary key
    pub overrides: BTreeMap<String, String>,
}

impl Default for ResultKeys {
    fn default() -> Self {
        let overrides = [("stairs", "ways"), ("hash_map", "found")]
            .into_iter()
            .map(|(kind, key)| (kind.to_owned(), key.to_owned()))
            .collect();
        Self {
            fallback: "result".to_owned(),
            overrides,
        }
    }
}

impl ResultKeys {
    pub fn primary_key(&self, kind: &VisualizationKind) -> &str {
        self.overrides
            .get(kind.as_str())
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn set_primary_key(&mut self, kind: &VisualizationKind, key: impl Into<String>) {
        self.overrides.insert(kind.as_str().to_owned(), key.into());
    }

    /// Result text from a terminal step, if any
    pub fn extract(&self, kind: &VisualizationKind, step: &Step) -> Option<String> {
        let render = |key: &str| {
            step.info(key)
                .map(ToString::to_string)
                .filter(|text| !text.is_empty() && text != "false")
        };
        render(self.primary_key(kind)).or_else(|| render(&self.fallback))
    }
}

/// Summary shown over the view when playback has finished
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionOverlay {
    pub headline: &'static str,
    pub result: Option<String>,
    pub complexity: Option<String>,
    pub replay_label: &'static str,
}

impl CompletionOverlay {
    /// Derives the overlay from controller state; `None` unless completed
    pub fn derive<B: TimerBackend>(
        controller: &PlaybackController<B>,
        keys: &ResultKeys,
        complexity: Option<&str>,
    ) -> Option<Self> {
        if !controller.is_completed() {
            return None;
        }
        let trace = controller.trace();
        Some(Self {
            headline: "Algorithm Complete!",
            result: keys.extract(trace.kind(), trace.last_step()),
            complexity: complexity.map(str::to_owned),
            replay_label: "Watch Again",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::playback::ManualTimer;
    use crate::trace::catalogue::Catalogue;
    use crate::trace::source::TraceSource;

    fn controller_for(problem: &str) -> PlaybackController<ManualTimer> {
        let catalogue = Catalogue::builtin().unwrap();
        let trace = catalogue.load(problem).unwrap().visualization;
        PlaybackController::new(Arc::new(trace), ManualTimer::new())
    }

    #[test]
    fn test_no_overlay_before_terminal_step() {
        let controller = controller_for("two-sum");
        assert!(CompletionOverlay::derive(&controller, &ResultKeys::default(), None).is_none());
    }

    #[test]
    fn test_hash_map_uses_found_key() {
        let mut controller = controller_for("two-sum");
        controller.seek(2);
        let overlay = CompletionOverlay::derive(&controller, &ResultKeys::default(), None).unwrap();
        assert_eq!(overlay.result.as_deref(), Some("2+7=9"));
    }

    #[test]
    fn test_stairs_uses_ways_key() {
        let mut controller = controller_for("climbing-stairs");
        controller.seek(99);
        let overlay = CompletionOverlay::derive(&controller, &ResultKeys::default(), Some("O(n)")).unwrap();
        assert_eq!(overlay.result.as_deref(), Some("8"));
        assert_eq!(overlay.complexity.as_deref(), Some("O(n)"));
    }

    #[test]
    fn test_generic_types_use_result_key() {
        let mut controller = controller_for("best-time-to-buy-and-sell-stock");
        controller.seek(i64::MAX);
        let overlay = CompletionOverlay::derive(&controller, &ResultKeys::default(), None).unwrap();
        assert_eq!(overlay.result.as_deref(), Some("Buy@$1, Sell@$6"));
    }

    #[test]
    fn test_configured_key_overrides_default() {
        let mut keys = ResultKeys::default();
        keys.set_primary_key(&VisualizationKind::StockChart, "maxProfit");
        let mut controller = controller_for("best-time-to-buy-and-sell-stock");
        controller.seek(7);
        let overlay = CompletionOverlay::derive(&controller, &keys, None).unwrap();
        assert_eq!(overlay.result.as_deref(), Some("5"));
    }

    #[test]
    fn test_missing_result_leaves_overlay_without_result() {
        let step = Step::new("done").with_info("other", 1i64);
        assert_eq!(ResultKeys::default().extract(&VisualizationKind::Array, &step), None);
    }
}
