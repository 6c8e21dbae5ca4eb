//! Custom input adapter
//!
//! Turns the free text a learner types ("2, 7, 11, 15" plus an optional
//! target) into a numeric dataset for the playback controller. The recorded
//! steps are never touched: the new values are replayed at the same indices.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;
use serde::{Deserialize, Serialize};

use crate::playback::{PlaybackController, TimerBackend};
use crate::trace::VisualizationKind;

/// Auxiliary parameters entered next to the dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
}

impl ExtraParams {
    pub fn is_empty(&self) -> bool {
        self.target.is_none()
    }
}

/// A parsed, non-empty custom dataset
#[derive(Debug, Clone, PartialEq)]
pub struct CustomInput {
    pub values: Vec<f64>,
    pub extra: ExtraParams,
}

/// Parses a comma-separated list, tolerating surrounding brackets
///
/// Tokens that are blank or not numeric are dropped; the result may be empty.
pub fn parse_values(text: &str) -> Vec<f64> {
    text.chars()
        .filter(|c| *c != '[' && *c != ']')
        .collect::<String>()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(parse_number)
        .collect()
}

/// Parses the separate target field; blank or non-numeric text yields `None`
pub fn parse_target(text: &str) -> Option<f64> {
    parse_number(text.trim())
}

fn parse_number(token: &str) -> Option<f64> {
    if token.is_empty() {
        return None;
    }
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Example text shown in an empty input field
pub fn placeholder(kind: &VisualizationKind) -> &'static str {
    match kind.effective() {
        VisualizationKind::HashMap => "e.g., 2, 7, 11, 15",
        VisualizationKind::StockChart => "e.g., 7, 1, 5, 3, 6, 4",
        VisualizationKind::Subarray => "e.g., -2, 1, -3, 4, -1, 2, 1",
        VisualizationKind::Stairs => "e.g., 5 (number of stairs)",
        VisualizationKind::Stack => "e.g., (, [, ], )",
        _ => "e.g., 1, 2, 3, 4, 5",
    }
}

/// State of the "try your own input" panel
///
/// The adapter is type-agnostic about values; the visualization type only
/// decides whether the target field is offered and which placeholder shows.
#[derive(Debug, Clone)]
pub struct CustomInputAdapter {
    kind: VisualizationKind,
    values_text: String,
    target_text: String,
}

impl CustomInputAdapter {
    pub fn new(kind: VisualizationKind) -> Self {
        Self {
            kind,
            values_text: String::new(),
            target_text: String::new(),
        }
    }

    pub fn kind(&self) -> &VisualizationKind {
        &self.kind
    }

    pub fn values_text(&self) -> &str {
        &self.values_text
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn set_values_text(&mut self, text: impl Into<String>) {
        self.values_text = text.into();
    }

    pub fn set_target_text(&mut self, text: impl Into<String>) {
        self.target_text = text.into();
    }

    pub fn shows_target(&self) -> bool {
        self.kind.accepts_target()
    }

    pub fn placeholder(&self) -> &'static str {
        placeholder(&self.kind)
    }

    /// Whether the apply action is enabled
    pub fn can_apply(&self) -> bool {
        !self.values_text.trim().is_empty()
    }

    /// Parses both fields; `None` means "refuse to apply"
    pub fn submit(&self) -> Option<CustomInput> {
        let values = parse_values(&self.values_text);
        if values.is_empty() {
            debug!("Ignoring custom input with no numeric values: {:?}", self.values_text);
            return None;
        }
        let extra = ExtraParams {
            target: parse_target(&self.target_text),
        };
        Some(CustomInput { values, extra })
    }

    /// Hands a parsed dataset to the controller; returns whether it applied
    pub fn apply<B: TimerBackend>(&self, controller: &mut PlaybackController<B>) -> bool {
        match self.submit() {
            Some(input) => {
                controller.set_custom_data(input.values, input.extra);
                true
            }
            None => false,
        }
    }

    /// Clears both fields and restores the trace's own dataset
    pub fn reset<B: TimerBackend>(&mut self, controller: &mut PlaybackController<B>) {
        self.values_text.clear();
        self.target_text.clear();
        controller.restore_default_data();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::playback::ManualTimer;
    use crate::trace::{Step, TraceData, VisualizationTrace};

    fn controller() -> PlaybackController<ManualTimer> {
        let trace = VisualizationTrace::new(
            VisualizationKind::HashMap,
            TraceData::numbers(&[2.0, 7.0, 11.0, 15.0]),
            vec![Step::new("a"), Step::new("b"), Step::new("c")],
        )
        .unwrap();
        PlaybackController::new(Arc::new(trace), ManualTimer::new())
    }

    #[test]
    fn test_parse_plain_list() {
        assert_eq!(parse_values("2, 7, 11, 15"), vec![2.0, 7.0, 11.0, 15.0]);
    }

    #[test]
    fn test_parse_bracketed_negative_list() {
        assert_eq!(parse_values("[ -2, 1, -3 ]"), vec![-2.0, 1.0, -3.0]);
    }

    #[test]
    fn test_parse_discards_junk_tokens() {
        assert_eq!(parse_values("abc, 3, ,"), vec![3.0]);
        assert_eq!(parse_values("1.5,NaN,inf, 4"), vec![1.5, 4.0]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_values("").is_empty());
        assert!(parse_values("[ ]").is_empty());
    }

    #[test]
    fn test_target_parsing() {
        assert_eq!(parse_target(" 9 "), Some(9.0));
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("   "), None);
        assert_eq!(parse_target("nine"), None);
    }

    #[test]
    fn test_empty_input_refuses_to_apply() {
        let mut controller = controller();
        controller.seek(2);
        let adapter = CustomInputAdapter::new(VisualizationKind::HashMap);
        assert!(!adapter.can_apply());
        assert!(!adapter.apply(&mut controller));
        assert_eq!(controller.current_step_index(), 2);
        assert!(!controller.has_custom_data());
    }

    #[test]
    fn test_apply_swaps_data_and_passes_target() {
        let mut controller = controller();
        let mut adapter = CustomInputAdapter::new(VisualizationKind::HashMap);
        adapter.set_values_text("[3, 3]");
        adapter.set_target_text("6");
        assert!(adapter.apply(&mut controller));
        assert_eq!(controller.active_data(), &TraceData::numbers(&[3.0, 3.0]));
        assert_eq!(controller.extra_params().target, Some(6.0));
    }

    #[test]
    fn test_reset_clears_fields_and_restores_default() {
        let mut controller = controller();
        let mut adapter = CustomInputAdapter::new(VisualizationKind::TwoPointers);
        adapter.set_values_text("1,2");
        adapter.set_target_text("3");
        adapter.apply(&mut controller);
        adapter.reset(&mut controller);
        assert_eq!(adapter.values_text(), "");
        assert_eq!(adapter.target_text(), "");
        assert!(!controller.has_custom_data());
        assert_eq!(controller.active_data(), &TraceData::numbers(&[2.0, 7.0, 11.0, 15.0]));
    }

    #[test]
    fn test_placeholder_and_target_visibility() {
        let stairs = CustomInputAdapter::new(VisualizationKind::Stairs);
        assert_eq!(stairs.placeholder(), "e.g., 5 (number of stairs)");
        assert!(!stairs.shows_target());
        let unknown = CustomInputAdapter::new(VisualizationKind::Other("graph".into()));
        assert_eq!(unknown.placeholder(), "e.g., 1, 2, 3, 4, 5");
    }
}
