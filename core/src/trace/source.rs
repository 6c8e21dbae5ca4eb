//! Trace sources
//!
//! The playback core never fetches or generates traces itself. It is handed a
//! [`ProblemVisualization`] by a [`TraceSource`]: either the static catalogue
//! (instant, no network) or a caller that already received a response from
//! the external generation service and parses it here.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::VisualizationTrace;

/// Errors obtaining a trace
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("No visualization available for problem '{0}'")]
    NotFound(String),

    #[error("Malformed visualization payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Visualization generation failed: {0}")]
    Upstream(String),
}

/// One worked example supplied with a problem statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemExample {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Request shape understood by the external generation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemInput {
    pub problem_title: String,
    pub problem_statement: String,
    #[serde(default)]
    pub examples: Vec<ProblemExample>,
    #[serde(default)]
    pub constraints: String,
}

impl ProblemInput {
    /// A request is worth sending only with a title and a statement
    pub fn is_complete(&self) -> bool {
        !self.problem_title.trim().is_empty() && !self.problem_statement.trim().is_empty()
    }

    /// Reads the free-form examples field: a JSON array if it parses as one,
    /// otherwise a single example whose input is the raw text
    pub fn parse_examples(text: &str) -> Vec<ProblemExample> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        serde_json::from_str(text).unwrap_or_else(|_| {
            vec![ProblemExample {
                input: text.to_owned(),
                output: String::new(),
                explanation: None,
            }]
        })
    }
}

/// Explanation text shipped alongside a trace
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    #[serde(default)]
    pub problem_category: String,
    #[serde(default)]
    pub simple_explanation: String,
    #[serde(default)]
    pub core_idea: String,
    #[serde(default)]
    pub step_by_step_walkthrough: Vec<String>,
    #[serde(default)]
    pub pseudo_code: String,
}

/// A validated trace plus its explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemVisualization {
    #[serde(flatten)]
    pub explanation: Explanation,
    pub visualization: VisualizationTrace,
}

/// Anything that can hand the core a complete visualization
pub trait TraceSource {
    /// Looks up the visualization for a problem identifier
    ///
    /// # Errors
    /// Returns [`SourceError`] if no complete, valid trace can be produced.
    fn load(&self, problem_id: &str) -> Result<ProblemVisualization, SourceError>;
}

/// Parses an already-extracted generation-service body
///
/// Partial traces are never produced: any schema or validation failure
/// (including an empty step list) is an error.
pub fn parse_generation_response(body: &str) -> Result<ProblemVisualization, SourceError> {
    let parsed: ProblemVisualization = serde_json::from_str(body)?;
    info!(
        "Parsed generated visualization: type={}, steps={}",
        parsed.visualization.kind(),
        parsed.visualization.len()
    );
    Ok(parsed)
}

/// Parses a document holding either a full problem payload or a bare trace
///
/// A body with a top-level `visualization` key is always treated as a
/// payload, so its validation error is reported as is.
pub fn parse_trace_document(body: &str) -> Result<(VisualizationTrace, Option<Explanation>), SourceError> {
    match parse_generation_response(body) {
        Ok(problem) => Ok((problem.visualization, Some(problem.explanation))),
        Err(err) => {
            let is_payload = serde_json::from_str::<serde_json::Value>(body)
                .map(|value| value.get("visualization").is_some())
                .unwrap_or(false);
            if is_payload {
                return Err(err);
            }
            debug!("Not a problem payload ({}); reading as a bare trace", err);
            let trace = serde_json::from_str(body)?;
            Ok((trace, None))
        }
    }
}

/// Converts an upstream failure into the one-line message shown to the user
pub fn failure_notice(error: &SourceError) -> String {
    debug!("Trace source failure: {:?}", error);
    match error {
        SourceError::NotFound(_) => error.to_string(),
        _ => "Failed to generate visualization. Please try again.".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::VisualizationKind;

    const GENERATED: &str = r#"{
        "problemCategory": "Array",
        "simpleExplanation": "Walk the list once.",
        "coreIdea": "Track the running maximum.",
        "stepByStepWalkthrough": ["Start", "Scan"],
        "pseudoCode": "for x in xs: best = max(best, x)",
        "visualization": {
            "type": "array",
            "data": [3, 1, 4],
            "steps": [
                {"description": "Start", "highlight": []},
                {"description": "Scan", "highlight": [2], "extraInfo": {"best": 4}}
            ]
        }
    }"#;

    #[test]
    fn test_parse_generation_response() {
        let parsed = parse_generation_response(GENERATED).unwrap();
        assert_eq!(parsed.explanation.problem_category, "Array");
        assert_eq!(parsed.explanation.step_by_step_walkthrough.len(), 2);
        assert_eq!(parsed.visualization.kind(), &VisualizationKind::Array);
        assert_eq!(parsed.visualization.len(), 2);
    }

    #[test]
    fn test_generation_response_with_no_steps_is_rejected() {
        let body = r#"{"problemCategory": "x", "visualization": {"type": "array", "data": [], "steps": []}}"#;
        let err = parse_generation_response(body).unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
        assert_eq!(failure_notice(&err), "Failed to generate visualization. Please try again.");
    }

    #[test]
    fn test_trace_document_accepts_payload_and_bare_trace() {
        let (trace, explanation) = parse_trace_document(GENERATED).unwrap();
        assert_eq!(trace.len(), 2);
        assert_eq!(explanation.unwrap().core_idea, "Track the running maximum.");

        let bare = r#"{"type": "stack", "data": [1, 2], "steps": [{"description": "push"}]}"#;
        let (trace, explanation) = parse_trace_document(bare).unwrap();
        assert_eq!(trace.kind(), &VisualizationKind::Stack);
        assert!(explanation.is_none());
    }

    #[test]
    fn test_invalid_payload_keeps_its_own_error() {
        let body = r#"{"problemCategory": "x", "visualization": {"type": "array", "data": [1], "steps": []}}"#;
        let message = parse_trace_document(body).unwrap_err().to_string();
        assert!(!message.contains("missing field `type`"), "{}", message);
        let payload_message = parse_generation_response(body).unwrap_err().to_string();
        assert_eq!(message, payload_message);
    }

    #[test]
    fn test_not_found_notice_names_the_problem() {
        let notice = failure_notice(&SourceError::NotFound("three-sum".into()));
        assert_eq!(notice, "No visualization available for problem 'three-sum'");
        let notice = failure_notice(&SourceError::Upstream("timeout".into()));
        assert_eq!(notice, "Failed to generate visualization. Please try again.");
    }

    #[test]
    fn test_truncated_payload_is_rejected() {
        let truncated = &GENERATED[..GENERATED.len() / 2];
        assert!(parse_generation_response(truncated).is_err());
    }

    #[test]
    fn test_examples_field_falls_back_to_raw_text() {
        let examples = ProblemInput::parse_examples("nums = [2,7], target = 9");
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].input, "nums = [2,7], target = 9");

        let json = ProblemInput::parse_examples(r#"[{"input": "[1]", "output": "1"}]"#);
        assert_eq!(json[0].output, "1");
        assert!(ProblemInput::parse_examples("  ").is_empty());
    }

    #[test]
    fn test_problem_input_wire_names() {
        let input = ProblemInput {
            problem_title: "Two Sum".into(),
            problem_statement: "Find two numbers".into(),
            examples: vec![],
            constraints: String::new(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("problemTitle").is_some());
        assert!(json.get("problemStatement").is_some());
        assert!(input.is_complete());
    }
}
