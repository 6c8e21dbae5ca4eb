//! Visualization trace model
//!
//! A trace is the immutable recording of one algorithm run on a fixed input:
//! a visualization type, the dataset, and an ordered, non-empty sequence of
//! steps. Index 0 is the initial state and the last index the terminal one.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod catalogue;
pub mod kind;
pub mod source;
pub mod step;

use std::fmt::{self, Display};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub use self::kind::VisualizationKind;
pub use self::step::{Annotation, Annotations, OrderedMap, PointerPositions, Step};

/// Trace construction errors
#[derive(Debug, Error, PartialEq)]
pub enum TraceError {
    #[error("Trace has no steps")]
    EmptySteps,

    #[error("Step {step} has an empty description")]
    MissingDescription { step: usize },
}

/// A single element of a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Text(String),
}

impl DataValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            DataValue::Text(_) => None,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.as_number().map_or(false, |n| n < 0.0)
    }
}

impl Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Number(n) => step::write_number(f, *n),
            DataValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Number(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::Text(value.to_owned())
    }
}

/// Dataset being visualized: a flat sequence, or rows for tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraceData {
    Sequence(Vec<DataValue>),
    Table(Vec<Vec<DataValue>>),
}

impl TraceData {
    pub fn numbers(values: &[f64]) -> Self {
        TraceData::Sequence(values.iter().copied().map(DataValue::Number).collect())
    }

    /// Number of addressable cells
    pub fn len(&self) -> usize {
        match self {
            TraceData::Sequence(values) => values.len(),
            TraceData::Table(rows) => rows.iter().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat view; tables are read row-major
    pub fn flatten(&self) -> Vec<DataValue> {
        match self {
            TraceData::Sequence(values) => values.clone(),
            TraceData::Table(rows) => rows.iter().flatten().cloned().collect(),
        }
    }

    /// Table view; a flat sequence becomes a single row
    pub fn rows(&self) -> Vec<Vec<DataValue>> {
        match self {
            TraceData::Sequence(values) => vec![values.clone()],
            TraceData::Table(rows) => rows.clone(),
        }
    }
}

impl Default for TraceData {
    fn default() -> Self {
        TraceData::Sequence(Vec::new())
    }
}

#[derive(Deserialize)]
struct RawTrace {
    #[serde(rename = "type")]
    kind: VisualizationKind,
    #[serde(default)]
    data: TraceData,
    steps: Vec<Step>,
}

/// Immutable recording of an algorithm run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizationTrace {
    #[serde(rename = "type")]
    kind: VisualizationKind,
    data: TraceData,
    steps: Vec<Step>,
}

impl VisualizationTrace {
    /// Builds a validated trace
    ///
    /// # Errors
    /// Returns [`TraceError::EmptySteps`] if `steps` is empty, or
    /// [`TraceError::MissingDescription`] if a step has a blank description.
    pub fn new(kind: VisualizationKind, data: TraceData, steps: Vec<Step>) -> Result<Self, TraceError> {
        if steps.is_empty() {
            return Err(TraceError::EmptySteps);
        }
        if let Some(step) = steps.iter().position(|s| s.description.trim().is_empty()) {
            return Err(TraceError::MissingDescription { step });
        }
        Ok(Self { kind, data, steps })
    }

    pub fn kind(&self) -> &VisualizationKind {
        &self.kind
    }

    pub fn data(&self) -> &TraceData {
        &self.data
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a constructed trace
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the terminal step
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn last_step(&self) -> &Step {
        &self.steps[self.last_index()]
    }
}

impl<'de> Deserialize<'de> for VisualizationTrace {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawTrace::deserialize(deserializer)?;
        VisualizationTrace::new(raw.kind, raw.data, raw.steps).map_err(serde::de::Error::custom)
    }
}
