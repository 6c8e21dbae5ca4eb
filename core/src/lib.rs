//! DSAVIZ core: trace model and playback engine
//!
//! Traces of algorithm executions (recorded externally as a sequence of
//! steps) are replayed under learner control. This crate owns the data model,
//! the playback state machine with its auto-advance timer, the custom input
//! adapter, the completion overlay and the prebuilt trace catalogue.
//! Rendering lives in `dsaviz-visualization`.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod completion;
pub mod config;
pub mod input;
pub mod playback;
pub mod trace;

pub use self::completion::{CompletionOverlay, ResultKeys};
pub use self::config::{ConfigError, Density, VisualizerConfig};
pub use self::input::{CustomInput, CustomInputAdapter, ExtraParams};
pub use self::playback::{PlaybackController, PlaybackState, TickOutcome, TimerBackend, TimerId};
pub use self::trace::catalogue::Catalogue;
pub use self::trace::source::{ProblemVisualization, SourceError, TraceSource};
pub use self::trace::{Annotation, DataValue, Step, TraceData, TraceError, VisualizationKind, VisualizationTrace};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
