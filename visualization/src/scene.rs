//! Scene description produced by renderers
//!
//! A scene says what to draw and what to emphasize; it carries no styling
//! beyond semantic tones and relative sizes. Painters (the terminal painter
//! in this crate, or any other front-end) decide how a tone looks.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::Serialize;

use dsaviz_core::{DataValue, Density, VisualizationKind};

/// Semantic color role of a cell or badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Normal,
    Muted,
    Highlight,
    Secondary,
    Current,
    Left,
    Right,
    Found,
    Window,
    Buy,
    Sell,
    BuyAndSell,
    InRange,
    Negative,
    Positive,
    Top,
    Info,
}

/// Small glyph placed above or beside a cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub glyph: String,
    pub tone: Tone,
}

impl Marker {
    pub fn new(glyph: impl Into<String>, tone: Tone) -> Self {
        Self { glyph: glyph.into(), tone }
    }
}

/// One rendered data element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// Position in the active dataset (row-major for tables)
    pub index: usize,
    pub value: DataValue,
    /// Text drawn in the cell (usually the value)
    pub text: String,
    /// Caption under the cell ("0", "i=0", "Day 1", ...)
    pub caption: String,
    pub tone: Tone,
    /// Member of `step.highlight`
    pub highlighted: bool,
    /// Drawn at reduced opacity but still visible
    pub dimmed: bool,
    /// Emphasis scale, 1.0 for a resting cell
    pub scale: f32,
    /// Relative bar height in `[0, 1]` for chart-like layouts
    pub height: Option<f32>,
    pub markers: Vec<Marker>,
}

impl Cell {
    pub fn new(index: usize, value: &DataValue) -> Self {
        Self {
            index,
            value: value.clone(),
            text: value.to_string(),
            caption: index.to_string(),
            tone: Tone::Normal,
            highlighted: false,
            dimmed: false,
            scale: 1.0,
            height: None,
            markers: Vec::new(),
        }
    }

    pub fn has_marker(&self, glyph: &str) -> bool {
        self.markers.iter().any(|m| m.glyph == glyph)
    }
}

/// Arrangement of cells
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", content = "cells", rename_all = "snake_case")]
pub enum Layout {
    /// Single horizontal row
    Row(Vec<Cell>),
    /// Rows of a 2-D table
    Table(Vec<Vec<Cell>>),
    /// Vertical stack listed top first
    Stack(Vec<Cell>),
    /// Vertical bars, left to right
    Bars(Vec<Cell>),
}

impl Layout {
    /// All cells in reading order
    pub fn cells(&self) -> Vec<&Cell> {
        match self {
            Layout::Row(cells) | Layout::Stack(cells) | Layout::Bars(cells) => cells.iter().collect(),
            Layout::Table(rows) => rows.iter().flatten().collect(),
        }
    }
}

/// Labelled annotation chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

impl Badge {
    pub fn new(label: impl Into<String>, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            tone,
        }
    }

    pub fn text(&self) -> String {
        if self.label.is_empty() {
            self.value.clone()
        } else {
            format!("{}: {}", self.label, self.value)
        }
    }
}

/// Titled free-form text block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub title: String,
    pub body: String,
}

/// Legend swatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub tone: Tone,
    pub label: String,
}

impl LegendEntry {
    pub fn new(tone: Tone, label: impl Into<String>) -> Self {
        Self { tone, label: label.into() }
    }
}

/// Cell dimensions for a density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl CellSize {
    pub fn for_density(density: Density) -> Self {
        match density {
            Density::Compact => CellSize { width: 5, height: 1 },
            Density::Full => CellSize { width: 7, height: 3 },
        }
    }
}

/// Everything a renderer produces for one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Renderer that produced the scene
    pub kind: VisualizationKind,
    /// Step index, usable as an animation key
    pub step_index: usize,
    pub cell_size: CellSize,
    pub title: Option<String>,
    pub layout: Layout,
    pub panels: Vec<Panel>,
    pub badges: Vec<Badge>,
    pub legend: Vec<LegendEntry>,
    /// Shown instead of cells when nothing is visible (e.g. empty stack)
    pub empty_text: Option<String>,
    pub footnote: Option<String>,
}

impl Scene {
    pub fn new(kind: VisualizationKind, step_index: usize, density: Density, layout: Layout) -> Self {
        Self {
            kind,
            step_index,
            cell_size: CellSize::for_density(density),
            title: None,
            layout,
            panels: Vec::new(),
            badges: Vec::new(),
            legend: Vec::new(),
            empty_text: None,
            footnote: None,
        }
    }

    pub fn cells(&self) -> Vec<&Cell> {
        self.layout.cells()
    }

    pub fn highlighted_indices(&self) -> Vec<usize> {
        self.cells().into_iter().filter(|c| c.highlighted).map(|c| c.index).collect()
    }

    pub fn badge(&self, label: &str) -> Option<&Badge> {
        self.badges.iter().find(|b| b.label == label)
    }

    pub fn panel(&self, title: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.title == title)
    }
}
