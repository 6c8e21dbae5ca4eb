//! Renderer contract and type dispatch
//!
//! Every visualization type has one stateless renderer that maps
//! `(active data, current step, step index, density)` to a [`Scene`].
//! Renderers only look at `step.highlight` (membership) and
//! `step.pointer_positions` (role lookup); indices that fall outside the
//! active data are simply never matched, and every annotation read is
//! optional. Unknown visualization types render with the array renderer.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod array;
pub mod dp_table;
pub mod hash_map;
pub mod sliding_window;
pub mod stack;
pub mod stairs;
pub mod stock_chart;
pub mod subarray;
pub mod two_pointers;

use log::debug;

use dsaviz_core::{DataValue, Density, Step, TraceData, VisualizationKind};

use crate::scene::{Cell, Scene, Tone};

pub use self::array::ArrayRenderer;
pub use self::dp_table::DpTableRenderer;
pub use self::hash_map::HashMapRenderer;
pub use self::sliding_window::SlidingWindowRenderer;
pub use self::stack::StackRenderer;
pub use self::stairs::StairsRenderer;
pub use self::stock_chart::StockChartRenderer;
pub use self::subarray::SubarrayRenderer;
pub use self::two_pointers::TwoPointersRenderer;

/// Scale applied to emphasized cells
pub const EMPHASIS_SCALE: f32 = 1.1;

/// Scale applied to pointer targets
pub const POINTER_SCALE: f32 = 1.05;

/// Read-only inputs to a single render
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub data: &'a TraceData,
    pub step: &'a Step,
    pub step_index: usize,
    pub density: Density,
}

impl<'a> RenderInput<'a> {
    pub fn new(data: &'a TraceData, step: &'a Step, step_index: usize, density: Density) -> Self {
        Self {
            data,
            step,
            step_index,
            density,
        }
    }

    /// Active data as a flat sequence
    pub fn values(&self) -> Vec<DataValue> {
        self.data.flatten()
    }
}

/// A stateless per-type renderer
pub trait Renderer: Send + Sync {
    /// Visualization type this renderer handles
    fn kind(&self) -> VisualizationKind;

    /// Builds the scene for one step
    fn render(&self, input: &RenderInput<'_>) -> Scene;
}

static ARRAY: ArrayRenderer = ArrayRenderer;
static TWO_POINTERS: TwoPointersRenderer = TwoPointersRenderer;
static DP_TABLE: DpTableRenderer = DpTableRenderer;
static STACK: StackRenderer = StackRenderer;
static SLIDING_WINDOW: SlidingWindowRenderer = SlidingWindowRenderer;
static HASH_MAP: HashMapRenderer = HashMapRenderer;
static STOCK_CHART: StockChartRenderer = StockChartRenderer;
static SUBARRAY: SubarrayRenderer = SubarrayRenderer;
static STAIRS: StairsRenderer = StairsRenderer;

/// Renderer for a visualization type, falling back to the array renderer
pub fn renderer_for(kind: &VisualizationKind) -> &'static dyn Renderer {
    match kind {
        VisualizationKind::Array => &ARRAY,
        VisualizationKind::TwoPointers => &TWO_POINTERS,
        VisualizationKind::DpTable => &DP_TABLE,
        VisualizationKind::Stack => &STACK,
        VisualizationKind::SlidingWindow => &SLIDING_WINDOW,
        VisualizationKind::HashMap => &HASH_MAP,
        VisualizationKind::StockChart => &STOCK_CHART,
        VisualizationKind::Subarray => &SUBARRAY,
        VisualizationKind::Stairs => &STAIRS,
        VisualizationKind::Other(tag) => {
            debug!("No renderer for visualization type '{}'; using array", tag);
            &ARRAY
        }
    }
}

/// Renders one step with the renderer selected by `kind`
pub fn render(kind: &VisualizationKind, input: &RenderInput<'_>) -> Scene {
    renderer_for(kind).render(input)
}

/// Cell with highlight membership filled in
pub(crate) fn base_cell(input: &RenderInput<'_>, index: usize, value: &DataValue) -> Cell {
    let mut cell = Cell::new(index, value);
    cell.highlighted = input.step.is_highlighted(index);
    cell
}

/// Plain element row used by the array-like renderers
pub(crate) fn highlighted_row(input: &RenderInput<'_>) -> Vec<Cell> {
    input
        .values()
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let mut cell = base_cell(input, index, value);
            if cell.highlighted {
                cell.tone = Tone::Highlight;
                cell.scale = EMPHASIS_SCALE;
            }
            cell
        })
        .collect()
}
