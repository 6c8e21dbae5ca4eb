//! Stack
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use dsaviz_core::{Step, VisualizationKind};

use super::{base_cell, RenderInput, Renderer, EMPHASIS_SCALE};
use crate::scene::{Layout, Marker, Scene, Tone};

/// Number of elements currently on the stack
///
/// `stackSize` caps the visible prefix of the data; without it the whole
/// dataset is on the stack. Negative or oversized values are clamped.
pub fn visible_count(step: &Step, len: usize) -> usize {
    match step.info_number("stackSize") {
        Some(size) if size.is_finite() => size.max(0.0).min(len as f64) as usize,
        _ => len,
    }
}

/// Vertical stack with the top element first
#[derive(Debug, Clone, Copy, Default)]
pub struct StackRenderer;

impl Renderer for StackRenderer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::Stack
    }

    fn render(&self, input: &RenderInput<'_>) -> Scene {
        let values = input.values();
        let visible = visible_count(input.step, values.len());
        let cells = values
            .iter()
            .take(visible)
            .enumerate()
            .rev()
            .map(|(index, value)| {
                let mut cell = base_cell(input, index, value);
                if index + 1 == visible {
                    cell.tone = Tone::Top;
                    cell.scale = EMPHASIS_SCALE;
                    cell.markers.push(Marker::new("TOP", Tone::Top));
                } else if cell.highlighted {
                    cell.tone = Tone::Secondary;
                }
                cell
            })
            .collect();

        let mut scene = Scene::new(self.kind(), input.step_index, input.density, Layout::Stack(cells));
        scene.title = Some("TOP ↓".to_owned());
        if visible == 0 {
            scene.empty_text = Some("Empty".to_owned());
        }
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsaviz_core::{Density, TraceData};

    fn brackets() -> TraceData {
        TraceData::Sequence(vec![")".into(), "]".into()])
    }

    #[test]
    fn test_visible_count_clamps() {
        assert_eq!(visible_count(&Step::new("x"), 3), 3);
        assert_eq!(visible_count(&Step::new("x").with_info("stackSize", 1i64), 3), 1);
        assert_eq!(visible_count(&Step::new("x").with_info("stackSize", 9i64), 3), 3);
        assert_eq!(visible_count(&Step::new("x").with_info("stackSize", -2i64), 3), 0);
        assert_eq!(visible_count(&Step::new("x").with_info("stackSize", "lots"), 3), 3);
    }

    #[test]
    fn test_top_listed_first() {
        let data = brackets();
        let step = Step::new("push").with_info("stackSize", 2i64).with_highlight([0, 1]);
        let scene = StackRenderer.render(&RenderInput::new(&data, &step, 2, Density::Full));
        let cells = scene.cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].text, "]");
        assert_eq!(cells[0].tone, Tone::Top);
        assert!(cells[0].has_marker("TOP"));
        assert_eq!(cells[1].tone, Tone::Secondary);
        assert_eq!(scene.empty_text, None);
    }

    #[test]
    fn test_empty_stack_shows_placeholder() {
        let data = brackets();
        let step = Step::new("done").with_info("stackSize", 0i64);
        let scene = StackRenderer.render(&RenderInput::new(&data, &step, 5, Density::Full));
        assert!(scene.cells().is_empty());
        assert_eq!(scene.empty_text.as_deref(), Some("Empty"));
    }
}
