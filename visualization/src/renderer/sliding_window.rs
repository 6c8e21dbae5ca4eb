//! Sliding window
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use dsaviz_core::{Step, VisualizationKind};

use super::{base_cell, RenderInput, Renderer, EMPHASIS_SCALE};
use crate::scene::{Layout, LegendEntry, Marker, Scene, Tone};

/// Window bounds from `start`/`end`, falling back to `left`/`right`, then 0
pub fn window_bounds(step: &Step) -> (i64, i64) {
    let start = step.pointer("start").or_else(|| step.pointer("left")).unwrap_or(0);
    let end = step.pointer("end").or_else(|| step.pointer("right")).unwrap_or(0);
    (start, end)
}

/// Element row with a window; elements outside it are dimmed, not hidden
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingWindowRenderer;

impl Renderer for SlidingWindowRenderer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::SlidingWindow
    }

    fn render(&self, input: &RenderInput<'_>) -> Scene {
        let (start, end) = window_bounds(input.step);
        let cells = input
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let position = index as i64;
                let mut cell = base_cell(input, index, value);
                let in_window = position >= start && position <= end;
                if position == start {
                    cell.markers.push(Marker::new("┌─", Tone::Window));
                }
                if position == end {
                    cell.markers.push(Marker::new("─┐", Tone::Window));
                }
                cell.dimmed = !in_window;
                cell.tone = if cell.highlighted {
                    Tone::Highlight
                } else if in_window {
                    Tone::Window
                } else {
                    Tone::Normal
                };
                if cell.highlighted {
                    cell.scale = EMPHASIS_SCALE;
                }
                cell
            })
            .collect();

        let mut scene = Scene::new(self.kind(), input.step_index, input.density, Layout::Row(cells));
        scene.legend = vec![LegendEntry::new(Tone::Window, format!("Window [{}-{}]", start, end))];
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsaviz_core::{Density, TraceData};

    #[test]
    fn test_bounds_fallback_chain() {
        assert_eq!(window_bounds(&Step::new("x")), (0, 0));
        assert_eq!(window_bounds(&Step::new("x").with_pointer("left", 1).with_pointer("right", 3)), (1, 3));
        let both = Step::new("x")
            .with_pointer("left", 1)
            .with_pointer("start", 2)
            .with_pointer("right", 5)
            .with_pointer("end", 4);
        assert_eq!(window_bounds(&both), (2, 4));
    }

    #[test]
    fn test_outside_elements_dimmed_not_hidden() {
        let data = TraceData::numbers(&[2.0, 1.0, 5.0, 1.0, 3.0]);
        let step = Step::new("w").with_pointer("start", 1).with_pointer("end", 3).with_highlight([3]);
        let scene = SlidingWindowRenderer.render(&RenderInput::new(&data, &step, 0, Density::Full));
        let cells = scene.cells();
        assert_eq!(cells.len(), 5);
        let dimmed: Vec<bool> = cells.iter().map(|c| c.dimmed).collect();
        assert_eq!(dimmed, vec![true, false, false, false, true]);
        assert!(cells[1].has_marker("┌─"));
        assert!(cells[3].has_marker("─┐"));
        assert_eq!(cells[2].tone, Tone::Window);
        assert_eq!(cells[3].tone, Tone::Highlight);
        assert_eq!(scene.legend[0].label, "Window [1-3]");
    }
}
