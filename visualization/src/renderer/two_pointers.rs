//! Two-pointer scan
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use dsaviz_core::VisualizationKind;

use super::{base_cell, RenderInput, Renderer, POINTER_SCALE};
use crate::scene::{Layout, LegendEntry, Marker, Scene, Tone};

/// Element row with `left` / `right` pointer glyphs
///
/// The left pointer wins when both roles sit on the same element.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointersRenderer;

impl Renderer for TwoPointersRenderer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::TwoPointers
    }

    fn render(&self, input: &RenderInput<'_>) -> Scene {
        let step = input.step;
        let cells = input
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let mut cell = base_cell(input, index, value);
                let is_left = step.points_at("left", index);
                let is_right = step.points_at("right", index);
                if is_left {
                    cell.markers.push(Marker::new("L↓", Tone::Left));
                }
                if is_right {
                    cell.markers.push(Marker::new("R↓", Tone::Right));
                }
                cell.tone = if is_left {
                    Tone::Left
                } else if is_right {
                    Tone::Right
                } else if cell.highlighted {
                    Tone::Highlight
                } else {
                    Tone::Normal
                };
                if is_left || is_right || cell.highlighted {
                    cell.scale = POINTER_SCALE;
                }
                cell
            })
            .collect();

        let mut scene = Scene::new(self.kind(), input.step_index, input.density, Layout::Row(cells));
        scene.legend = vec![LegendEntry::new(Tone::Left, "Left"), LegendEntry::new(Tone::Right, "Right")];
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsaviz_core::{Density, Step, TraceData};

    #[test]
    fn test_pointer_glyphs_and_precedence() {
        let data = TraceData::numbers(&[1.0, 3.0, 5.0, 7.0]);
        let step = Step::new("p").with_pointer("left", 0).with_pointer("right", 3).with_highlight([1]);
        let scene = TwoPointersRenderer.render(&RenderInput::new(&data, &step, 2, Density::Full));
        let cells = scene.cells();
        assert!(cells[0].has_marker("L↓"));
        assert_eq!(cells[0].tone, Tone::Left);
        assert!(cells[3].has_marker("R↓"));
        assert_eq!(cells[3].tone, Tone::Right);
        assert_eq!(cells[1].tone, Tone::Highlight);
        assert_eq!(cells[2].tone, Tone::Normal);
    }

    #[test]
    fn test_converged_pointers_show_both_glyphs() {
        let data = TraceData::numbers(&[1.0, 2.0]);
        let step = Step::new("meet").with_pointer("left", 1).with_pointer("right", 1);
        let scene = TwoPointersRenderer.render(&RenderInput::new(&data, &step, 0, Density::Full));
        let cell = scene.cells()[1];
        assert!(cell.has_marker("L↓") && cell.has_marker("R↓"));
        assert_eq!(cell.tone, Tone::Left);
    }

    #[test]
    fn test_pointers_past_shrunken_data_are_absent() {
        let data = TraceData::numbers(&[1.0, 2.0]);
        let step = Step::new("old").with_pointer("left", 0).with_pointer("right", 6);
        let scene = TwoPointersRenderer.render(&RenderInput::new(&data, &step, 0, Density::Full));
        assert!(scene.cells().iter().all(|c| !c.has_marker("R↓")));
    }
}
