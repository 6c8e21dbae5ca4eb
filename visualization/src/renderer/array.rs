//! Generic element grid
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use dsaviz_core::VisualizationKind;

use super::{highlighted_row, RenderInput, Renderer};
use crate::scene::{Layout, Scene};

/// Row of elements; highlighted indices are emphasized
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayRenderer;

impl Renderer for ArrayRenderer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::Array
    }

    fn render(&self, input: &RenderInput<'_>) -> Scene {
        Scene::new(
            self.kind(),
            input.step_index,
            input.density,
            Layout::Row(highlighted_row(input)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsaviz_core::{Density, Step, TraceData};

    use crate::scene::Tone;

    #[test]
    fn test_highlight_membership() {
        let data = TraceData::numbers(&[5.0, 6.0, 7.0]);
        let step = Step::new("a").with_highlight([0, 2]);
        let scene = ArrayRenderer.render(&RenderInput::new(&data, &step, 1, Density::Full));
        assert_eq!(scene.highlighted_indices(), vec![0, 2]);
        let cells = scene.cells();
        assert_eq!(cells[1].tone, Tone::Normal);
        assert_eq!(cells[2].tone, Tone::Highlight);
        assert_eq!(cells[2].text, "7");
        assert_eq!(cells[2].caption, "2");
    }

    #[test]
    fn test_out_of_range_highlight_is_ignored() {
        let data = TraceData::numbers(&[2.0, 7.0, 11.0, 15.0]);
        let step = Step::new("stale").with_highlight([99]);
        let scene = ArrayRenderer.render(&RenderInput::new(&data, &step, 0, Density::Full));
        assert_eq!(scene.cells().len(), 4);
        assert!(scene.highlighted_indices().is_empty());
    }
}
