//! Hash-map lookup
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use dsaviz_core::{Step, VisualizationKind};

use super::{base_cell, RenderInput, Renderer, EMPHASIS_SCALE};
use crate::scene::{Badge, Layout, Marker, Panel, Scene, Tone};

pub const MEMORY_PANEL: &str = "Memory (Hash Map)";

/// Element row with a `current` cursor and the lookup memory beside it
#[derive(Debug, Clone, Copy, Default)]
pub struct HashMapRenderer;

impl HashMapRenderer {
    fn badges(step: &Step) -> Vec<Badge> {
        let mut badges = Vec::new();
        if let Some(target) = step.info("target") {
            badges.push(Badge::new("Target", target.to_string(), Tone::Info));
        }
        if let Some(needed) = step.info("looking_for") {
            let text = needed.to_string();
            if text != "-" {
                badges.push(Badge::new("Need", text, Tone::Current));
            }
        }
        if let Some(found) = step.info_truthy("found") {
            badges.push(Badge::new("Found", found.to_string(), Tone::Found));
        }
        badges
    }
}

impl Renderer for HashMapRenderer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::HashMap
    }

    fn render(&self, input: &RenderInput<'_>) -> Scene {
        let step = input.step;
        let cells = input
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let mut cell = base_cell(input, index, value);
                cell.caption = format!("i={}", index);
                let is_current = step.points_at("current", index);
                if is_current {
                    cell.markers.push(Marker::new("↓ checking", Tone::Current));
                }
                cell.tone = if cell.highlighted {
                    Tone::Found
                } else if is_current {
                    Tone::Current
                } else {
                    Tone::Normal
                };
                if cell.highlighted || is_current {
                    cell.scale = EMPHASIS_SCALE;
                }
                cell
            })
            .collect();

        let memory = step
            .info("memory")
            .map(ToString::to_string)
            .unwrap_or_else(|| "{}".to_owned());

        let mut scene = Scene::new(self.kind(), input.step_index, input.density, Layout::Row(cells));
        scene.panels.push(Panel {
            title: MEMORY_PANEL.to_owned(),
            body: memory,
        });
        scene.badges = Self::badges(step);
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use dsaviz_core::playback::ManualTimer;
    use dsaviz_core::{Catalogue, Density, PlaybackController, TraceSource};

    fn two_sum_scene(index: i64) -> Scene {
        let trace = Catalogue::builtin().unwrap().load("two-sum").unwrap().visualization;
        let mut controller = PlaybackController::new(Arc::new(trace), ManualTimer::new());
        controller.seek(index);
        let input = RenderInput::new(
            controller.active_data(),
            controller.current_step(),
            controller.current_step_index(),
            Density::Full,
        );
        HashMapRenderer.render(&input)
    }

    #[test]
    fn test_initial_step_has_no_cursor() {
        let scene = two_sum_scene(0);
        assert!(scene.cells().iter().all(|c| c.markers.is_empty()));
        assert_eq!(scene.panel(MEMORY_PANEL).unwrap().body, "{}");
        assert_eq!(scene.badge("Target").unwrap().value, "9");
        assert!(scene.badge("Need").is_none());
    }

    #[test]
    fn test_checking_cursor_and_need_badge() {
        let scene = two_sum_scene(1);
        let cells = scene.cells();
        assert!(cells[0].has_marker("↓ checking"));
        assert_eq!(cells[0].tone, Tone::Found);
        assert_eq!(cells[0].caption, "i=0");
        assert_eq!(scene.badge("Need").unwrap().value, "7");
        assert_eq!(scene.panel(MEMORY_PANEL).unwrap().body, "{2: 0}");
    }

    #[test]
    fn test_found_badge_on_final_step() {
        let scene = two_sum_scene(2);
        assert_eq!(scene.badge("Found").unwrap().text(), "Found: 2+7=9");
        assert_eq!(scene.highlighted_indices(), vec![0, 1]);
        assert_eq!(scene.cells()[2].tone, Tone::Normal);
    }

    #[test]
    fn test_missing_memory_renders_empty_braces() {
        let data = dsaviz_core::TraceData::numbers(&[1.0]);
        let step = Step::new("bare");
        let scene = HashMapRenderer.render(&RenderInput::new(&data, &step, 0, Density::Compact));
        assert_eq!(scene.panel(MEMORY_PANEL).unwrap().body, "{}");
        assert!(scene.badges.is_empty());
    }
}
