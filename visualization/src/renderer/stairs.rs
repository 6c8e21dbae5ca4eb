//! Staircase for climbing-stairs style recurrences
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use dsaviz_core::{Step, VisualizationKind};

use super::{base_cell, RenderInput, Renderer, EMPHASIS_SCALE};
use crate::scene::{Badge, Layout, Scene, Tone};

pub const RECURRENCE: &str = "ways(n) = ways(n-1) + ways(n-2)";

const BASE_HEIGHT: f32 = 30.0;
const RISE: f32 = 20.0;
const LOWERED: f32 = 0.3;

/// 1-based stair the climber stands on, 0 before the first
fn current_stair(step: &Step) -> usize {
    step.info_number("step")
        .filter(|n| n.is_finite() && *n > 0.0)
        .map_or(0, |n| n as usize)
}

/// Ascending stairs; each bar's value is the number of ways to reach it
#[derive(Debug, Clone, Copy, Default)]
pub struct StairsRenderer;

impl Renderer for StairsRenderer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::Stairs
    }

    fn render(&self, input: &RenderInput<'_>) -> Scene {
        let step = input.step;
        let current = current_stair(step);
        let values = input.values();
        let tallest = BASE_HEIGHT + RISE * values.len().saturating_sub(1) as f32;
        let cells = values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let mut cell = base_cell(input, index, value);
                let raised = cell.highlighted || index < current;
                let is_current = index + 1 == current;
                let base = (BASE_HEIGHT + RISE * index as f32) / tallest;
                cell.height = Some(if raised { base } else { base * LOWERED });
                cell.caption = format!("Step {}", index + 1);
                cell.tone = if is_current {
                    Tone::Current
                } else if cell.highlighted {
                    Tone::Highlight
                } else {
                    Tone::Muted
                };
                if is_current {
                    cell.scale = EMPHASIS_SCALE;
                }
                cell
            })
            .collect();

        let mut scene = Scene::new(self.kind(), input.step_index, input.density, Layout::Bars(cells));
        if current > 0 {
            let ways = step
                .info("ways")
                .map(ToString::to_string)
                .unwrap_or_else(|| "?".to_owned());
            scene
                .badges
                .push(Badge::new(format!("Step {}", current), format!("{} ways", ways), Tone::Current));
        }
        if let Some(formula) = step.info_truthy("formula") {
            scene.badges.push(Badge::new("Formula", formula.to_string(), Tone::Info));
        }
        if let Some(paths) = step.info_truthy("paths") {
            scene.badges.push(Badge::new("Paths", paths.to_string(), Tone::Info));
        }
        scene.footnote = Some(RECURRENCE.to_owned());
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsaviz_core::{Density, TraceData};

    fn data() -> TraceData {
        TraceData::numbers(&[1.0, 2.0, 3.0, 5.0, 8.0])
    }

    #[test]
    fn test_climbed_stairs_are_raised() {
        let data = data();
        let step = Step::new("step 3")
            .with_highlight([0, 1, 2])
            .with_info("step", 3i64)
            .with_info("ways", 3i64)
            .with_info("formula", "2+1");
        let scene = StairsRenderer.render(&RenderInput::new(&data, &step, 3, Density::Full));
        let cells = scene.cells();
        assert_eq!(cells[2].tone, Tone::Current);
        assert_eq!(cells[0].tone, Tone::Highlight);
        assert_eq!(cells[4].tone, Tone::Muted);
        assert_eq!(cells[4].height, Some(LOWERED));
        assert_eq!(cells[2].caption, "Step 3");
        assert_eq!(scene.badge("Step 3").unwrap().value, "3 ways");
        assert_eq!(scene.badge("Formula").unwrap().value, "2+1");
        assert_eq!(scene.footnote.as_deref(), Some(RECURRENCE));
    }

    #[test]
    fn test_climbed_but_unhighlighted_stair_is_muted_at_full_height() {
        let data = data();
        let step = Step::new("step 3").with_info("step", 3i64);
        let scene = StairsRenderer.render(&RenderInput::new(&data, &step, 3, Density::Full));
        let cells = scene.cells();
        let tallest = BASE_HEIGHT + RISE * 4.0;
        assert_eq!(cells[0].tone, Tone::Muted);
        assert_eq!(cells[0].height, Some(BASE_HEIGHT / tallest));
        assert_eq!(cells[1].tone, Tone::Muted);
        assert_eq!(cells[1].height, Some((BASE_HEIGHT + RISE) / tallest));
        assert_eq!(cells[2].tone, Tone::Current);
    }

    #[test]
    fn test_heights_grow_with_index() {
        let data = data();
        let step = Step::new("all").with_info("step", 5i64);
        let scene = StairsRenderer.render(&RenderInput::new(&data, &step, 5, Density::Full));
        let heights: Vec<f32> = scene.cells().iter().filter_map(|c| c.height).collect();
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(heights[4], 1.0);
    }

    #[test]
    fn test_ground_floor_has_no_step_badge() {
        let data = data();
        let step = Step::new("start").with_info("step", 0i64).with_info("ways", "?");
        let scene = StairsRenderer.render(&RenderInput::new(&data, &step, 0, Density::Full));
        assert!(scene.badges.is_empty());
        assert!(scene.cells().iter().all(|c| c.tone == Tone::Muted));
    }
}
