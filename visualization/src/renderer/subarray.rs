//! Maximum-subarray scan
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use dsaviz_core::{Step, VisualizationKind};

use super::{base_cell, RenderInput, Renderer, EMPHASIS_SCALE};
use crate::scene::{Badge, Layout, LegendEntry, Marker, Scene, Tone};

/// Candidate range `[start, end]`; absent until a `start` pointer exists
///
/// An open range extends to `current`, or is just `start` without one.
pub fn candidate_range(step: &Step) -> Option<(i64, i64)> {
    let start = step.pointer("start")?;
    let end = step
        .pointer("end")
        .or_else(|| step.pointer("current"))
        .unwrap_or(start);
    Some((start, end))
}

/// Element row with the running candidate range and sum badges
///
/// Tone precedence is highlight, then negative value, then range
/// membership; negative elements keep their tone inside the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubarrayRenderer;

impl SubarrayRenderer {
    fn badges(step: &Step) -> Vec<Badge> {
        let current_sum = step.info_number("currentSum").unwrap_or(0.0);
        let sum_tone = if current_sum > 0.0 { Tone::Positive } else { Tone::Negative };
        let current_text = step
            .info("currentSum")
            .map(ToString::to_string)
            .unwrap_or_else(|| "0".to_owned());
        let max_text = step
            .info("maxSum")
            .map(ToString::to_string)
            .unwrap_or_else(|| "-".to_owned());

        let mut badges = vec![
            Badge::new("Current Sum", current_text, sum_tone),
            Badge::new("Max Sum", max_text, Tone::Found),
        ];
        if let Some(action) = step.info_truthy("action") {
            badges.push(Badge::new("", action.to_string(), Tone::Info));
        }
        if let Some(result) = step.info_truthy("result") {
            badges.push(Badge::new("Result", result.to_string(), Tone::Found));
        }
        badges
    }
}

impl Renderer for SubarrayRenderer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::Subarray
    }

    fn render(&self, input: &RenderInput<'_>) -> Scene {
        let step = input.step;
        let range = candidate_range(step);
        let cells = input
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| {
                let mut cell = base_cell(input, index, value);
                let position = index as i64;
                let in_range = range.map_or(false, |(start, end)| position >= start && position <= end);
                if step.points_at("current", index) {
                    cell.markers.push(Marker::new("↓", Tone::Current));
                }
                cell.tone = if cell.highlighted {
                    Tone::Found
                } else if value.is_negative() {
                    Tone::Negative
                } else if in_range {
                    Tone::InRange
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
        scene.badges = Self::badges(step);
        scene.legend = vec![
            LegendEntry::new(Tone::InRange, "In subarray"),
            LegendEntry::new(Tone::Negative, "Negative"),
            LegendEntry::new(Tone::Found, "Best"),
        ];
        scene
    }
}
