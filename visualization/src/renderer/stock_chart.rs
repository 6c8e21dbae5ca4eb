//! Price chart for buy/sell problems
//!
//! Bars are scaled between the smallest and largest numeric price. A flat
//! series (or a single price) uses a unit range so every bar sits at zero
//! height instead of dividing by zero. Non-numeric prices draw as empty bars.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use dsaviz_core::{DataValue, Step, VisualizationKind};

use super::{base_cell, RenderInput, Renderer, EMPHASIS_SCALE};
use crate::scene::{Badge, Layout, LegendEntry, Marker, Scene, Tone};

/// Relative bar heights in `[0, 1]`
pub fn bar_heights(values: &[DataValue]) -> Vec<f32> {
    let numbers: Vec<f64> = values.iter().filter_map(DataValue::as_number).collect();
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };
    values
        .iter()
        .map(|value| match value.as_number() {
            Some(n) => ((n - min) / range) as f32,
            None => 0.0,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StockChartRenderer;

impl StockChartRenderer {
    fn badges(step: &Step) -> Vec<Badge> {
        let shown = |key: &str, fallback: &str| {
            step.info_truthy(key)
                .map(ToString::to_string)
                .unwrap_or_else(|| fallback.to_owned())
        };
        let mut badges = vec![
            Badge::new("Min", shown("minPrice", "-"), Tone::Buy),
            Badge::new("Max Profit", shown("maxProfit", "0"), Tone::Sell),
        ];
        if let Some(profit) = step.info_truthy("profit") {
            badges.push(Badge::new("Current", profit.to_string(), Tone::Current));
        }
        if let Some(result) = step.info_truthy("result") {
            badges.push(Badge::new("Result", result.to_string(), Tone::Found));
        }
        badges
    }
}

impl Renderer for StockChartRenderer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::StockChart
    }

    fn render(&self, input: &RenderInput<'_>) -> Scene {
        let step = input.step;
        let values = input.values();
        let heights = bar_heights(&values);
        let cells = values
            .iter()
            .zip(heights)
            .enumerate()
            .map(|(index, (value, height))| {
                let mut cell = base_cell(input, index, value);
                let is_buy = step.points_at("minDay", index);
                let is_sell = step.points_at("sellDay", index);
                let is_current = step.points_at("current", index);
                cell.text = format!("${}", value);
                cell.caption = format!("Day {}", index + 1);
                cell.height = Some(height);
                if is_buy {
                    cell.markers.push(Marker::new("BUY", Tone::Buy));
                }
                if is_sell {
                    cell.markers.push(Marker::new("SELL", Tone::Sell));
                }
                cell.tone = match (is_buy, is_sell) {
                    (true, true) => Tone::BuyAndSell,
                    (true, false) => Tone::Buy,
                    (false, true) => Tone::Sell,
                    _ if is_current => Tone::Current,
                    _ if cell.highlighted => Tone::Highlight,
                    _ => Tone::Muted,
                };
                if is_buy || is_sell || is_current {
                    cell.scale = EMPHASIS_SCALE;
                }
                cell
            })
            .collect();

        let mut scene = Scene::new(self.kind(), input.step_index, input.density, Layout::Bars(cells));
        scene.badges = Self::badges(step);
        scene.legend = vec![
            LegendEntry::new(Tone::Buy, "Buy (min)"),
            LegendEntry::new(Tone::Sell, "Sell"),
            LegendEntry::new(Tone::Current, "Current"),
        ];
        scene
    }
}
