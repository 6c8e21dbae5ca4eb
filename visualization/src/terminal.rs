//! Plain-text frame painter
//!
//! Tones are drawn as bracket styles: emphasized cells as `[v]`, dimmed
//! cells as `(v)` and resting cells bare. Bars are drawn as columns of `#`.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::Write;

use crate::explanation::ExplanationPanel;
use crate::frame::VisualizerFrame;
use crate::scene::{Cell, Layout, Scene, Tone};

/// Rows used for the tallest bar
const BAR_ROWS: usize = 6;

/// Width of the timeline track
const TRACK_WIDTH: usize = 24;

fn emphasized(cell: &Cell) -> bool {
    cell.highlighted || !matches!(cell.tone, Tone::Normal | Tone::Muted | Tone::InRange | Tone::Window)
}

fn decorate(cell: &Cell) -> String {
    if emphasized(cell) {
        format!("[{}]", cell.text)
    } else if cell.dimmed {
        format!("({})", cell.text)
    } else {
        cell.text.clone()
    }
}

fn fit(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

fn paint_row(out: &mut String, cells: &[Cell], width: usize) {
    let markers: Vec<String> = cells
        .iter()
        .map(|c| fit(&c.markers.iter().map(|m| m.glyph.as_str()).collect::<Vec<_>>().join(" "), width))
        .collect();
    if markers.iter().any(|m| !m.trim().is_empty()) {
        let _ = writeln!(out, "{}", markers.concat().trim_end());
    }
    let values: String = cells.iter().map(|c| fit(&decorate(c), width)).collect();
    let captions: String = cells.iter().map(|c| fit(&c.caption, width)).collect();
    let _ = writeln!(out, "{}", values.trim_end());
    let _ = writeln!(out, "{}", captions.trim_end());
}

fn paint_bars(out: &mut String, cells: &[Cell], width: usize) {
    let rows: Vec<usize> = cells
        .iter()
        .map(|c| (c.height.unwrap_or(0.0).clamp(0.0, 1.0) * BAR_ROWS as f32).round() as usize)
        .collect();
    for level in (1..=BAR_ROWS).rev() {
        let line: String = rows
            .iter()
            .map(|&height| fit(if height >= level { "#" } else { "" }, width))
            .collect();
        if !line.trim().is_empty() {
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }
    paint_row(out, cells, width);
}

/// Paints the scene body, badges, panels and legend
pub fn paint_scene(scene: &Scene) -> String {
    let mut out = String::new();
    let width = scene.cell_size.width as usize + 2;

    if let Some(title) = &scene.title {
        let _ = writeln!(out, "{}", title);
    }
    match &scene.layout {
        Layout::Row(cells) => paint_row(&mut out, cells, width),
        Layout::Bars(cells) => paint_bars(&mut out, cells, width),
        Layout::Table(rows) => {
            for (index, row) in rows.iter().enumerate() {
                let line: String = row.iter().map(|c| fit(&decorate(c), width)).collect();
                let _ = writeln!(out, "{:>3} {}", index, line.trim_end());
            }
        }
        Layout::Stack(cells) => {
            for cell in cells {
                let marker = cell.markers.first().map_or("", |m| m.glyph.as_str());
                let _ = writeln!(out, "| {} | {}", fit(&decorate(cell), width), marker);
            }
        }
    }
    if scene.cells().is_empty() {
        if let Some(empty) = &scene.empty_text {
            let _ = writeln!(out, "{}", empty);
        }
    }
    if !scene.badges.is_empty() {
        let badges: Vec<String> = scene.badges.iter().map(|b| b.text()).collect();
        let _ = writeln!(out, "{}", badges.join(" | "));
    }
    for panel in &scene.panels {
        let _ = writeln!(out, "{}: {}", panel.title, panel.body);
    }
    if !scene.legend.is_empty() {
        let legend: Vec<&str> = scene.legend.iter().map(|l| l.label.as_str()).collect();
        let _ = writeln!(out, "Legend: {}", legend.join(", "));
    }
    if let Some(footnote) = &scene.footnote {
        let _ = writeln!(out, "{}", footnote);
    }
    out
}

/// Paints a whole frame
pub fn paint_frame(frame: &VisualizerFrame) -> String {
    let mut out = paint_scene(&frame.scene);

    let info = &frame.step_info;
    let _ = writeln!(out);
    if info.annotations.is_empty() {
        let _ = writeln!(out, "{}", info.label);
    } else {
        let _ = writeln!(out, "{}  {}", info.label, info.annotations.join("  "));
    }
    let _ = writeln!(out, "{}", info.description);

    let filled = if frame.timeline.max == 0 {
        TRACK_WIDTH
    } else {
        frame.timeline.value * TRACK_WIDTH / frame.timeline.max
    };
    let _ = writeln!(
        out,
        "[{}{}] {}/{}",
        "=".repeat(filled),
        " ".repeat(TRACK_WIDTH - filled),
        frame.timeline.value,
        frame.timeline.max
    );

    let controls = &frame.controls;
    let toggle = |label: &str, enabled: bool| if enabled { label.to_owned() } else { format!("({})", label) };
    let _ = writeln!(
        out,
        "{}  {}  {}  {}",
        toggle("r:reset", controls.reset_enabled),
        toggle("b:back", controls.previous_enabled),
        toggle(&format!("p:{}", controls.play_label.to_lowercase()), controls.play_enabled),
        toggle("n:next", controls.next_enabled),
    );

    if let Some(input) = &frame.input {
        let state = if input.custom_active { "custom data" } else { "trace data" };
        let _ = write!(out, "Input ({}): e.g. {}", state, input.placeholder);
        if input.shows_target {
            let _ = write!(out, " [target]");
        }
        let _ = writeln!(out);
    }

    if let Some(overlay) = &frame.overlay {
        let _ = writeln!(out);
        let _ = writeln!(out, "*** {} ***", overlay.headline);
        if let Some(result) = &overlay.result {
            let _ = writeln!(out, "Result: {}", result);
        }
        if let Some(complexity) = &overlay.complexity {
            let _ = writeln!(out, "Complexity: {}", complexity);
        }
        let _ = writeln!(out, "{} (r)", overlay.replay_label);
    }
    out
}

/// Paints the category and every open explanation section
pub fn paint_explanation(panel: &ExplanationPanel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}]", panel.category);
    for (number, section) in panel.sections.iter().enumerate() {
        let marker = if section.open { '-' } else { '+' };
        let _ = writeln!(out, "[{}] {} {}", marker, number + 1, section.title);
        if section.open {
            let _ = writeln!(out, "{}", section.body);
        }
    }
    out
}
