//! Composed visualizer frame
//!
//! A frame is everything a front-end needs to draw the visualizer for the
//! controller's current state: the scene from the type's renderer, the
//! step-info panel, the timeline, control enablement, the custom-input panel
//! and, once playback has finished, the completion overlay. Frames are
//! recomputed from scratch on every state change and hold no state of their
//! own.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::Serialize;

use dsaviz_core::{
    CompletionOverlay, CustomInputAdapter, PlaybackController, Step, TimerBackend, VisualizerConfig,
};

use crate::renderer::{self, RenderInput};
use crate::scene::Scene;

/// Step counter, leading annotations and narration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    /// "Step i/N", 1-based
    pub label: String,
    /// First few annotations as `key: value`, in authoring order
    pub annotations: Vec<String>,
    pub description: String,
}

impl StepInfo {
    pub fn new(step: &Step, index: usize, count: usize, limit: usize) -> Self {
        Self {
            label: format!("Step {}/{}", index + 1, count),
            annotations: step
                .extra_info
                .iter()
                .take(limit)
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect(),
            description: step.description.clone(),
        }
    }
}

/// Scrubber position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub value: usize,
    pub max: usize,
}

/// Transport control enablement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub reset_enabled: bool,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub play_enabled: bool,
    pub play_label: &'static str,
}

impl Controls {
    pub fn for_controller<B: TimerBackend>(controller: &PlaybackController<B>) -> Self {
        Self {
            reset_enabled: !controller.is_at_start(),
            previous_enabled: !controller.is_at_start(),
            next_enabled: !controller.is_at_end(),
            play_enabled: controller.step_count() > 1,
            play_label: if controller.is_playing() { "Pause" } else { "Play" },
        }
    }
}

/// Custom-input panel as the learner sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputPanel {
    pub placeholder: &'static str,
    pub values_text: String,
    pub shows_target: bool,
    pub target_text: String,
    pub apply_enabled: bool,
    /// Steps are replaying against learner data
    pub custom_active: bool,
}

impl InputPanel {
    pub fn new<B: TimerBackend>(adapter: &CustomInputAdapter, controller: &PlaybackController<B>) -> Self {
        Self {
            placeholder: adapter.placeholder(),
            values_text: adapter.values_text().to_owned(),
            shows_target: adapter.shows_target(),
            target_text: adapter.target_text().to_owned(),
            apply_enabled: adapter.can_apply(),
            custom_active: controller.has_custom_data(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizerFrame {
    pub scene: Scene,
    pub step_info: StepInfo,
    pub timeline: Timeline,
    pub controls: Controls,
    pub input: Option<InputPanel>,
    pub overlay: Option<CompletionOverlay>,
}

impl VisualizerFrame {
    /// Builds the frame for the controller's current state
    ///
    /// `adapter` is shown only when the config enables custom input;
    /// `complexity` is passed through to the completion overlay.
    pub fn compose<B: TimerBackend>(
        controller: &PlaybackController<B>,
        config: &VisualizerConfig,
        adapter: Option<&CustomInputAdapter>,
        complexity: Option<&str>,
    ) -> Self {
        let index = controller.current_step_index();
        let step = controller.current_step();
        let input = RenderInput::new(controller.active_data(), step, index, config.density);

        Self {
            scene: renderer::render(controller.kind(), &input),
            step_info: StepInfo::new(step, index, controller.step_count(), config.annotation_badge_limit),
            timeline: Timeline {
                value: index,
                max: controller.last_index(),
            },
            controls: Controls::for_controller(controller),
            input: adapter
                .filter(|_| config.show_custom_input)
                .map(|adapter| InputPanel::new(adapter, controller)),
            overlay: CompletionOverlay::derive(controller, &config.result_keys, complexity),
        }
    }
}
