//! DSAVIZ visualization: per-type renderers and the terminal player
//!
//! Renderers turn the controller's current step into a [`scene::Scene`];
//! [`frame::VisualizerFrame`] composes a scene with the surrounding panels
//! and [`player::PlayerSession`] drives everything from a terminal.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod explanation;
pub mod frame;
pub mod player;
pub mod renderer;
pub mod scene;
pub mod terminal;

pub use self::explanation::{ExplanationPanel, SectionId};
pub use self::frame::{Controls, InputPanel, StepInfo, Timeline, VisualizerFrame};
pub use self::player::{Command, PlayerError, PlayerSession};
pub use self::renderer::{render, renderer_for, RenderInput, Renderer};
pub use self::scene::{Badge, Cell, Layout, Scene, Tone};
pub use self::terminal::{paint_frame, paint_scene};
