//! Interactive terminal player
//!
//! The session owns a controller driven by [`TokioTimer`] and multiplexes two
//! event sources: learner commands (one per input line) and timer ticks. The
//! frame is repainted after every event that changes what is shown. When the
//! command stream closes during auto-play, the session keeps draining ticks
//! until playback stops, so `echo p | dsaviz ...` plays a trace to the end.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::io::Write;
use std::str::{FromStr, SplitWhitespace};
use std::sync::Arc;

use log::debug;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

use dsaviz_core::playback::TokioTimer;
use dsaviz_core::{
    CustomInputAdapter, PlaybackController, TickOutcome, TimerId, VisualizationTrace, VisualizerConfig,
};

use crate::explanation::{ExplanationPanel, SectionId};
use crate::frame::VisualizerFrame;
use crate::terminal;

pub const HELP: &str = "\
commands:
  p                 play / pause
  n, b              next / previous step
  r                 reset to step 1
  s <i>             jump to step i (1-based)
  speed <ms>        auto-advance interval
  input <v,v,..> [t] replay with custom values (no spaces) and optional target
  default           restore the trace's own data
  e [i]             show the explanation, or open/close section i
  h                 this help
  q                 quit";

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Unknown command '{0}' (h for help)")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("Invalid argument for '{command}': {value}")]
    InvalidArgument { command: &'static str, value: String },

    #[error("Input ignored: no numeric values")]
    EmptyInput,

    #[error("No explanation loaded for this trace")]
    NoExplanation,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn argument<'a>(words: &mut SplitWhitespace<'a>, command: &'static str) -> Result<&'a str, PlayerError> {
    words.next().ok_or(PlayerError::MissingArgument(command))
}

/// One learner command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Toggle,
    Next,
    Back,
    Reset,
    /// 1-based step number as typed
    Seek(i64),
    Speed(u64),
    Input { values: String, target: Option<String> },
    Default,
    /// 1-based explanation section to open or close; `None` just shows it
    Explain(Option<usize>),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = PlayerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or("");

        match head {
            "p" | "play" | "pause" => Ok(Command::Toggle),
            "n" | "next" => Ok(Command::Next),
            "b" | "back" => Ok(Command::Back),
            "r" | "reset" => Ok(Command::Reset),
            "s" | "seek" => {
                let value = argument(&mut words, "s")?;
                value.parse().map(Command::Seek).map_err(|_| PlayerError::InvalidArgument {
                    command: "s",
                    value: value.to_owned(),
                })
            }
            "speed" => {
                let value = argument(&mut words, "speed")?;
                value.parse().map(Command::Speed).map_err(|_| PlayerError::InvalidArgument {
                    command: "speed",
                    value: value.to_owned(),
                })
            }
            "input" => {
                let values = argument(&mut words, "input")?.to_owned();
                let target = words.next().map(str::to_owned);
                Ok(Command::Input { values, target })
            }
            "default" => Ok(Command::Default),
            "e" | "explain" => match words.next() {
                None => Ok(Command::Explain(None)),
                Some(value) => value
                    .parse()
                    .map(|n| Command::Explain(Some(n)))
                    .map_err(|_| PlayerError::InvalidArgument {
                        command: "e",
                        value: value.to_owned(),
                    }),
            },
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(PlayerError::UnknownCommand(other.to_owned())),
        }
    }
}

pub struct PlayerSession {
    controller: PlaybackController<TokioTimer>,
    ticks: UnboundedReceiver<TimerId>,
    config: VisualizerConfig,
    adapter: CustomInputAdapter,
    explanation: Option<ExplanationPanel>,
    complexity: Option<String>,
}

impl PlayerSession {
    /// Session whose timer tasks run on `runtime`
    pub fn new(trace: Arc<VisualizationTrace>, config: VisualizerConfig, runtime: Handle) -> Self {
        let (tx, ticks) = tokio::sync::mpsc::unbounded_channel();
        let adapter = CustomInputAdapter::new(trace.kind().clone());
        let controller = PlaybackController::with_config(trace, TokioTimer::new(runtime, tx), &config);
        Self {
            controller,
            ticks,
            config,
            adapter,
            explanation: None,
            complexity: None,
        }
    }

    pub fn with_explanation(mut self, panel: ExplanationPanel) -> Self {
        self.explanation = Some(panel);
        self
    }

    pub fn with_complexity(mut self, complexity: impl Into<String>) -> Self {
        self.complexity = Some(complexity.into());
        self
    }

    pub fn controller(&self) -> &PlaybackController<TokioTimer> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlaybackController<TokioTimer> {
        &mut self.controller
    }

    pub fn explanation(&self) -> Option<&ExplanationPanel> {
        self.explanation.as_ref()
    }

    pub fn adapter(&self) -> &CustomInputAdapter {
        &self.adapter
    }

    pub fn frame(&self) -> VisualizerFrame {
        VisualizerFrame::compose(
            &self.controller,
            &self.config,
            Some(&self.adapter),
            self.complexity.as_deref(),
        )
    }

    /// Applies a command; `Help` and `Quit` are handled by [`run`](Self::run)
    pub fn apply(&mut self, command: Command) -> Result<(), PlayerError> {
        debug!("Command {:?}", command);
        match command {
            Command::Toggle => self.controller.toggle(),
            Command::Next => self.controller.step_forward(),
            Command::Back => self.controller.step_backward(),
            Command::Reset => self.controller.reset(),
            Command::Seek(step) => self.controller.seek(step.saturating_sub(1)),
            Command::Speed(ms) => self.controller.set_speed_ms(ms),
            Command::Input { values, target } => {
                self.adapter.set_values_text(values);
                self.adapter.set_target_text(target.unwrap_or_default());
                if !self.adapter.apply(&mut self.controller) {
                    return Err(PlayerError::EmptyInput);
                }
            }
            Command::Default => self.adapter.reset(&mut self.controller),
            Command::Explain(section) => {
                let panel = self.explanation.as_mut().ok_or(PlayerError::NoExplanation)?;
                if let Some(number) = section {
                    let id = SectionId::from_number(number).ok_or_else(|| PlayerError::InvalidArgument {
                        command: "e",
                        value: number.to_string(),
                    })?;
                    let open = panel.toggle(id);
                    debug!("Section '{}' {}", id.title(), if open { "opened" } else { "closed" });
                }
            }
            Command::Help | Command::Quit => {}
        }
        Ok(())
    }

    /// Delivers a timer tick; true if the frame changed
    pub fn on_tick(&mut self, id: TimerId) -> bool {
        self.controller.on_timer(id) != TickOutcome::Ignored
    }

    fn paint_explanation<W: Write>(&self, out: &mut W) -> Result<(), PlayerError> {
        if let Some(panel) = &self.explanation {
            writeln!(out, "{}", terminal::paint_explanation(panel))?;
        }
        Ok(())
    }

    fn repaint<W: Write>(&self, out: &mut W) -> Result<(), PlayerError> {
        writeln!(out, "{}", terminal::paint_frame(&self.frame()))?;
        out.flush()?;
        Ok(())
    }

    /// Prints every step in order and leaves the controller on the last one
    pub fn paint_all<W: Write>(&mut self, out: &mut W) -> Result<(), PlayerError> {
        self.paint_explanation(out)?;
        for index in 0..self.controller.step_count() {
            self.controller.seek(index as i64);
            self.repaint(out)?;
        }
        Ok(())
    }

    /// Runs until `q`, or until input closes and playback has stopped
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<(), PlayerError>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        let mut input_open = true;

        self.paint_explanation(out)?;
        self.repaint(out)?;

        loop {
            if !input_open && !self.controller.is_playing() {
                break;
            }
            tokio::select! {
                line = lines.next_line(), if input_open => match line? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => match line.parse::<Command>() {
                        Ok(Command::Quit) => break,
                        Ok(Command::Help) => writeln!(out, "{}", HELP)?,
                        Ok(command @ Command::Explain(_)) => match self.apply(command) {
                            Ok(()) => self.paint_explanation(out)?,
                            Err(err) => writeln!(out, "{}", err)?,
                        },
                        Ok(command) => match self.apply(command) {
                            Ok(()) => self.repaint(out)?,
                            Err(err) => writeln!(out, "{}", err)?,
                        },
                        Err(err) => writeln!(out, "{}", err)?,
                    },
                    None => {
                        debug!("Command stream closed");
                        input_open = false;
                    }
                },
                Some(id) = self.ticks.recv() => {
                    if self.on_tick(id) {
                        self.repaint(out)?;
                    }
                },
                else => break,
            }
        }
        Ok(())
    }
}
