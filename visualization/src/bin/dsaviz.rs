//! `dsaviz`: step through algorithm traces in the terminal
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{debug, info, warn};
use thiserror::Error;
use tokio::io::BufReader;
use tokio::runtime::Handle;

use dsaviz_core::trace::source::{failure_notice, parse_trace_document, Explanation};
use dsaviz_core::{
    Catalogue, ConfigError, Density, SourceError, TraceSource, VisualizationTrace, VisualizerConfig,
};
use dsaviz_visualization::{Command, ExplanationPanel, PlayerError, PlayerSession};

#[derive(Debug, Error)]
enum CliError {
    #[error("{}", failure_notice(.0))]
    Source(#[from] SourceError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Player(#[from] PlayerError),

    #[error("Cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Usage(&'static str),
}

#[derive(Parser, Debug)]
#[command(name = "dsaviz", version, about = "Replay algorithm traces step by step")]
struct Cli {
    /// Prebuilt problem id (see --list)
    #[arg(long, conflicts_with = "trace")]
    problem: Option<String>,

    /// Trace or full problem JSON file
    #[arg(long)]
    trace: Option<PathBuf>,

    /// List prebuilt problems and exit
    #[arg(long)]
    list: bool,

    /// Auto-advance interval in milliseconds
    #[arg(long)]
    speed: Option<u64>,

    /// Compact cells
    #[arg(long)]
    compact: bool,

    /// Visualizer config JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Complexity note shown when playback completes, e.g. "O(n)"
    #[arg(long)]
    complexity: Option<String>,

    /// Custom values, e.g. "3,2,4"
    #[arg(long)]
    input: Option<String>,

    /// Target for hash-map and two-pointer traces
    #[arg(long, requires = "input")]
    target: Option<String>,

    /// Start playing immediately
    #[arg(long)]
    autoplay: bool,

    /// Print every step and exit
    #[arg(long)]
    once: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(long, short)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(cli: &Cli) -> Result<VisualizerConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => VisualizerConfig::from_path(path)?,
        None => VisualizerConfig::default(),
    };
    config.validate()?;
    match cli.speed {
        Some(0) => warn!("Ignoring zero --speed"),
        Some(speed) => config.default_speed_ms = config.clamp_speed_ms(speed),
        None => {}
    }
    if cli.compact {
        config.density = Density::Compact;
    }
    Ok(config)
}

/// A file holding either a full problem payload or a bare trace
fn load_trace_file(path: &Path) -> Result<(VisualizationTrace, Option<Explanation>), CliError> {
    let body = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    debug!("Parsing {}", path.display());
    Ok(parse_trace_document(&body)?)
}

fn list(catalogue: &Catalogue) {
    for id in catalogue.problem_ids() {
        match catalogue.get(id) {
            Some(problem) => println!(
                "{:<36} {:<12} {}",
                id,
                problem.visualization.kind(),
                problem.explanation.problem_category
            ),
            None => println!("{}", id),
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let catalogue = Catalogue::builtin()?;
    if cli.list {
        list(&catalogue);
        return Ok(());
    }

    let config = load_config(&cli)?;
    let (trace, explanation) = match (&cli.problem, &cli.trace) {
        (Some(id), _) => {
            let problem = catalogue.load(id)?;
            (problem.visualization, Some(problem.explanation))
        }
        (None, Some(path)) => load_trace_file(path)?,
        (None, None) => return Err(CliError::Usage("one of --problem, --trace or --list is required")),
    };
    info!("Loaded {} trace with {} steps", trace.kind(), trace.len());

    let mut session = PlayerSession::new(Arc::new(trace), config, Handle::current());
    if let Some(explanation) = &explanation {
        session = session.with_explanation(ExplanationPanel::new(explanation));
    }
    if let Some(complexity) = cli.complexity {
        session = session.with_complexity(complexity);
    }
    if let Some(values) = cli.input {
        session.apply(Command::Input {
            values,
            target: cli.target,
        })?;
    }

    let mut stdout = io::stdout();
    if cli.once {
        session.paint_all(&mut stdout)?;
        return Ok(());
    }
    if cli.autoplay {
        session.apply(Command::Toggle)?;
    }
    session.run(BufReader::new(tokio::io::stdin()), &mut stdout).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dsaviz: {}", err);
            ExitCode::FAILURE
        }
    }
}
