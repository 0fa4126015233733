//! CampusWatch CLI
//!
//! Terminal front end for the issue classifiers. `classify` runs one pass;
//! `live` drives the debounced controller from stdin so the preview can be
//! watched the way a report form would see it.

use anyhow::{Context, Result};
use campuswatch_core::{AnalysisPhase, PredictionSnapshot};
use campuswatch_classifiers::trim_input;
use campuswatch_live::{AnalysisState, LiveAnalysisController};
use clap::Parser;
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

mod cli;
mod config;

use cli::{Cli, Commands, OutputFormat};
use config::CampusWatchConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = CampusWatchConfig::load(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    match cli.command {
        Commands::Classify { text, format } => {
            let analyzer = config.lexicon.build_analyzer()?;
            let snapshot = analyzer.analyze(trim_input(&text.join(" ")));
            println!("{}", render_snapshot(&snapshot, format)?);
        }

        Commands::Live {
            delay_ms,
            min_chars,
            format,
        } => {
            let config = config.with_live_overrides(delay_ms, min_chars);
            run_live(config, format).await?;
        }
    }

    Ok(())
}

async fn run_live(config: CampusWatchConfig, format: OutputFormat) -> Result<()> {
    let analyzer = config.lexicon.build_analyzer()?;
    let controller = LiveAnalysisController::new(analyzer, config.live)?;
    info!("Reading field contents from stdin, one edit per line");

    let stdin = BufReader::new(tokio::io::stdin());
    drive_live(&controller, stdin, |state| {
        println!("{}", render_state(state, format)?);
        Ok(())
    })
    .await?;

    controller.shutdown();
    Ok(())
}

/// Feed each input line to the controller and report every phase change.
///
/// Transitions caused by an edit are read right after `update`, before the
/// channel can coalesce them. At end of input an open debounce window is
/// waited out; the teardown `Idle` is not reported.
async fn drive_live<R, F>(controller: &LiveAnalysisController, input: R, mut emit: F) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&AnalysisState) -> Result<()>,
{
    let mut rx = controller.subscribe();
    let mut last = rx.borrow_and_update().phase;
    let mut lines = input.lines();

    loop {
        let state = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                controller.update(line)?;
                rx.borrow_and_update().clone()
            }
            changed = rx.changed() => {
                changed.context("controller closed while reading input")?;
                rx.borrow_and_update().clone()
            }
        };

        if state.phase != last {
            last = state.phase;
            emit(&state)?;
        }
    }

    if last == AnalysisPhase::Thinking {
        let state = rx
            .wait_for(|state| state.phase != AnalysisPhase::Thinking)
            .await
            .context("controller closed while analysis was pending")?
            .clone();
        emit(&state)?;
    }

    Ok(())
}

/// JSON line for one published state
#[derive(Serialize)]
struct StateLine<'a> {
    phase: AnalysisPhase,
    snapshot: Option<&'a PredictionSnapshot>,
}

fn render_state(state: &AnalysisState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&StateLine {
            phase: state.phase,
            snapshot: state.visible_snapshot(),
        })?),
        OutputFormat::Text => Ok(match state.visible_snapshot() {
            Some(snapshot) => format!("[{}] {}", state.phase, render_snapshot(snapshot, format)?),
            None => format!("[{}]", state.phase),
        }),
    }
}

fn render_snapshot(snapshot: &PredictionSnapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(snapshot.to_json()?),
        OutputFormat::Text => {
            let keywords = if snapshot.matched_keywords.is_empty() {
                "no keywords detected".to_string()
            } else {
                snapshot.matched_keywords.join(", ")
            };
            Ok(format!(
                "category={} ({}%) [{}] urgency={} ({})",
                snapshot.category,
                snapshot.category_confidence,
                keywords,
                snapshot.urgency,
                snapshot.urgency_score
            ))
        }
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("campuswatch=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("campuswatch=info"))
    };

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
