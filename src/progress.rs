//! Progress display for packaging runs

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::pipeline::{PipelineObserver, PipelineState};

/// Progress bar for clone transfer, hidden unless `visible`
pub fn transfer_bar(visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::with_template("  [{bar:40.cyan/blue}] {pos}/{len} objects {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    let bar = ProgressBar::new(0);
    bar.set_style(style);
    bar
}

/// Reflect libgit2 transfer counters on `bar`
pub fn update_transfer(bar: &ProgressBar, received: usize, total: usize) {
    let total = u64::try_from(total).unwrap_or(u64::MAX);
    if bar.length() != Some(total) {
        bar.set_length(total);
    }
    bar.set_position(u64::try_from(received).unwrap_or(u64::MAX));
}

/// Prints one header line per pipeline step
#[derive(Debug, Default)]
pub struct StepReporter;

impl StepReporter {
    fn header(state: PipelineState) -> Option<&'static str> {
        match state {
            PipelineState::Fetching => Some("Cloning repository"),
            PipelineState::GeneratingMetadata => Some("Writing setup.py and README.md"),
            PipelineState::Building => Some("Building distributions"),
            PipelineState::Installing => Some("Installing package"),
            PipelineState::Idle | PipelineState::Done | PipelineState::Failed => None,
        }
    }
}

impl PipelineObserver for StepReporter {
    fn on_transition(&self, _from: PipelineState, to: PipelineState) {
        if let Some(header) = Self::header(to) {
            eprintln!("{} {}", Style::new().bold().cyan().apply_to("==>"), header);
        }
    }
}
