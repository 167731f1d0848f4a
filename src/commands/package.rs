//! Package command implementation
//!
//! 1. Validate the package name
//! 2. Collect package options (flags, then prompts) into a run request
//! 3. Run the pipeline with the real git fetcher, setuptools and pip
//! 4. Print the outcome

use std::io::IsTerminal;

use console::Style;

use crate::cli::Cli;
use crate::error::Result;
use crate::git::GitFetcher;
use crate::interrupt::Interrupt;
use crate::pipeline::Pipeline;
use crate::progress::StepReporter;
use crate::prompt::{self, Prompter, TerminalPrompter};
use crate::request::{self, RunRequest};
use crate::toolchain::{PipInstaller, SetuptoolsBuilder};

pub fn run(cli: &Cli, interrupt: &Interrupt) -> Result<()> {
    // Reject a bad name before asking anything else
    request::validate_package_name(&cli.package_name)?;

    let interactive = !cli.no_input && std::io::stdin().is_terminal();
    let prompter = TerminalPrompter;
    let prompter: Option<&dyn Prompter> = if interactive { Some(&prompter) } else { None };

    let options = prompt::collect_options(cli.preset_options(), prompter)?;
    let request = RunRequest::new(&cli.source, &cli.package_name, options)?;
    log::debug!("Run request: {request:?}");

    let fetcher = GitFetcher::new(interrupt.clone()).with_progress(console::user_attended_stderr());
    let builder = SetuptoolsBuilder::new(cli.python.clone());
    let installer = PipInstaller::new(cli.pip.clone());
    let reporter = StepReporter;

    let mut pipeline = Pipeline::new(&fetcher, &builder, &installer)
        .with_observer(&reporter)
        .with_interrupt(interrupt.clone());
    let result = pipeline.run(&request);
    log::debug!(
        "Pipeline ended {} after {:?}",
        pipeline.state(),
        pipeline.history()
    );
    let outcome = result?;

    log::info!("Installed {} {}", outcome.package, outcome.version);
    for archive in &outcome.archives {
        log::info!("Built {archive}");
    }
    println!("{}", Style::new().bold().green().apply_to(outcome.message()));
    Ok(())
}
