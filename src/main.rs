//! repo2pkg - turn a Git repository into an installed Python package
//!
//! Clones a repository into a temporary workspace, scaffolds `setup.py` and
//! `README.md`, builds distributions with setuptools and installs them with pip.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod error;
mod git;
mod interrupt;
mod metadata;
mod pipeline;
mod progress;
mod prompt;
mod request;
mod toolchain;
mod workspace;

#[cfg(test)]
mod test_fixtures;

use cli::Cli;
use interrupt::Interrupt;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let interrupt = Interrupt::new();
    if let Err(e) = interrupt.install_handler() {
        log::warn!("Failed to set signal handler: {e}");
    }

    if let Err(e) = commands::package::run(&cli, &interrupt) {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(e.exit_code());
    }
}
