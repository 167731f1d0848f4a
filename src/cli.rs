//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

use crate::prompt::PresetOptions;
use crate::toolchain::{DEFAULT_PIP, DEFAULT_PYTHON};

/// repo2pkg - turn a Git repository into an installed Python package
///
/// Clones the repository into a temporary workspace, writes setup.py and README.md,
/// builds source and wheel distributions, and installs the result with pip.
#[derive(Parser, Debug)]
#[command(
    name = "repo2pkg",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Turn a Git repository into a Python package and install it",
    after_help = "EXAMPLES:\n  \
                  Package a GitHub repository (prompts for the rest):\n    \
                  repo2pkg https://github.com/author/tool.git tool\n\n  \
                  Non-interactive:\n    \
                  repo2pkg git@github.com:author/tool.git tool --package-version 1.2.0 \\\n      \
                  --description \"Handy tool\" --author \"Jane Doe\" --author-email jane@example.com --no-input\n\n  \
                  Use a specific interpreter:\n    \
                  repo2pkg ./tool tool --python python3 --pip pip3"
)]
pub struct Cli {
    /// Source repository location (URL or local path)
    pub source: String,

    /// Desired package name
    pub package_name: String,

    /// Package version (prompted for when omitted, defaults to 0.1.0)
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Package description
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Package author
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Package author's email
    #[arg(long, value_name = "EMAIL")]
    pub author_email: Option<String>,

    /// Never prompt; missing values take their defaults
    #[arg(long)]
    pub no_input: bool,

    /// Python interpreter used to build distributions
    #[arg(long, value_name = "PROGRAM", env = "REPO2PKG_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// Installer used to install the package
    #[arg(long, value_name = "PROGRAM", env = "REPO2PKG_PIP", default_value = DEFAULT_PIP)]
    pub pip: String,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Metadata options given as flags
    pub fn preset_options(&self) -> PresetOptions {
        PresetOptions {
            version: self.package_version.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            author_email: self.author_email.clone(),
        }
    }
}
