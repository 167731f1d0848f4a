//! External packaging toolchain
//!
//! The build and install drivers run an external program with the workspace as
//! the child's working directory. stdio is inherited so the tools' own output
//! is what the user sees. Success is a zero exit status and nothing more.
//!
//! No timeout is applied: a hung tool hangs the run.

mod build;
mod install;

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

pub use build::{BuildOutput, SetuptoolsBuilder};
pub use install::PipInstaller;

/// Default interpreter used for the build step
pub const DEFAULT_PYTHON: &str = "python";
/// Default installer used for the install step
pub const DEFAULT_PIP: &str = "pip";

/// Why an external command did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandFailure {
    NotFound { program: String },
    Spawn { reason: String },
    Exit { code: Option<i32> },
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { program } => write!(f, "`{program}` was not found on PATH"),
            Self::Spawn { reason } => write!(f, "could not be started: {reason}"),
            Self::Exit { code: Some(code) } => write!(f, "exited with status {code}"),
            Self::Exit { code: None } => write!(f, "was terminated by a signal"),
        }
    }
}

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn resolve(&self) -> Result<PathBuf, CommandFailure> {
        which::which(&self.program).map_err(|_| CommandFailure::NotFound {
            program: self.program.clone(),
        })
    }

    /// Run to completion with `dir` as the working directory
    pub fn run_in(&self, dir: &Path) -> Result<(), CommandFailure> {
        let program = self.resolve()?;
        log::debug!("Running `{self}` in {}", dir.display());

        let status: ExitStatus = Command::new(&program)
            .args(&self.args)
            .current_dir(dir)
            .status()
            .map_err(|e| CommandFailure::Spawn {
                reason: e.to_string(),
            })?;

        log::debug!("`{self}` finished with {status}");
        if status.success() {
            Ok(())
        } else {
            Err(CommandFailure::Exit {
                code: status.code(),
            })
        }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
