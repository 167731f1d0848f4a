//! Packaging pipeline
//!
//! Runs one [`RunRequest`] through the fixed sequence:
//! 1. Acquire a fresh workspace
//! 2. Fetch the repository into it
//! 3. Write `setup.py` and `README.md` (after the fetch, so the clone cannot
//!    overwrite them)
//! 4. Build distributions
//! 5. Install the project
//! 6. Release the workspace, on every path
//!
//! The first failing step ends the run in [`PipelineState::Failed`]. Nothing is
//! retried or rolled back; the only cleanup is the workspace release.

mod state;
mod steps;


use std::path::{Path, PathBuf};

use crate::error::{Repo2PkgError, Result};
use crate::interrupt::Interrupt;
use crate::metadata;
use crate::request::RunRequest;
use crate::toolchain::BuildOutput;
use crate::workspace::Workspace;

pub use state::{PipelineObserver, PipelineState};
pub use steps::{Fetcher, PackageBuilder, PackageInstaller};

/// What a successful run reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub package: String,
    pub version: String,
    /// Archive file names produced by the build
    pub archives: Vec<String>,
}

impl RunOutcome {
    /// Final line shown to the user
    pub fn message(&self) -> String {
        format!("Package '{}' installed globally.", self.package)
    }
}

/// Orchestrates fetch, metadata generation, build and install
pub struct Pipeline<'a> {
    fetcher: &'a dyn Fetcher,
    builder: &'a dyn PackageBuilder,
    installer: &'a dyn PackageInstaller,
    observer: Option<&'a dyn PipelineObserver>,
    interrupt: Interrupt,
    workspace_base: Option<PathBuf>,
    state: PipelineState,
    history: Vec<PipelineState>,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        fetcher: &'a dyn Fetcher,
        builder: &'a dyn PackageBuilder,
        installer: &'a dyn PackageInstaller,
    ) -> Self {
        Self {
            fetcher,
            builder,
            installer,
            observer: None,
            interrupt: Interrupt::new(),
            workspace_base: None,
            state: PipelineState::Idle,
            history: vec![PipelineState::Idle],
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: &'a dyn PipelineObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    #[must_use]
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Create the workspace under `base` instead of the system temp directory
    #[cfg(test)]
    #[must_use]
    pub fn with_workspace_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.workspace_base = Some(base.into());
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Every state this pipeline has been in, starting with `Idle`
    pub fn history(&self) -> &[PipelineState] {
        &self.history
    }

    /// Run the request to a terminal state.
    ///
    /// Each call starts over from `Idle` with a fresh history.
    pub fn run(&mut self, request: &RunRequest) -> Result<RunOutcome> {
        self.state = PipelineState::Idle;
        self.history = vec![PipelineState::Idle];

        let acquired = match &self.workspace_base {
            Some(base) => Workspace::acquire_in(base),
            None => Workspace::acquire(),
        };
        let workspace = match acquired {
            Ok(workspace) => workspace,
            Err(e) => {
                self.transition(PipelineState::Failed);
                return Err(e);
            }
        };

        let steps = self.run_steps(workspace.path(), request);
        let released = workspace.release();

        match (steps, released) {
            (Ok(output), Ok(())) => {
                self.transition(PipelineState::Done);
                Ok(RunOutcome {
                    package: request.metadata.name.clone(),
                    version: request.metadata.version.clone(),
                    archives: output.file_names(),
                })
            }
            (Ok(_), Err(release_error)) => {
                self.transition(PipelineState::Failed);
                Err(release_error)
            }
            (Err(step_error), released) => {
                if let Err(release_error) = released {
                    log::warn!("{release_error}");
                }
                self.transition(PipelineState::Failed);
                Err(step_error)
            }
        }
    }

    fn run_steps(&mut self, workspace: &Path, request: &RunRequest) -> Result<BuildOutput> {
        let (fetcher, builder, installer) = (self.fetcher, self.builder, self.installer);

        self.enter(PipelineState::Fetching)?;
        self.settle(fetcher.fetch(&request.source, workspace))?;

        self.enter(PipelineState::GeneratingMetadata)?;
        metadata::write_build_descriptor(workspace, &request.metadata)?;
        metadata::write_readme(workspace, &request.metadata.name)?;

        self.enter(PipelineState::Building)?;
        let output = self.settle(builder.build(workspace))?;

        self.enter(PipelineState::Installing)?;
        self.settle(installer.install(workspace))?;

        Ok(output)
    }

    /// Move to `next` unless an interrupt is pending
    fn enter(&mut self, next: PipelineState) -> Result<()> {
        self.interrupt.check()?;
        self.transition(next);
        Ok(())
    }

    /// A step that failed while an interrupt was pending counts as interrupted
    fn settle<T>(&self, result: Result<T>) -> Result<T> {
        match result {
            Err(_) if self.interrupt.is_raised() => Err(Repo2PkgError::Interrupted),
            other => other,
        }
    }

    fn transition(&mut self, to: PipelineState) {
        let from = self.state;
        debug_assert!(
            from.can_transition_to(to),
            "invalid transition {from} -> {to}"
        );
        log::debug!("Pipeline {from} -> {to}");

        if let Some(observer) = self.observer {
            observer.on_transition(from, to);
        }
        self.state = to;
        self.history.push(to);
    }
}
