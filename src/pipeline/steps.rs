//! Collaborator seams of the pipeline
//!
//! Each external step sits behind a trait so the orchestrator can run against
//! fakes in tests instead of spawning git, python and pip.

use std::path::Path;

use crate::error::Result;
use crate::toolchain::BuildOutput;

/// Materializes a repository into an empty directory
pub trait Fetcher {
    fn fetch(&self, source: &str, destination: &Path) -> Result<()>;
}

/// Produces distributable archives from a prepared workspace
pub trait PackageBuilder {
    fn build(&self, workspace: &Path) -> Result<BuildOutput>;
}

/// Installs the project in a prepared workspace
pub trait PackageInstaller {
    fn install(&self, workspace: &Path) -> Result<()>;
}
