//! Install driver: `pip install .`

use std::path::Path;

use super::{DEFAULT_PIP, ExternalCommand};
use crate::error::{Repo2PkgError, Result};
use crate::pipeline::PackageInstaller;

/// Installs the workspace project in place with pip
#[derive(Debug, Clone)]
pub struct PipInstaller {
    pip: String,
}

impl Default for PipInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_PIP)
    }
}

impl PipInstaller {
    pub fn new(pip: impl Into<String>) -> Self {
        Self { pip: pip.into() }
    }

    pub fn command(&self) -> ExternalCommand {
        ExternalCommand::new(self.pip.clone(), ["install", "."])
    }
}

impl PackageInstaller for PipInstaller {
    fn install(&self, workspace: &Path) -> Result<()> {
        let command = self.command();
        command
            .run_in(workspace)
            .map_err(|failure| Repo2PkgError::InstallFailed {
                command: command.to_string(),
                reason: failure.to_string(),
            })
    }
}
