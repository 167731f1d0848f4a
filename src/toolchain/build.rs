//! Build driver: `python setup.py sdist bdist_wheel`

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{DEFAULT_PYTHON, ExternalCommand};
use crate::error::{Repo2PkgError, Result};
use crate::pipeline::PackageBuilder;

/// Directory setuptools writes archives to
pub const DIST_DIR: &str = "dist";

/// Archives found after a successful build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutput {
    pub archives: Vec<PathBuf>,
}

impl BuildOutput {
    /// Archive file names, without the workspace path
    pub fn file_names(&self) -> Vec<String> {
        self.archives
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }
}

/// Files directly under `<workspace>/dist`, sorted.
///
/// Informational only: a missing `dist` yields an empty list.
pub fn collect_archives(workspace: &Path) -> Vec<PathBuf> {
    let dist = workspace.join(DIST_DIR);
    if !dist.is_dir() {
        return Vec::new();
    }

    WalkDir::new(&dist)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Builds source and wheel distributions with setuptools
#[derive(Debug, Clone)]
pub struct SetuptoolsBuilder {
    python: String,
}

impl Default for SetuptoolsBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON)
    }
}

impl SetuptoolsBuilder {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    pub fn command(&self) -> ExternalCommand {
        ExternalCommand::new(self.python.clone(), ["setup.py", "sdist", "bdist_wheel"])
    }
}

impl PackageBuilder for SetuptoolsBuilder {
    fn build(&self, workspace: &Path) -> Result<BuildOutput> {
        let command = self.command();
        command
            .run_in(workspace)
            .map_err(|failure| Repo2PkgError::BuildFailed {
                command: command.to_string(),
                reason: failure.to_string(),
            })?;

        let archives = collect_archives(workspace);
        log::debug!("Build produced {} archive(s)", archives.len());
        Ok(BuildOutput { archives })
    }
}
