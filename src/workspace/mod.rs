//! Ephemeral workspace for a single packaging run
//!
//! A workspace is an empty, uniquely named directory owned by exactly one run.
//! It is created before the fetch and removed after the install, or after the
//! first failing step. `release` consumes the workspace so a directory can only
//! be released once; a workspace dropped without `release` is still removed.

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Repo2PkgError, Result};

/// Prefix for workspace directory names
const WORKSPACE_PREFIX: &str = "repo2pkg-";

/// Base directory for workspaces.
///
/// Never relative, so a `TMPDIR=tmp` environment cannot place a workspace
/// (and its clone) under the current working directory.
pub fn temp_base() -> PathBuf {
    let base = env::temp_dir();
    if base.is_absolute() {
        return base;
    }

    #[cfg(windows)]
    {
        env::var("TEMP")
            .or_else(|_| env::var("TMP"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/tmp")
    }
}

/// An exclusively owned temporary directory
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace under [`temp_base`]
    pub fn acquire() -> Result<Self> {
        Self::acquire_in(&temp_base())
    }

    /// Create a fresh workspace under `base`
    pub fn acquire_in(base: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(base)
            .map_err(|e| Repo2PkgError::WorkspaceCreateFailed {
                base: base.display().to_string(),
                reason: e.to_string(),
            })?;

        log::debug!("Acquired workspace {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Recursively delete the workspace directory
    pub fn release(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .map_err(|e| Repo2PkgError::WorkspaceRemoveFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        log::debug!("Released workspace {}", path.display());
        Ok(())
    }
}
