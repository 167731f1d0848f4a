//! Packaging metadata generation
//!
//! Renders the `setup.py` build descriptor and the `README.md` from a
//! [`PackageMetadata`] and writes them into a workspace. Rendering is pure;
//! writing replaces whatever the clone left under the same name.

mod descriptor;
mod readme;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Repo2PkgError, Result};
use crate::request::PackageMetadata;

use descriptor::{BUILD_DESCRIPTOR_FILE, render_build_descriptor};
use readme::README_FILE;
pub use readme::render_readme;

/// Write `setup.py` into `destination`
pub fn write_build_descriptor(destination: &Path, metadata: &PackageMetadata) -> Result<PathBuf> {
    let path = destination.join(BUILD_DESCRIPTOR_FILE);
    replace_file(&path, &render_build_descriptor(metadata))?;
    Ok(path)
}

/// Write `README.md` into `destination`
pub fn write_readme(destination: &Path, package_name: &str) -> Result<PathBuf> {
    let path = destination.join(README_FILE);
    replace_file(&path, &render_readme(package_name))?;
    Ok(path)
}

/// Write `contents` to `path` as a fresh regular file.
///
/// A symlink at `path` is removed rather than followed, so a cloned repository
/// cannot redirect the write outside the workspace.
fn replace_file(path: &Path, contents: &str) -> Result<()> {
    let write_failed = |reason: String| Repo2PkgError::FileWriteFailed {
        path: path.display().to_string(),
        reason,
    };

    if let Ok(existing) = fs::symlink_metadata(path) {
        if existing.is_dir() {
            return Err(write_failed("a directory exists at this path".to_string()));
        }
        if existing.file_type().is_symlink() {
            fs::remove_file(path).map_err(|e| write_failed(e.to_string()))?;
        }
    }

    fs::write(path, contents).map_err(|e| write_failed(e.to_string()))?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}
