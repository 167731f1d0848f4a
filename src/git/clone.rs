//! Repository cloning

use std::fs;
use std::path::Path;

use git2::{FetchOptions, RemoteCallbacks, Repository, build::RepoBuilder};
use indicatif::ProgressBar;

use super::auth::setup_auth_callbacks;
use super::error::interpret_git_error;
use super::url::{normalize_file_url_for_clone, normalize_ssh_url_for_clone};
use crate::error::{Repo2PkgError, Result};
use crate::interrupt::Interrupt;
use crate::progress;

/// Fully clone `url` into the empty directory `target`.
///
/// Transfer progress is reported on `bar`. The transfer is aborted once
/// `interrupt` is raised.
pub fn clone(
    url: &str,
    target: &Path,
    interrupt: &Interrupt,
    bar: &ProgressBar,
) -> Result<Repository> {
    interrupt.check()?;
    ensure_empty(url, target)?;

    let mut callbacks = RemoteCallbacks::new();
    setup_auth_callbacks(&mut callbacks);
    callbacks.transfer_progress(|stats| {
        progress::update_transfer(bar, stats.received_objects(), stats.total_objects());
        !interrupt.is_raised()
    });

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    let url_to_clone = normalize_ssh_url_for_clone(url);
    let url_to_clone = normalize_file_url_for_clone(&url_to_clone);
    log::debug!("Cloning {} into {}", url_to_clone, target.display());

    builder.clone(url_to_clone.as_ref(), target).map_err(|e| {
        if interrupt.is_raised() {
            return Repo2PkgError::Interrupted;
        }
        Repo2PkgError::CloneFailed {
            url: url.to_string(),
            reason: interpret_git_error(&e),
        }
    })
}

fn ensure_empty(url: &str, target: &Path) -> Result<()> {
    let clone_failed = |reason: String| Repo2PkgError::CloneFailed {
        url: url.to_string(),
        reason,
    };

    let mut entries = fs::read_dir(target).map_err(|e| {
        clone_failed(format!(
            "cannot read destination {}: {e}",
            target.display()
        ))
    })?;
    if entries.next().is_some() {
        return Err(clone_failed("destination directory is not empty".to_string()));
    }
    Ok(())
}
