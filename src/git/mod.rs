//! Repository fetching
//!
//! This module handles:
//! - Full clones of HTTPS, SSH and local repositories into a workspace
//! - URL normalization for libgit2
//! - Authentication via git's native credential system
//! - Turning libgit2 errors into short, user-facing reasons

mod auth;
mod clone;
mod error;
mod url;

use std::path::Path;

use crate::error::Result;
use crate::interrupt::Interrupt;
use crate::pipeline::Fetcher;
use crate::progress;

pub use clone::clone;

/// [`Fetcher`] backed by libgit2
#[derive(Debug, Clone)]
pub struct GitFetcher {
    interrupt: Interrupt,
    show_progress: bool,
}

impl GitFetcher {
    pub fn new(interrupt: Interrupt) -> Self {
        Self {
            interrupt,
            show_progress: false,
        }
    }

    /// Draw a transfer progress bar while cloning
    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl Fetcher for GitFetcher {
    fn fetch(&self, source: &str, destination: &Path) -> Result<()> {
        let bar = progress::transfer_bar(self.show_progress);
        let result = clone(source, destination, &self.interrupt, &bar);
        match result {
            Ok(_) => bar.finish_and_clear(),
            Err(_) => bar.abandon(),
        }
        result.map(|_| ())
    }
}
