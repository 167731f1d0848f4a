//! Ctrl-C and termination handling
//!
//! SIGINT, SIGTERM and SIGHUP (Ctrl-C and console close on Windows) all land
//! on the same handler. It does not terminate the process. It raises a shared
//! flag which the pipeline polls between steps and the clone polls during
//! transfer, so an interrupted run still unwinds through workspace release.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Repo2PkgError, Result};

/// Shared interrupt flag
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route interrupt and termination signals to this flag for the rest of the process
    pub fn install_handler(&self) -> std::result::Result<(), ctrlc::Error> {
        let raised = Arc::clone(&self.raised);
        ctrlc::set_handler(move || {
            if raised.swap(true, Ordering::SeqCst) {
                log::warn!("Interrupt already pending, waiting for the current step to stop");
            } else {
                log::info!("Received interrupt, stopping after the current step");
            }
        })
    }

    #[cfg(test)]
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Fail with [`Repo2PkgError::Interrupted`] once the flag is raised
    pub fn check(&self) -> Result<()> {
        if self.is_raised() {
            return Err(Repo2PkgError::Interrupted);
        }
        Ok(())
    }
}
