//! Error types and handling for repo2pkg
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Coarse error category, one per pipeline concern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Workspace,
    Fetch,
    Metadata,
    Build,
    Install,
    Interrupted,
}

/// Main error type for repo2pkg operations
#[derive(Error, Diagnostic, Debug)]
pub enum Repo2PkgError {
    // Input errors
    #[error("Invalid package name: '{name}'")]
    #[diagnostic(
        code(repo2pkg::input::invalid_package_name),
        help(
            "Package names use ASCII letters, digits, '.', '_' and '-', \
             and start and end with a letter or digit"
        )
    )]
    InvalidPackageName { name: String },

    #[error("Invalid source location: {reason}")]
    #[diagnostic(
        code(repo2pkg::input::invalid_source),
        help("Pass a Git URL (https://, ssh://, git@host:path, file://) or a local repository path")
    )]
    InvalidSource { reason: String },

    #[error("Failed to read '{field}' from the terminal: {reason}")]
    #[diagnostic(
        code(repo2pkg::input::prompt_failed),
        help("Pass the value as a flag, or use --no-input to accept defaults")
    )]
    PromptFailed { field: String, reason: String },

    // Workspace errors
    #[error("Failed to create workspace in {base}: {reason}")]
    #[diagnostic(
        code(repo2pkg::workspace::create_failed),
        help("Check that the temporary directory exists and is writable")
    )]
    WorkspaceCreateFailed { base: String, reason: String },

    #[error("Failed to remove workspace {path}: {reason}")]
    #[diagnostic(code(repo2pkg::workspace::remove_failed))]
    WorkspaceRemoveFailed { path: String, reason: String },

    // Fetch errors
    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(repo2pkg::git::clone_failed),
        help("Check that URL is correct and you have access to the repository")
    )]
    CloneFailed { url: String, reason: String },

    // Metadata errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(repo2pkg::metadata::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Toolchain errors
    #[error("Build failed: `{command}` {reason}")]
    #[diagnostic(
        code(repo2pkg::build::failed),
        help("See the build tool output above; use --python to pick another interpreter")
    )]
    BuildFailed { command: String, reason: String },

    #[error("Install failed: `{command}` {reason}")]
    #[diagnostic(
        code(repo2pkg::install::failed),
        help("See the installer output above; use --pip to pick another installer")
    )]
    InstallFailed { command: String, reason: String },

    #[error("Interrupted")]
    #[diagnostic(code(repo2pkg::interrupted))]
    Interrupted,
}

impl Repo2PkgError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPackageName { .. }
            | Self::InvalidSource { .. }
            | Self::PromptFailed { .. } => ErrorKind::Input,
            Self::WorkspaceCreateFailed { .. } | Self::WorkspaceRemoveFailed { .. } => {
                ErrorKind::Workspace
            }
            Self::CloneFailed { .. } => ErrorKind::Fetch,
            Self::FileWriteFailed { .. } => ErrorKind::Metadata,
            Self::BuildFailed { .. } => ErrorKind::Build,
            Self::InstallFailed { .. } => ErrorKind::Install,
            Self::Interrupted => ErrorKind::Interrupted,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            // 128 + SIGINT, like a shell would report
            ErrorKind::Interrupted => 130,
            _ => 1,
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, Repo2PkgError>;
