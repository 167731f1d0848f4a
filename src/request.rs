//! Run request and package metadata
//!
//! Everything the pipeline needs is collected here before it starts. Nothing
//! inside the pipeline prompts or reads the environment.

use crate::error::{Repo2PkgError, Result};

/// Version used when none is given, or when the given one is blank
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Package options that are not positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOptions {
    pub version: String,
    pub description: String,
    pub author: String,
    pub author_email: String,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            description: String::new(),
            author: String::new(),
            author_email: String::new(),
        }
    }
}

/// Trimmed version, or the default when blank
pub fn normalize_version(version: &str) -> String {
    let version = version.trim();
    if version.is_empty() {
        DEFAULT_VERSION.to_string()
    } else {
        version.to_string()
    }
}

/// Fields that end up in the generated build descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub author_email: String,
}

/// One packaging run: where to clone from and what to call the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub source: String,
    pub metadata: PackageMetadata,
}

impl RunRequest {
    /// Validate inputs and build the request
    pub fn new(source: &str, name: &str, options: PackageOptions) -> Result<Self> {
        let source = source.trim();
        if source.is_empty() {
            return Err(Repo2PkgError::InvalidSource {
                reason: "source location is empty".to_string(),
            });
        }
        validate_package_name(name)?;

        Ok(Self {
            source: source.to_string(),
            metadata: PackageMetadata {
                name: name.to_string(),
                version: normalize_version(&options.version),
                description: options.description,
                author: options.author,
                author_email: options.author_email,
            },
        })
    }
}

/// Check a distribution name.
///
/// Accepts ASCII letters, digits, `.`, `_` and `-`, starting and ending with a
/// letter or digit. Names that pass are safe to embed in both generated files
/// without escaping.
pub fn validate_package_name(name: &str) -> Result<()> {
    let invalid = || Repo2PkgError::InvalidPackageName {
        name: name.to_string(),
    };

    let (Some(first), Some(last)) = (name.chars().next(), name.chars().last()) else {
        return Err(invalid());
    };
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return Err(invalid());
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(invalid());
    }
    Ok(())
}
