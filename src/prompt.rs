//! Interactive collection of package options
//!
//! Values given on the command line are used as-is. Anything missing is asked
//! for once, before the pipeline starts, or defaulted when prompting is off.

use inquire::{InquireError, Text};

use crate::error::{Repo2PkgError, Result};
use crate::request::{DEFAULT_VERSION, PackageOptions, normalize_version};

/// Options as given on the command line, each possibly missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetOptions {
    pub version: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
}

/// Source of answers for missing options
pub trait Prompter {
    fn ask(&self, message: &str, default: Option<&str>) -> Result<String>;
}

/// Prompts on the terminal with inquire
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, message: &str, default: Option<&str>) -> Result<String> {
        let mut prompt = Text::new(message);
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        prompt.prompt().map_err(|e| match e {
            InquireError::OperationInterrupted => Repo2PkgError::Interrupted,
            other => Repo2PkgError::PromptFailed {
                field: message.trim_end_matches(':').to_string(),
                reason: other.to_string(),
            },
        })
    }
}

/// Fill every missing option, asking `prompter` when there is one
pub fn collect_options(
    preset: PresetOptions,
    prompter: Option<&dyn Prompter>,
) -> Result<PackageOptions> {
    let ask = |value: Option<String>, message: &str, default: Option<&str>| -> Result<String> {
        match (value, prompter) {
            (Some(value), _) => Ok(value),
            (None, Some(prompter)) => prompter.ask(message, default),
            (None, None) => Ok(default.unwrap_or_default().to_string()),
        }
    };

    let version = ask(preset.version, "Package version:", Some(DEFAULT_VERSION))?;
    let description = ask(preset.description, "Package description:", None)?;
    let author = ask(preset.author, "Package author:", None)?;
    let author_email = ask(preset.author_email, "Package author's email:", None)?;

    Ok(PackageOptions {
        version: normalize_version(&version),
        description,
        author,
        author_email,
    })
}
