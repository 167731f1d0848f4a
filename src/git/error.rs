//! libgit2 error interpretation

use git2::{Error, ErrorClass, ErrorCode};

/// Turn a libgit2 error into a short reason for the user
pub fn interpret_git_error(err: &Error) -> String {
    let message = err.message().to_lowercase();
    let class = err.class();
    let mentions = |needles: &[&str]| needles.iter().any(|n| message.contains(n));

    // More specific patterns first: a missing remote often shows up as an
    // endless auth loop.
    if err.code() == ErrorCode::NotFound
        || mentions(&[
            "not found",
            "404",
            "too many redirects",
            "authentication replays",
            "does not appear to be a git repository",
        ])
    {
        "Repository not found".to_string()
    } else if err.code() == ErrorCode::Auth || mentions(&["authentication", "credentials"]) {
        "Authentication failed".to_string()
    } else if mentions(&["permission denied", "access denied"]) {
        "Permission denied".to_string()
    } else if mentions(&["connection", "network", "timeout", "timed out", "resolve address"]) {
        "Network error".to_string()
    } else if class == ErrorClass::Http && mentions(&["certificate"]) {
        "Certificate error".to_string()
    } else if class == ErrorClass::Http && mentions(&["ssl"]) {
        "SSL error".to_string()
    } else if class == ErrorClass::Http {
        format!("HTTP error: {}", err.message())
    } else if class == ErrorClass::Ssh {
        format!("SSH error: {}", err.message())
    } else {
        err.message().to_string()
    }
}
