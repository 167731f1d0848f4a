//! URL normalization for libgit2

use std::borrow::Cow;

/// Rewrite SCP-style `git@host:path` as `ssh://git@host/path`.
///
/// libgit2 handles the explicit form more reliably.
pub fn normalize_ssh_url_for_clone(url: &str) -> Cow<'_, str> {
    if !url.starts_with("git@") {
        return Cow::Borrowed(url);
    }

    match url.split_once(':') {
        Some((host, path)) => {
            let path = path.strip_prefix('/').unwrap_or(path);
            Cow::Owned(format!("ssh://{host}/{path}"))
        }
        None => Cow::Borrowed(url),
    }
}

/// Give relative or backslashed `file://` URLs an absolute form libgit2 accepts
pub fn normalize_file_url_for_clone(url: &str) -> Cow<'_, str> {
    let Some(rest) = url.strip_prefix("file://") else {
        return Cow::Borrowed(url);
    };
    if rest.contains('\\') {
        let rest = rest.replace('\\', "/");
        let rest = rest.trim_start_matches('/');
        return Cow::Owned(format!("file:///{rest}"));
    }
    if !rest.is_empty() && !rest.starts_with('/') {
        return Cow::Owned(format!("file:///{rest}"));
    }
    Cow::Borrowed(url)
}
