//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! let (temp, repo_path) = create_committed_repo();
//! assert!(repo_path.join("module.py").exists());
//! ```

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Create a temp directory holding a git repository with one commit.
///
/// The commit contains `module.py` and is made on `HEAD` with the message
/// `Initial commit`.
///
/// # Panics
///
/// Panics if any step fails.
#[must_use]
pub fn create_committed_repo() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let path = temp.path().join("upstream");
    std::fs::create_dir(&path).expect("Failed to create repository directory");

    let repo = git2::Repository::init(&path).expect("Failed to init git repository");
    std::fs::write(path.join("module.py"), "VALUE = 1\n").expect("Failed to write module");

    let mut index = repo.index().expect("Failed to open index");
    index
        .add_path(Path::new("module.py"))
        .expect("Failed to stage module");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");

    let signature =
        git2::Signature::now("Test", "test@example.com").expect("Failed to create signature");
    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        "Initial commit",
        &tree,
        &[],
    )
    .expect("Failed to commit");

    (temp, path)
}
