//! Common test utilities for repo2pkg integration tests

#![allow(dead_code, clippy::expect_used)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch area holding an upstream repository and helper scripts
pub struct TestEnv {
    pub temp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        Self { temp }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Create a git repository with one committed file and return its path
    pub fn create_upstream_repo(&self) -> PathBuf {
        let path = self.path().join("upstream");
        std::fs::create_dir_all(&path).expect("Failed to create upstream directory");
        let repo = git2::Repository::init(&path).expect("Failed to init repository");

        std::fs::create_dir_all(path.join("examplepkg")).expect("Failed to create package dir");
        std::fs::write(path.join("examplepkg/__init__.py"), "VALUE = 1\n")
            .expect("Failed to write module");

        let mut index = repo.index().expect("Failed to open index");
        index
            .add_path(Path::new("examplepkg/__init__.py"))
            .expect("Failed to stage module");
        index.write().expect("Failed to write index");
        let tree = repo
            .find_tree(index.write_tree().expect("Failed to write tree"))
            .expect("Failed to find tree");
        let signature =
            git2::Signature::now("Test", "test@example.com").expect("Failed to create signature");
        repo.commit(Some("HEAD"), &signature, &signature, "Initial commit", &tree, &[])
            .expect("Failed to commit");

        path
    }

    /// Write an executable shell script and return its path
    #[cfg(unix)]
    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write script");
        let mut permissions = std::fs::metadata(&path)
            .expect("Failed to stat script")
            .permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(&path, permissions).expect("Failed to chmod script");
        path
    }
}

/// The repo2pkg binary with a clean toolchain environment
#[allow(deprecated)]
pub fn repo2pkg_cmd() -> Command {
    let mut cmd = Command::cargo_bin("repo2pkg").expect("Failed to find repo2pkg binary");
    cmd.env_remove("REPO2PKG_PYTHON")
        .env_remove("REPO2PKG_PIP")
        .env_remove("RUST_LOG");
    cmd
}
