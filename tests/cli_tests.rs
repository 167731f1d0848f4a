//! CLI integration tests using the real repo2pkg binary

mod common;

use std::fs;
use std::path::Path;

use predicates::prelude::*;
use tempfile::TempDir;

fn assert_dir_empty(dir: &Path) {
    let leftovers: Vec<_> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.expect("Failed to read entry").path())
        .collect();
    assert!(leftovers.is_empty(), "workspace left behind: {leftovers:?}");
}

#[test]
fn test_help_output() {
    common::repo2pkg_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Python package"))
        .stdout(predicate::str::contains("<SOURCE>"))
        .stdout(predicate::str::contains("<PACKAGE_NAME>"))
        .stdout(predicate::str::contains("--package-version"))
        .stdout(predicate::str::contains("--no-input"));
}

#[test]
fn test_missing_arguments() {
    common::repo2pkg_cmd()
        .arg("https://example.invalid/repo.git")
        .assert()
        .failure()
        .stderr(predicate::str::contains("PACKAGE_NAME"));
}

#[test]
fn test_invalid_package_name_fails_before_clone() {
    let tmp = TempDir::new().expect("Failed to create temp dir");

    common::repo2pkg_cmd()
        .env("TMPDIR", tmp.path())
        .args(["https://example.invalid/repo.git", "bad name", "--no-input"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid package name"))
        .stderr(predicate::str::contains("help:"));

    assert_dir_empty(tmp.path());
}

#[test]
fn test_clone_failure_removes_workspace() {
    let env = common::TestEnv::new();
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let missing = env.path().join("no-such-repo");

    common::repo2pkg_cmd()
        .env("TMPDIR", tmp.path())
        .arg(missing.display().to_string())
        .args(["examplepkg", "--no-input"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to clone repository"))
        .stdout(predicate::str::contains("installed globally").not());

    assert_dir_empty(tmp.path());
}

#[cfg(unix)]
#[test]
fn test_clone_failure_skips_build() {
    let env = common::TestEnv::new();
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let marker = env.path().join("built");
    let python = env.write_script("fake-python", &format!("touch '{}'", marker.display()));

    common::repo2pkg_cmd()
        .env("TMPDIR", tmp.path())
        .arg(env.path().join("no-such-repo").display().to_string())
        .args(["examplepkg", "--no-input", "--python"])
        .arg(&python)
        .assert()
        .failure();

    assert!(!marker.exists());
    assert_dir_empty(tmp.path());
}

#[cfg(unix)]
#[test]
fn test_end_to_end_with_fake_toolchain() {
    let env = common::TestEnv::new();
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let upstream = env.create_upstream_repo();
    let capture = env.path().join("capture");
    fs::create_dir_all(&capture).expect("Failed to create capture dir");

    let python = env.write_script(
        "fake-python",
        &format!(
            "set -e\n\
             echo \"$@\" > '{capture}/python-args'\n\
             cp setup.py README.md '{capture}/'\n\
             test -f examplepkg/__init__.py\n\
             mkdir -p dist\n\
             : > dist/examplepkg-0.1.0.tar.gz",
            capture = capture.display()
        ),
    );
    let pip = env.write_script(
        "fake-pip",
        &format!(
            "echo \"$@\" > '{capture}/pip-args'\n\
             test -f dist/examplepkg-0.1.0.tar.gz && : > '{capture}/installed'",
            capture = capture.display()
        ),
    );

    common::repo2pkg_cmd()
        .env("TMPDIR", tmp.path())
        .arg(upstream.display().to_string())
        .args([
            "examplepkg",
            "--package-version",
            "",
            "--description",
            "demo",
            "--author",
            "A",
            "--author-email",
            "a@example.com",
            "--no-input",
            "--python",
        ])
        .arg(&python)
        .arg("--pip")
        .arg(&pip)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Package 'examplepkg' installed globally.",
        ));

    let descriptor = fs::read_to_string(capture.join("setup.py")).expect("setup.py not captured");
    assert!(descriptor.contains("name='examplepkg'"));
    assert!(descriptor.contains("version='0.1.0'"));
    assert!(descriptor.contains("description='demo'"));
    assert!(descriptor.contains("author='A'"));
    assert!(descriptor.contains("author_email='a@example.com'"));

    let readme = fs::read_to_string(capture.join("README.md")).expect("README.md not captured");
    let headings: Vec<&str> = readme.lines().filter(|l| l.starts_with('#')).collect();
    assert_eq!(headings, vec!["# examplepkg"]);

    let python_args =
        fs::read_to_string(capture.join("python-args")).expect("python args not captured");
    assert_eq!(python_args.trim(), "setup.py sdist bdist_wheel");
    let pip_args = fs::read_to_string(capture.join("pip-args")).expect("pip args not captured");
    assert_eq!(pip_args.trim(), "install .");
    assert!(capture.join("installed").exists());

    assert!(!upstream.join("setup.py").exists());
    assert_dir_empty(tmp.path());
}

#[cfg(unix)]
#[test]
fn test_build_failure_skips_install() {
    let env = common::TestEnv::new();
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let upstream = env.create_upstream_repo();
    let marker = env.path().join("installed");
    let python = env.write_script("fake-python", "exit 3");
    let pip = env.write_script("fake-pip", &format!("touch '{}'", marker.display()));

    common::repo2pkg_cmd()
        .env("TMPDIR", tmp.path())
        .env("REPO2PKG_PYTHON", &python)
        .env("REPO2PKG_PIP", &pip)
        .arg(upstream.display().to_string())
        .args(["examplepkg", "--no-input"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Build failed"))
        .stderr(predicate::str::contains("exited with status 3"))
        .stderr(predicate::str::contains("Install failed").not());

    assert!(!marker.exists());
    assert_dir_empty(tmp.path());
}

#[cfg(unix)]
#[test]
fn test_install_failure_is_reported() {
    let env = common::TestEnv::new();
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let upstream = env.create_upstream_repo();
    let python = env.write_script("fake-python", "exit 0");
    let pip = env.write_script("fake-pip", "exit 1");

    common::repo2pkg_cmd()
        .env("TMPDIR", tmp.path())
        .arg(upstream.display().to_string())
        .args(["examplepkg", "--no-input", "--python"])
        .arg(&python)
        .arg("--pip")
        .arg(&pip)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Install failed"))
        .stderr(predicate::str::contains("Build failed").not())
        .stdout(predicate::str::contains("installed globally").not());

    assert_dir_empty(tmp.path());
}

#[test]
fn test_missing_toolchain_is_build_error() {
    let env = common::TestEnv::new();
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let upstream = env.create_upstream_repo();

    common::repo2pkg_cmd()
        .env("TMPDIR", tmp.path())
        .arg(upstream.display().to_string())
        .args([
            "examplepkg",
            "--no-input",
            "--python",
            "repo2pkg-no-such-python",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Build failed"))
        .stderr(predicate::str::contains("was not found on PATH"));

    assert_dir_empty(tmp.path());
}

/// Run the binary with a build step that blocks, signal its process group
/// once the build has started, and check the run unwinds cleanly.
#[cfg(unix)]
fn assert_signal_during_build_releases_workspace(signal: &str) {
    use std::os::unix::process::CommandExt;
    use std::process::{Command, Stdio};
    use std::thread;
    use std::time::{Duration, Instant};

    let env = common::TestEnv::new();
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let upstream = env.create_upstream_repo();
    let building = env.path().join("building");
    let python = env.write_script(
        "fake-python",
        &format!(": > '{}'\nexec sleep 30", building.display()),
    );

    let mut child = Command::new(env!("CARGO_BIN_EXE_repo2pkg"))
        .env_remove("REPO2PKG_PIP")
        .env_remove("RUST_LOG")
        .env("TMPDIR", tmp.path())
        .arg(upstream.display().to_string())
        .args(["examplepkg", "--no-input", "--python"])
        .arg(&python)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .process_group(0)
        .spawn()
        .expect("Failed to spawn repo2pkg");

    let deadline = Instant::now() + Duration::from_secs(30);
    while !building.exists() {
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("build step never started");
        }
        thread::sleep(Duration::from_millis(50));
    }
    let workspaces = fs::read_dir(tmp.path())
        .expect("Failed to read directory")
        .count();
    assert_eq!(workspaces, 1, "workspace should exist while building");

    let kill = Command::new("kill")
        .args(["-s", signal, "--", &format!("-{}", child.id())])
        .status()
        .expect("Failed to run kill");
    assert!(kill.success());

    let output = child.wait_with_output().expect("Failed to wait for repo2pkg");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(130), "stderr: {stderr}");
    assert!(stderr.contains("Error: Interrupted"), "stderr: {stderr}");
    assert!(!stderr.contains("Build failed"), "stderr: {stderr}");
    assert_dir_empty(tmp.path());
}

#[cfg(unix)]
#[test]
fn test_sigint_during_build_exits_130_and_removes_workspace() {
    assert_signal_during_build_releases_workspace("INT");
}

#[cfg(unix)]
#[test]
fn test_sigterm_during_build_exits_130_and_removes_workspace() {
    assert_signal_during_build_releases_workspace("TERM");
}
