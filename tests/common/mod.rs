/// Shared test helpers for all enumlint integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A model with one negative value in the declaration hash.
#[allow(dead_code)]
pub const SUBSCRIPTION_MODEL: &str = "\
class Subscription < ApplicationRecord
  enum status: { active: 0, not_active: 1, sometimes_active: 2 }
end
";

/// A model whose negative enum uses an array, so it can be autocorrected.
#[allow(dead_code)]
pub const TASK_MODEL: &str = "\
class Task < ApplicationRecord
  enum not_state: [:open, :done]
end
";

/// A model with nothing to report.
#[allow(dead_code)]
pub const USER_MODEL: &str = "\
class User < ApplicationRecord
  enum role: { admin: 0, member: 1 }
end
";

/// Create a project directory from a set of files.
///
/// Each entry in `files` is `(relative_path, content)`.
/// Returns (TempDir, project_root). Hold the TempDir to keep the directory alive.
#[allow(dead_code)]
pub fn setup_project(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
    }
    let project_root = dir.path().to_path_buf();
    (dir, project_root)
}

/// Get path to compiled enumlint binary.
///
/// Builds the binary if it doesn't exist yet.
#[allow(dead_code)]
pub fn enumlint_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove 'deps'
    path.push("enumlint");
    if !path.exists() {
        let status = Command::new("cargo")
            .args(["build", "-p", "enumlint-cli"])
            .status()
            .expect("Failed to build enumlint");
        assert!(status.success(), "Failed to build enumlint binary");
    }
    path
}

/// Run enumlint with `args` inside `dir`.
#[allow(dead_code)]
pub fn run_enumlint(dir: &Path, args: &[&str]) -> Output {
    Command::new(enumlint_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("ENUMLINT_CONFIG")
        .env_remove("ENUMLINT_LOG")
        .output()
        .expect("Failed to run enumlint")
}

#[allow(dead_code)]
pub fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}
