//! Shared testing utilities for fspec CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with a default project directory.
    pub fn new() -> Self {
        Self::with_project_dir("work")
    }

    /// Create a new isolated environment with a named project directory.
    ///
    /// The directory name matters for tests that exercise name derivation
    /// from the current working directory.
    pub fn with_project_dir(name: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join(name);
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `fspec` binary within the
    /// project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("fspec").expect("Failed to locate fspec binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to the default spec directory in the project directory.
    pub fn spec_path(&self) -> PathBuf {
        self.work_dir.join("specs")
    }

    /// Path to the README in the default spec directory.
    pub fn readme_path(&self) -> PathBuf {
        self.spec_path().join("README")
    }

    /// Path to the deployment config in the default spec directory.
    pub fn config_path(&self) -> PathBuf {
        self.spec_path().join("fission-deployment-config.yaml")
    }

    /// Read the deployment config file.
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("Failed to read deployment config")
    }

    /// Extract the uid field from the deployment config.
    pub fn config_uid(&self) -> String {
        self.read_config()
            .lines()
            .find_map(|line| line.strip_prefix("uid: ").map(str::to_string))
            .expect("Deployment config has no uid field")
    }
}
