//! Shared testing utilities for examark CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_EMAIL: &str = "aegpt@test.com";
pub const TEST_PASSWORD: &str = "AEtest@123";

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the `.examark/` archive inside the work directory.
    pub fn archive_path(&self) -> PathBuf {
        self.work_dir.join(".examark")
    }

    /// Build a command for invoking the compiled `examark` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("examark").expect("Failed to locate examark binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home());
        cmd
    }

    /// Log in with the fixed test credentials.
    pub fn login(&self) {
        self.cli()
            .args(["login", "--email", TEST_EMAIL, "--password", TEST_PASSWORD])
            .assert()
            .success();
    }

    /// Point the Gemini client at a local mock server.
    pub fn write_gemini_config(&self, api_url: &str) {
        fs::create_dir_all(self.archive_path()).expect("Failed to create archive directory");
        fs::write(
            self.archive_path().join("config.toml"),
            format!("[gemini]\napi_url = \"{}\"\ntimeout_secs = 5\n", api_url),
        )
        .expect("Failed to write config.toml");
    }

    /// Write a file into the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Parse a JSON archive file. Panics when the file is missing.
    pub fn read_archive_json(&self, name: &str) -> serde_json::Value {
        let raw = fs::read_to_string(self.archive_path().join(name))
            .expect("Failed to read archive file");
        serde_json::from_str(&raw).expect("Archive file is not valid JSON")
    }

    /// Whether an archive file exists.
    pub fn archive_file_exists(&self, name: &str) -> bool {
        self.archive_path().join(name).exists()
    }
}
