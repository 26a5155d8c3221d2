//! Shared fixture for command line tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory that doubles as `$HOME`, with a config path inside it.
pub struct TestFixture {
    temp_dir: TempDir,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("config.toml")
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root().join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    /// `viewprint` with `$HOME` and `--config` pointing into the fixture.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("viewprint").expect("binary is built");
        cmd.env("HOME", self.root())
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    /// Runs `args`, requires success and returns stdout.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("command runs");
        assert!(
            output.status.success(),
            "viewprint {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("stdout is utf-8")
    }

    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let mut args = args.to_vec();
        args.extend(["--format", "json"]);
        serde_json::from_str(&self.stdout(&args)).expect("stdout is JSON")
    }

    pub fn yaml(&self, args: &[&str]) -> serde_json::Value {
        let mut args = args.to_vec();
        args.extend(["--format", "yaml"]);
        serde_yaml::from_str(&self.stdout(&args)).expect("stdout is YAML")
    }
}
