//! Shared test helpers for integration tests.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated home for config lookups.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// An s10gen command that ignores the caller's environment and config.
    pub fn s10gen(&self) -> Command {
        let mut cmd = Command::new(cargo::cargo_bin!("s10gen"));
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path())
            .env_remove("S10GEN_CONFIG")
            .env_remove("S10GEN_COUNTRY")
            .env_remove("S10GEN_INDICATOR")
            .env_remove("S10GEN_LOG");
        cmd
    }

    /// Write a config file into the sandbox and return its path.
    pub fn write_config(&self, json: &str) -> std::path::PathBuf {
        let path = self.dir.path().join("s10gen.json");
        std::fs::write(&path, json).unwrap();
        path
    }
}

/// Split stdout into lines.
pub fn lines(output: &[u8]) -> Vec<String> {
    String::from_utf8(output.to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
