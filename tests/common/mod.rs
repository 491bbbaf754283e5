//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// BOM from the reference scenario: a provided frame and a supplier panel held by provided bolts
pub const SCENARIO_BOM: &str = r#"{
  "description": "cabinet",
  "quantity": 1,
  "bom": [
    {"description": "frame", "quantity": 1, "step": 1, "source": "provided", "bom": []},
    {"description": "panel", "quantity": 2, "source": "supplier", "bom": [
      {"description": "bolt", "quantity": 4, "source": "provided", "bom": []}
    ]}
  ]
}"#;

pub const SCENARIO_ROUTINGS: &str = r#"[
  {"step": 1, "description": "frame", "taktTime": 120}
]"#;

/// Home directory for test runs; nothing writes a user config into it
pub fn isolated_home() -> PathBuf {
    Path::new(env!("CARGO_TARGET_TMPDIR")).join("bomplan-home")
}

/// Helper to get a bomplan command that never blocks on the exit gate
///
/// The user config directory points at [`isolated_home`], so a developer's own
/// `~/.config/bomplan/config.yaml` cannot leak into results.
pub fn bomplan() -> Command {
    bomplan_with_home(&isolated_home())
}

/// Helper to get a bomplan command whose user config lives under `home`
pub fn bomplan_with_home(home: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("bomplan"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("BOMPLAN_BOM")
        .env_remove("BOMPLAN_ROUTINGS")
        .env_remove("BOMPLAN_OUTPUT")
        .env_remove("BOMPLAN_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create a working directory holding bom.json and routings.json
pub fn setup_project(bom: &str, routings: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bom.json"), bom).unwrap();
    fs::write(tmp.path().join("routings.json"), routings).unwrap();
    tmp
}

/// Helper to create a working directory with the reference scenario
pub fn setup_scenario() -> TempDir {
    setup_project(SCENARIO_BOM, SCENARIO_ROUTINGS)
}

/// Read output.csv from a working directory
pub fn read_output(tmp: &TempDir) -> String {
    fs::read_to_string(tmp.path().join("output.csv")).unwrap()
}
