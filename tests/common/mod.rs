#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn incilog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("incilog").unwrap();
    cmd.env_remove("INCILOG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize a log in `root`
pub fn init(root: &Path) {
    incilog_cmd().arg("init").arg(root).assert().success();
}

/// Log an incident and return its id
pub fn log_incident(root: &Path, location: &str, severity: &str) -> String {
    let output = incilog_cmd()
        .current_dir(root)
        .args([
            "log",
            "--location",
            location,
            "--description",
            "Slipped on wet floor",
            "--severity",
            severity,
            "--person",
            "J. Doe",
            "--date",
            "2025-01-17",
            "--time",
            "14:05",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "log failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("ID: "))
        .expect("log prints the new id")
        .trim()
        .to_string()
}
