// Solharness
// Copyright (C) 2026 Solharness contributors

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! End-to-end runs of the solharness binary against a throwaway project.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_solharness");

/// A project with one contract, a manifest declaring one installed and one
/// missing dependency, and a fake parser that fails on `Bad.sol`.
fn scaffold_project(dir: &Path) -> String {
    fs::create_dir_all(dir.join("contracts")).unwrap();
    fs::write(dir.join("contracts/Good.sol"), "contract Good {}").unwrap();
    fs::write(dir.join("contracts/Bad.sol"), "contract Bad {").unwrap();
    fs::write(
        dir.join("package.json"),
        r#"{"dependencies": {"installed": "1.0.0"}, "devDependencies": {"missing": "1.0.0"}}"#,
    )
    .unwrap();
    fs::create_dir_all(dir.join("node_modules/installed")).unwrap();

    let tool = dir.join("fake-parser");
    fs::write(
        &tool,
        "#!/bin/sh\ncase \"$1\" in\n*Bad*) echo 'error: parse failure' >&2; exit 1;;\n*) exit 0;;\nesac\n",
    )
    .unwrap();
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
    tool.to_string_lossy().into_owned()
}

#[test]
fn full_run_writes_reports() {
    let project = TempDir::new().unwrap();
    let tool = scaffold_project(project.path());
    let data_dir = TempDir::new().unwrap();

    let status = Command::new(BIN)
        .arg(project.path())
        .arg("contracts")
        .arg("--parser")
        .arg(&tool)
        .arg("--collect-data")
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--no-progress")
        .status()
        .unwrap();
    // Per-source tool failures do not fail the harness itself.
    assert!(status.success());

    let tool_dir = data_dir.path().join("fake-parser");
    let successes = fs::read_to_string(tool_dir.join("successes.txt")).unwrap();
    let failures = fs::read_to_string(tool_dir.join("failures.txt")).unwrap();
    assert!(successes.contains("contracts/Good.sol"));
    assert!(failures.contains("contracts/Bad.sol"));

    let run_data: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(data_dir.path().join("fake-parser_run_data.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(run_data["num_sources"], 2);
    assert_eq!(run_data["num_successes"], 1);
    // The installed dependency resolved into a remapping, the missing one
    // was skipped.
    let maps = run_data["import_maps"].as_array().unwrap();
    assert_eq!(maps.len(), 1);
    assert_eq!(maps[0], "installed=node_modules/installed");

    assert!(
        fs::read_to_string(data_dir.path().join("summary.md"))
            .unwrap()
            .contains("## fake-parser")
    );
}

#[test]
fn missing_manifest_is_a_fatal_exit() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join("contracts")).unwrap();
    fs::write(project.path().join("contracts/A.sol"), "contract A {}").unwrap();

    let status = Command::new(BIN)
        .arg(project.path())
        .arg("--parser")
        .arg("/bin/true")
        .status()
        .unwrap();
    assert!(!status.success());
}
