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

//! Report persistence
//!
//! Two forms per tool run: human-readable text files (success/failure
//! lists, per-source output dumps) and a machine-readable
//! `<tool>_run_data.json` consumed by downstream analysis. The per-tool
//! directory is wiped and recreated on every write, so a report directory
//! always describes exactly one run.

use crate::aggregate::{ToolRunData, strip_ansi};
use crate::error::HarnessError;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
struct RunConf<'a> {
    import_paths: &'a [String],
    import_maps: &'a [String],
    sources: &'a [String],
}

#[derive(Serialize)]
struct RunDataJson<'a> {
    tool_name: &'a str,
    import_paths: &'a [String],
    import_maps: &'a [String],
    sources: &'a [String],
    successes: Vec<&'a str>,
    failures: Vec<&'a str>,
    num_sources: usize,
    num_successes: usize,
    num_failures: usize,
    success_rate: f64,
}

/// Flatten a source path into a single file name: `contracts/A.sol`
/// becomes `contracts.A.sol`.
fn flatten_source_name(source: &str) -> String {
    source.replace('/', ".")
}

/// Persist one run under `outdir`. An existing `outdir/<tool_name>` is
/// deleted first; partial content from an interrupted earlier write never
/// survives into a new report.
pub fn write_to_disk(data: &ToolRunData, outdir: &Path) -> Result<(), HarnessError> {
    fs::create_dir_all(outdir)?;
    let tool_out_dir = outdir.join(&data.tool_name);
    if tool_out_dir.exists() {
        fs::remove_dir_all(&tool_out_dir)?;
    }
    let outputs_dir = tool_out_dir.join("outputs");
    fs::create_dir_all(&outputs_dir)?;

    let successes: Vec<&str> = data.successes().collect();
    let mut failures: Vec<(&str, usize)> = data.failures().collect();

    fs::write(
        tool_out_dir.join("successes.txt"),
        successes.join("\n"),
    )?;
    fs::write(
        tool_out_dir.join("failures.txt"),
        failures
            .iter()
            .map(|(s, _)| *s)
            .collect::<Vec<_>>()
            .join("\n"),
    )?;

    // Triage order: cheapest-to-fix first.
    failures.sort_by_key(|(_, error_count)| *error_count);
    fs::write(
        tool_out_dir.join("num_errors.txt"),
        failures
            .iter()
            .map(|(s, n)| format!("{s}: {n}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )?;

    for (source, outcome) in data.outcomes() {
        let flat = flatten_source_name(source);
        fs::write(outputs_dir.join(format!("{flat}.stdout")), outcome.stdout())?;
        fs::write(
            outputs_dir.join(format!("{flat}.stderr")),
            strip_ansi(outcome.stderr()),
        )?;
    }

    let conf = RunConf {
        import_paths: &data.import_paths,
        import_maps: &data.import_maps,
        sources: &data.sources,
    };
    fs::write(
        tool_out_dir.join("conf.json"),
        serde_json::to_string_pretty(&conf)?,
    )?;

    let run_data = RunDataJson {
        tool_name: &data.tool_name,
        import_paths: &data.import_paths,
        import_maps: &data.import_maps,
        sources: &data.sources,
        successes,
        failures: data.failures().map(|(s, _)| s).collect(),
        num_sources: data.num_sources(),
        num_successes: data.num_successes(),
        num_failures: data.num_failures(),
        success_rate: data.success_rate(),
    };
    fs::write(
        outdir.join(format!("{}_run_data.json", data.tool_name)),
        serde_json::to_string_pretty(&run_data)?,
    )?;

    info!(
        "wrote {} report to {}",
        data.tool_name,
        tool_out_dir.display()
    );
    Ok(())
}

/// Write a top-level `summary.md` covering every tool run in this session.
pub fn write_session_summary(runs: &[&ToolRunData], outdir: &Path) -> Result<(), HarnessError> {
    fs::create_dir_all(outdir)?;
    let mut summary = String::from("# Tool run summary\n");
    for data in runs {
        summary.push_str(&format!(
            "\n## {}\n\n{} / {} sources succeeded ({:.2}%)\n",
            data.tool_name,
            data.num_successes(),
            data.num_sources(),
            data.success_rate()
        ));
    }
    fs::write(outdir.join("summary.md"), summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_run() -> ToolRunData {
        let mut data = ToolRunData::new(
            "solc".to_string(),
            vec![".".to_string(), "contracts".to_string()],
            vec!["oz=node_modules/oz".to_string()],
            vec![
                "contracts/A.sol".to_string(),
                "contracts/B.sol".to_string(),
                "contracts/C.sol".to_string(),
            ],
        );
        data.add_success("contracts/A.sol", "", "compiled A");
        data.add_failure("contracts/B.sol", "error: one\nerror: two", "");
        data.add_failure("contracts/C.sol", "\x1b[31merror:\x1b[0m red", "");
        data
    }

    #[test]
    fn writes_the_full_layout() {
        let outdir = TempDir::new().unwrap();
        write_to_disk(&sample_run(), outdir.path()).unwrap();

        let tool_dir = outdir.path().join("solc");
        assert_eq!(
            fs::read_to_string(tool_dir.join("successes.txt")).unwrap(),
            "contracts/A.sol"
        );
        assert_eq!(
            fs::read_to_string(tool_dir.join("failures.txt")).unwrap(),
            "contracts/B.sol\ncontracts/C.sol"
        );
        assert!(tool_dir.join("outputs/contracts.A.sol.stdout").exists());
        assert!(tool_dir.join("outputs/contracts.B.sol.stderr").exists());
        assert!(outdir.path().join("solc_run_data.json").exists());
    }

    #[test]
    fn num_errors_is_sorted_ascending() {
        let outdir = TempDir::new().unwrap();
        write_to_disk(&sample_run(), outdir.path()).unwrap();

        let num_errors =
            fs::read_to_string(outdir.path().join("solc/num_errors.txt")).unwrap();
        assert_eq!(
            num_errors,
            "contracts/C.sol: 1\ncontracts/B.sol: 2"
        );
    }

    #[test]
    fn stderr_dumps_are_ansi_stripped() {
        let outdir = TempDir::new().unwrap();
        write_to_disk(&sample_run(), outdir.path()).unwrap();

        let stderr =
            fs::read_to_string(outdir.path().join("solc/outputs/contracts.C.sol.stderr"))
                .unwrap();
        assert_eq!(stderr, "error: red");
    }

    #[test]
    fn run_data_json_carries_counts_and_rate() {
        let outdir = TempDir::new().unwrap();
        write_to_disk(&sample_run(), outdir.path()).unwrap();

        let json: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(outdir.path().join("solc_run_data.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(json["tool_name"], "solc");
        assert_eq!(json["num_sources"], 3);
        assert_eq!(json["num_successes"], 1);
        assert_eq!(json["num_failures"], 2);
        let rate = json["success_rate"].as_f64().unwrap();
        assert!((rate - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn rewriting_a_tool_report_is_destructive() {
        let outdir = TempDir::new().unwrap();
        write_to_disk(&sample_run(), outdir.path()).unwrap();

        // Second run: one different source, everything else gone.
        let mut second = ToolRunData::new(
            "solc".to_string(),
            vec![".".to_string()],
            vec![],
            vec!["contracts/Z.sol".to_string()],
        );
        second.add_success("contracts/Z.sol", "", "");
        write_to_disk(&second, outdir.path()).unwrap();

        let tool_dir = outdir.path().join("solc");
        assert!(!tool_dir.join("outputs/contracts.A.sol.stdout").exists());
        assert!(tool_dir.join("outputs/contracts.Z.sol.stdout").exists());
        assert_eq!(
            fs::read_to_string(tool_dir.join("successes.txt")).unwrap(),
            "contracts/Z.sol"
        );
    }

    #[test]
    fn session_summary_has_one_block_per_tool() {
        let outdir = TempDir::new().unwrap();
        let solc_run = sample_run();
        let mut parser_run = ToolRunData::new(
            "sol-parser".to_string(),
            vec![".".to_string()],
            vec![],
            vec!["contracts/A.sol".to_string()],
        );
        parser_run.add_success("contracts/A.sol", "", "");

        write_session_summary(&[&solc_run, &parser_run], outdir.path()).unwrap();

        let summary = fs::read_to_string(outdir.path().join("summary.md")).unwrap();
        assert!(summary.contains("## solc"));
        assert!(summary.contains("1 / 3 sources succeeded (33.33%)"));
        assert!(summary.contains("## sol-parser"));
        assert!(summary.contains("1 / 1 sources succeeded (100.00%)"));
    }
}
