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

//! Sequential tool execution
//!
//! One child process per source, in collection order, with both output
//! streams captured. The harness never changes its own working directory:
//! the project directory is threaded through explicitly and handed to each
//! child via `Command::current_dir`, so source paths, remappings, and
//! manifest paths all stay relative to the project.

use crate::aggregate::ToolRunData;
use crate::error::HarnessError;
use crate::progress::ProgressBar;
use crate::tools::{MutatorDialect, ToolDialect};
use std::path::Path;
use std::process::Command;
use tracing::{error, info};

/// Knobs for one tool run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Stop at the first failing source instead of running the full list.
    pub halt_on_failure: bool,
    /// Draw a progress bar on stderr.
    pub progress: bool,
}

/// Run `dialect` over every source, one invocation at a time. Exit code 0
/// is a success; anything else (including death by signal) is a failure
/// recorded with its captured streams. A tool that cannot be launched at
/// all aborts the run with [`HarnessError::ToolLaunch`] — there is nothing
/// meaningful to record per source in that case.
///
/// There is no timeout: a hung tool hangs the run.
pub fn run_tool(
    project_dir: &Path,
    dialect: &dyn ToolDialect,
    sources: &[String],
    opts: RunOptions,
) -> Result<ToolRunData, HarnessError> {
    let mut data = ToolRunData::new(
        dialect.name().to_string(),
        dialect.import_paths().to_vec(),
        dialect.import_maps().to_vec(),
        sources.to_vec(),
    );

    println!(
        "Running {} on {} source files:\n",
        dialect.name(),
        sources.len()
    );
    let mut bar = opts
        .progress
        .then(|| ProgressBar::new(sources.len(), std::io::stderr()));

    for source in sources {
        let args = dialect.build_args(source);
        let output = Command::new(dialect.executable())
            .args(&args)
            .current_dir(project_dir)
            .output()
            .map_err(|e| HarnessError::ToolLaunch {
                tool: dialect.executable().to_string(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if output.status.success() {
            info!("{} succeeded on {}", dialect.name(), source);
            data.add_success(source, &stderr, &stdout);
        } else {
            error!("{} failed on {}", dialect.name(), source);
            println!("The following command failed on {source}:");
            println!("    {} {}", dialect.executable(), args.join(" "));
            if !stderr.trim().is_empty() {
                println!("\n\x1b[31;1mstderr:\x1b[0m {stderr}");
            }
            data.add_failure(source, &stderr, &stdout);
            if opts.halt_on_failure {
                println!("Halting on failure");
                break;
            }
        }
        if let Some(bar) = bar.as_mut() {
            bar.tick();
        }
    }

    if let Some(bar) = bar.take() {
        bar.finish();
    }
    println!(
        "Finished running {} on {} source files",
        dialect.name(),
        sources.len()
    );
    Ok(data)
}

/// Manifest-driven mode: write one batch configuration covering every
/// source and invoke the mutation engine a single time against it. The
/// engine does its own per-file reporting in this mode, so the returned
/// run data carries the configuration and source list but no per-source
/// outcomes.
pub fn run_mutator_batch(
    project_dir: &Path,
    dialect: &MutatorDialect,
    sources: &[String],
    conf_path: &Path,
) -> Result<ToolRunData, HarnessError> {
    let data = ToolRunData::new(
        dialect.name().to_string(),
        dialect.import_paths().to_vec(),
        dialect.import_maps().to_vec(),
        sources.to_vec(),
    );

    let conf_path = crate::tools::mutator::write_batch_config(dialect.settings(), sources, conf_path)?;

    println!(
        "Running {} once over {} source files (batch mode)\n",
        dialect.name(),
        sources.len()
    );
    let status = Command::new(dialect.executable())
        .arg("mutate")
        .arg("--json")
        .arg(&conf_path)
        .current_dir(project_dir)
        .status()
        .map_err(|e| HarnessError::ToolLaunch {
            tool: dialect.executable().to_string(),
            source: e,
        })?;

    if status.success() {
        info!("{} batch run completed", dialect.name());
    } else {
        error!("{} batch run exited with {}", dialect.name(), status);
    }
    Ok(data)
}
