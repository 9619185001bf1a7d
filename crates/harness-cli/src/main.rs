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

//! Solharness CLI
//!
//! Runs the selected external tools over every Solidity source in a
//! project and records per-file outcomes.

use anyhow::Context;
use clap::Parser;
use solharness_core::manifest::{self, DEFAULT_DEPENDENCY_ROOT};
use solharness_core::report;
use solharness_core::runner::{self, RunOptions};
use solharness_core::settings::{MutatorSettings, ParserSettings, SolcSettings};
use solharness_core::source;
use solharness_core::tools::{MutatorDialect, ParserDialect, SolcDialect, ToolDialect};
use solharness_core::ToolRunData;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "solharness")]
#[command(about = "Batch-run Solidity tools over a project and record per-file outcomes")]
#[command(version = "0.1.0")]
struct Cli {
    /// Project directory (tools run with this as their working directory)
    project_dir: PathBuf,

    /// Roots of directories where Solidity code is located
    #[arg(default_value = "contracts")]
    source_roots: Vec<String>,

    /// Run this solc executable over the project
    #[arg(long)]
    solc: Option<String>,

    /// Run this standalone parser executable over the project
    #[arg(long)]
    parser: Option<String>,

    /// Run this mutation-engine executable over the project
    #[arg(long)]
    mutator: Option<String>,

    /// Import paths, searched in order (first one is solc's base path)
    #[arg(long, short = 'I', num_args = 1..)]
    import_paths: Vec<String>,

    /// Extra import remappings of the form name=dir, appended after the
    /// remappings resolved from the package manifest
    #[arg(long, short = 'm', num_args = 1..)]
    import_maps: Vec<String>,

    /// Mutation operators to apply (mutation engine only; default: all)
    #[arg(long, num_args = 1..)]
    mutations: Option<Vec<String>>,

    /// Directories solc is allowed to read imports from (solc only)
    #[arg(long, num_args = 1..)]
    allow_paths: Vec<String>,

    /// Package manifest, relative to the project directory
    #[arg(long, short = 'p', default_value = "package.json")]
    package_json: String,

    /// Where the mutation engine writes generated mutants
    #[arg(long, default_value = "mutants_out")]
    outdir: String,

    /// Invoke the mutation engine once with a generated JSON configuration
    /// instead of once per source
    #[arg(long)]
    batch: bool,

    /// Stop a tool run at its first failing source
    #[arg(long)]
    halt_on_failure: bool,

    /// Persist per-run reports and a session summary
    #[arg(long)]
    collect_data: bool,

    /// Where to persist reports (with --collect-data)
    #[arg(long, default_value = "data_collect")]
    data_dir: PathBuf,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let sources = source::collect_sources(&cli.project_dir, &cli.source_roots)
        .context("failed to collect Solidity sources")?;

    // A missing manifest is fatal before any tool runs: every dialect's
    // remappings derive from it.
    let manifest_path = cli.project_dir.join(&cli.package_json);
    let package = manifest::parse_manifest(&manifest_path)
        .with_context(|| format!("cannot read package manifest {}", manifest_path.display()))?;
    let dependencies =
        manifest::resolve_dependencies(&package, &cli.project_dir, DEFAULT_DEPENDENCY_ROOT);

    // Dependency remaps first, then whatever the user passed explicitly.
    let mut import_maps: Vec<String> = dependencies.iter().map(|d| d.remap.clone()).collect();
    import_maps.extend(cli.import_maps.iter().cloned());

    let opts = RunOptions {
        halt_on_failure: cli.halt_on_failure,
        progress: !cli.no_progress,
    };

    let mut runs: Vec<ToolRunData> = Vec::new();

    if let Some(solc) = &cli.solc {
        println!("\n === Running {solc} ===\n");
        let dialect = SolcDialect::new(
            solc.clone(),
            SolcSettings::new(
                cli.import_paths.clone(),
                import_maps.clone(),
                cli.allow_paths.clone(),
            ),
        );
        let data = runner::run_tool(&cli.project_dir, &dialect, &sources, opts)?;
        data.print_summary();
        runs.push(data);
    }

    if let Some(parser) = &cli.parser {
        println!("\n === Running {parser} ===\n");
        let dialect = ParserDialect::new(
            parser.clone(),
            ParserSettings::new(cli.import_paths.clone(), import_maps.clone()),
        );
        let data = runner::run_tool(&cli.project_dir, &dialect, &sources, opts)?;
        data.print_summary();
        runs.push(data);
    }

    if let Some(mutator) = &cli.mutator {
        println!("\n === Running {mutator} ===\n");
        let outdir = prepare_mutant_outdir(&cli.outdir)?;
        let dialect = MutatorDialect::new(
            mutator.clone(),
            MutatorSettings::new(
                cli.import_paths.clone(),
                import_maps.clone(),
                cli.mutations.clone(),
                Some(outdir),
            ),
        );
        let data = if cli.batch {
            let conf_path = cli.project_dir.join("mutate.conf.json");
            runner::run_mutator_batch(&cli.project_dir, &dialect, &sources, &conf_path)?
        } else {
            runner::run_tool(&cli.project_dir, &dialect, &sources, opts)?
        };
        data.print_summary();
        runs.push(data);
    }

    if runs.is_empty() {
        println!("No tools selected; pass --solc, --parser, or --mutator.");
        return Ok(());
    }

    if cli.collect_data {
        for data in &runs {
            report::write_to_disk(data, &cli.data_dir)
                .with_context(|| format!("failed to write {} report", data.tool_name))?;
        }
        let run_refs: Vec<&ToolRunData> = runs.iter().collect();
        report::write_session_summary(&run_refs, &cli.data_dir)?;
        info!("reports written to {}", cli.data_dir.display());
    }

    Ok(())
}

/// The mutation engine appends into its output directory, so a fresh run
/// gets a fresh directory. Resolved to an absolute path because the engine
/// runs from the project directory, not from here.
fn prepare_mutant_outdir(outdir: &str) -> anyhow::Result<String> {
    let outdir = std::path::absolute(outdir)?;
    if outdir.exists() {
        println!("Output directory {} already exists. Removing...", outdir.display());
        fs::remove_dir_all(&outdir)?;
    }
    fs::create_dir_all(&outdir)?;
    Ok(outdir.to_string_lossy().into_owned())
}
