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

//! Mutation-engine dialect
//!
//! The engine is invoked as `<exe> mutate <source> ...` once per source, or
//! once per batch with a JSON configuration enumerating every per-source
//! job (see [`write_batch_config`]).

use crate::error::HarnessError;
use crate::settings::MutatorSettings;
use crate::tools::{ToolDialect, tool_name_from_executable};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The mutation engine's argument dialect. Unlike the compiler, every list
/// is passed behind a long flag, and a flag is emitted only when its list
/// is non-empty: `--mutations` with nothing after it is a usage error, not
/// an empty selection.
pub struct MutatorDialect {
    name: String,
    executable: String,
    settings: MutatorSettings,
}

impl MutatorDialect {
    pub fn new(executable: String, settings: MutatorSettings) -> Self {
        Self {
            name: tool_name_from_executable(&executable),
            executable,
            settings,
        }
    }

    pub fn settings(&self) -> &MutatorSettings {
        &self.settings
    }
}

impl ToolDialect for MutatorDialect {
    fn name(&self) -> &str {
        &self.name
    }

    fn executable(&self) -> &str {
        &self.executable
    }

    fn import_paths(&self) -> &[String] {
        &self.settings.import_paths
    }

    fn import_maps(&self) -> &[String] {
        &self.settings.import_maps
    }

    fn build_args(&self, source: &str) -> Vec<String> {
        let mut args = vec!["mutate".to_string(), source.to_string()];
        if !self.settings.import_paths.is_empty() {
            args.push("--import_paths".to_string());
            args.extend(self.settings.import_paths.iter().cloned());
        }
        if !self.settings.import_maps.is_empty() {
            args.push("--import_maps".to_string());
            args.extend(self.settings.import_maps.iter().cloned());
        }
        if let Some(mutations) = &self.settings.mutations {
            args.push("--mutations".to_string());
            args.extend(mutations.iter().cloned());
        }
        if let Some(outdir) = &self.settings.outdir {
            args.push("--outdir".to_string());
            args.push(outdir.clone());
        }
        args
    }
}

/// One per-source job in the engine's batch configuration.
#[derive(Debug, Serialize)]
pub struct BatchJob<'a> {
    pub filename: &'a str,
    pub outdir: &'a str,
    pub import_maps: &'a [String],
    pub import_paths: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutations: Option<&'a [String]>,
}

/// Write the batch configuration for `sources` to `conf_path`: a JSON array
/// with one job per source, dependency remaps already merged into the
/// settings' import maps. Returns the absolute path the engine should be
/// pointed at with `--json`.
pub fn write_batch_config(
    settings: &MutatorSettings,
    sources: &[String],
    conf_path: &Path,
) -> Result<PathBuf, HarnessError> {
    let outdir = settings.outdir.as_deref().unwrap_or("mutants_out");
    let jobs: Vec<BatchJob> = sources
        .iter()
        .map(|source| BatchJob {
            filename: source,
            outdir,
            import_maps: &settings.import_maps,
            import_paths: &settings.import_paths,
            mutations: settings.mutations.as_deref(),
        })
        .collect();

    let conf_path = std::path::absolute(conf_path)?;
    fs::write(&conf_path, serde_json::to_string_pretty(&jobs)?)?;
    info!("wrote batch configuration to {}", conf_path.display());
    Ok(conf_path)
}
