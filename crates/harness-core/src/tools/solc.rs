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

//! Compiler dialect (solc)

use crate::settings::SolcSettings;
use crate::tools::{ToolDialect, tool_name_from_executable};

/// The Solidity compiler's argument dialect. The first import path is the
/// compiler's base path; every further one becomes an `--include-path`.
/// Remappings are plain positional `name=dir` arguments.
pub struct SolcDialect {
    name: String,
    executable: String,
    settings: SolcSettings,
}

impl SolcDialect {
    pub fn new(executable: String, settings: SolcSettings) -> Self {
        Self {
            name: tool_name_from_executable(&executable),
            executable,
            settings,
        }
    }
}

impl ToolDialect for SolcDialect {
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
        let (base_path, include_paths) = self
            .settings
            .import_paths
            .split_first()
            .expect("settings construction guarantees a non-empty import path list");

        let mut args = vec![source.to_string()];
        args.push("--base-path".to_string());
        args.push(base_path.clone());
        for include_path in include_paths {
            args.push("--include-path".to_string());
            args.push(include_path.clone());
        }
        if !self.settings.allow_paths.is_empty() {
            args.push("--allow-paths".to_string());
            args.push(self.settings.allow_paths.join(","));
        }
        args.extend(self.settings.import_maps.iter().cloned());
        args
    }
}
