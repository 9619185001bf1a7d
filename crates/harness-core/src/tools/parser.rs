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

//! Parser dialect

use crate::settings::ParserSettings;
use crate::tools::{ToolDialect, tool_name_from_executable};

/// The standalone parser's argument dialect: the source, then the mutation
/// engine's flag style for paths and remappings, nothing else.
pub struct ParserDialect {
    name: String,
    executable: String,
    settings: ParserSettings,
}

impl ParserDialect {
    pub fn new(executable: String, settings: ParserSettings) -> Self {
        Self {
            name: tool_name_from_executable(&executable),
            executable,
            settings,
        }
    }
}

impl ToolDialect for ParserDialect {
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
        let mut args = vec![source.to_string()];
        if !self.settings.import_paths.is_empty() {
            args.push("--import_paths".to_string());
            args.extend(self.settings.import_paths.iter().cloned());
        }
        if !self.settings.import_maps.is_empty() {
            args.push("--import_maps".to_string());
            args.extend(self.settings.import_maps.iter().cloned());
        }
        args
    }
}
