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

//! Per-dialect run settings
//!
//! Each tool consumes a different slice of the run configuration, so each
//! dialect gets its own settings type with defaults applied once, at
//! construction, instead of being re-defaulted at every call site.

/// Import paths searched when no explicit ones are configured.
pub fn default_import_paths() -> Vec<String> {
    vec![".".to_string(), "contracts".to_string()]
}

fn normalize_import_paths(import_paths: Vec<String>) -> Vec<String> {
    if import_paths.is_empty() {
        default_import_paths()
    } else {
        import_paths
    }
}

/// Settings consumed by the compiler dialect.
#[derive(Debug, Clone)]
pub struct SolcSettings {
    pub import_paths: Vec<String>,
    pub import_maps: Vec<String>,
    pub allow_paths: Vec<String>,
}

impl SolcSettings {
    pub fn new(
        import_paths: Vec<String>,
        import_maps: Vec<String>,
        allow_paths: Vec<String>,
    ) -> Self {
        Self {
            import_paths: normalize_import_paths(import_paths),
            import_maps,
            allow_paths,
        }
    }
}

/// Settings consumed by the mutation-engine dialect.
#[derive(Debug, Clone)]
pub struct MutatorSettings {
    pub import_paths: Vec<String>,
    pub import_maps: Vec<String>,
    /// Mutation operators to apply; `None` means the engine's full set.
    pub mutations: Option<Vec<String>>,
    /// Where the engine writes generated mutants.
    pub outdir: Option<String>,
}

impl MutatorSettings {
    pub fn new(
        import_paths: Vec<String>,
        import_maps: Vec<String>,
        mutations: Option<Vec<String>>,
        outdir: Option<String>,
    ) -> Self {
        Self {
            import_paths: normalize_import_paths(import_paths),
            import_maps,
            mutations,
            outdir,
        }
    }
}

/// Settings consumed by the parser dialect.
#[derive(Debug, Clone)]
pub struct ParserSettings {
    pub import_paths: Vec<String>,
    pub import_maps: Vec<String>,
}

impl ParserSettings {
    pub fn new(import_paths: Vec<String>, import_maps: Vec<String>) -> Self {
        Self {
            import_paths: normalize_import_paths(import_paths),
            import_maps,
        }
    }
}
