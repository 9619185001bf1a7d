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

//! Tool dialects
//!
//! Every supported tool takes the same conceptual inputs (a source file,
//! import paths, import remappings) but speaks its own argument dialect.
//! Each dialect implements [`ToolDialect`]; the runner is written against
//! the trait, so adding a tool means adding one implementation here.

pub mod mutator;
pub mod parser;
pub mod solc;

pub use mutator::MutatorDialect;
pub use parser::ParserDialect;
pub use solc::SolcDialect;

/// One supported external tool: an executable plus the argument dialect it
/// speaks.
pub trait ToolDialect {
    /// Identifier used for report directories and summaries.
    fn name(&self) -> &str;

    /// Program invoked as a child process.
    fn executable(&self) -> &str;

    /// Import paths this run was configured with (report metadata).
    fn import_paths(&self) -> &[String];

    /// Import remappings this run was configured with (report metadata).
    fn import_maps(&self) -> &[String];

    /// Build the full argument list for one invocation against `source`.
    fn build_args(&self, source: &str) -> Vec<String>;
}

/// Derive a report-friendly tool name from an executable path: the file
/// name, so `/usr/local/bin/solc8.13` becomes `solc8.13`. Versioned
/// executables keep their suffix so runs against different versions land
/// in different report directories.
pub fn tool_name_from_executable(executable: &str) -> String {
    std::path::Path::new(executable)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| executable.to_string())
}
