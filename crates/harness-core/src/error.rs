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

//! Error types for the harness

use std::path::PathBuf;

/// Harness errors
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The package manifest does not exist. Fatal: without it, dependency
    /// remappings cannot be built and every tool run would be misconfigured.
    #[error("package manifest {0} does not exist")]
    MissingManifest(PathBuf),

    /// The package manifest exists but is not valid JSON.
    #[error("malformed package manifest {path}: {source}")]
    MalformedManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A source root could not be walked (missing directory, permissions).
    #[error("failed to walk source root {root}: {source}")]
    SourceRoot {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The external tool could not be launched at all. Distinct from the
    /// tool running and exiting non-zero, which is a recorded outcome.
    #[error("failed to launch {tool}: {source}")]
    ToolLaunch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// Report or configuration serialization failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error while reading inputs or writing reports.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
