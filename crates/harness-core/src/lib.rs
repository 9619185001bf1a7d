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

//! Batch-evaluation harness for Solidity tooling.
//!
//! Discovers `.sol` sources under a project, resolves `package.json`
//! dependencies into compiler remappings, runs external tools (a compiler,
//! a mutation engine, a parser) over every source, and persists per-file
//! outcomes as diffable text and JSON reports.

pub mod aggregate;
pub mod error;
pub mod manifest;
pub mod progress;
pub mod report;
pub mod runner;
pub mod settings;
pub mod source;
pub mod tools;

pub use aggregate::{Outcome, ToolRunData};
pub use error::HarnessError;
pub use manifest::{Dependency, PackageManifest};
pub use runner::RunOptions;
