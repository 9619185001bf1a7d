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

//! Solidity source discovery

use crate::error::HarnessError;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

/// Extension that marks a file as a Solidity source.
pub const SOURCE_EXTENSION: &str = "sol";

/// Recursively collect Solidity sources under each root, in directory-walk
/// order. Roots are resolved relative to `project_dir` and the returned
/// paths are relative to it as well, since every tool is later invoked with
/// `project_dir` as its working directory.
///
/// A root that does not exist is an error, not an empty result.
pub fn collect_sources(project_dir: &Path, roots: &[String]) -> Result<Vec<String>, HarnessError> {
    info!("collecting Solidity sources from roots: {}", roots.join(", "));
    let mut sources = Vec::new();
    for root in roots {
        let root_dir = project_dir.join(root);
        for entry in WalkDir::new(&root_dir) {
            let entry = entry.map_err(|e| HarnessError::SourceRoot {
                root: root_dir.clone(),
                source: e,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
                // Walkdir hands back project_dir-prefixed paths; report them
                // relative to the project like every other harness path.
                let relative = path.strip_prefix(project_dir).unwrap_or(path);
                info!("found Solidity file {} in {}", relative.display(), root);
                sources.push(relative.to_string_lossy().into_owned());
            }
        }
    }
    info!("found {} Solidity files", sources.len());
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "contract C {}").unwrap();
    }

    #[test]
    fn collects_only_sol_files_recursively() {
        let project = TempDir::new().unwrap();
        let root = project.path();
        touch(&root.join("contracts/Token.sol"));
        touch(&root.join("contracts/utils/Math.sol"));
        touch(&root.join("contracts/README.md"));
        touch(&root.join("scripts/deploy.js"));

        let sources = collect_sources(root, &["contracts".to_string()]).unwrap();
        assert_eq!(sources.len(), 2);
        assert!(sources.iter().all(|s| s.starts_with("contracts/")));
        assert!(sources.iter().all(|s| s.ends_with(".sol")));
    }

    #[test]
    fn walks_multiple_roots_in_order() {
        let project = TempDir::new().unwrap();
        let root = project.path();
        touch(&root.join("contracts/A.sol"));
        touch(&root.join("src/B.sol"));

        let sources =
            collect_sources(root, &["contracts".to_string(), "src".to_string()]).unwrap();
        assert_eq!(sources, vec!["contracts/A.sol", "src/B.sol"]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let project = TempDir::new().unwrap();
        let result = collect_sources(project.path(), &["no_such_dir".to_string()]);
        assert!(matches!(result, Err(HarnessError::SourceRoot { .. })));
    }
}
