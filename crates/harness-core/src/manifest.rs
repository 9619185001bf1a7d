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

//! Package manifest parsing and dependency resolution
//!
//! Solidity projects declare their library dependencies in an npm-style
//! `package.json`; the packages themselves live under `node_modules`. Each
//! resolved dependency becomes an import remapping (`name=dir`) handed to
//! the compiler and parser so that `import "@openzeppelin/..."` style
//! references resolve on disk.

use crate::error::HarnessError;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Directory the packages are installed into, relative to the project.
pub const DEFAULT_DEPENDENCY_ROOT: &str = "node_modules";

/// The subset of `package.json` the harness cares about. Version strings
/// are carried along but never interpreted; only the package names matter.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: HashMap<String, String>,
}

/// A declared dependency that was found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    /// Directory the package lives in, relative to the project.
    pub directory: PathBuf,
    /// Remapping string of the form `name=directory`.
    pub remap: String,
}

/// Parse the package manifest at `path`. A missing manifest is fatal for
/// the run: without it no dependency remappings can be constructed.
pub fn parse_manifest(path: &Path) -> Result<PackageManifest, HarnessError> {
    if !path.exists() {
        return Err(HarnessError::MissingManifest(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path)?;
    let manifest: PackageManifest =
        serde_json::from_str(&contents).map_err(|e| HarnessError::MalformedManifest {
            path: path.to_path_buf(),
            source: e,
        })?;
    info!(
        "found {} dependencies and {} dev dependencies in {}",
        manifest.dependencies.len(),
        manifest.dev_dependencies.len(),
        path.display()
    );
    Ok(manifest)
}

/// Resolve every declared dependency (regular and dev, duplicates collapse)
/// to its directory under `dependency_root`. Dependencies that were never
/// installed are skipped with a warning rather than failing the run.
pub fn resolve_dependencies(
    manifest: &PackageManifest,
    project_dir: &Path,
    dependency_root: &str,
) -> Vec<Dependency> {
    let all: HashSet<&String> = manifest
        .dependencies
        .keys()
        .chain(manifest.dev_dependencies.keys())
        .collect();

    info!("resolving {} dependencies in {}", all.len(), dependency_root);
    let mut resolved = Vec::new();
    for name in all {
        let directory = Path::new(dependency_root).join(name);
        if !project_dir.join(&directory).exists() {
            warn!(
                "dependency {} does not exist in {}",
                name,
                directory.display()
            );
            continue;
        }
        let remap = format!("{}={}", name, directory.display());
        info!("dependency {} found at {}", name, directory.display());
        resolved.push(Dependency {
            name: name.to_string(),
            directory,
            remap,
        });
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_manifest_with_both_dependency_kinds() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(
            &path,
            r#"{"dependencies": {"@openzeppelin/contracts": "^4.8.0"},
                "devDependencies": {"hardhat": "^2.12.0"}}"#,
        )
        .unwrap();

        let manifest = parse_manifest(&path).unwrap();
        assert_eq!(manifest.dependencies.len(), 1);
        assert_eq!(manifest.dev_dependencies.len(), 1);
    }

    #[test]
    fn missing_dependency_sections_default_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"name": "some-project"}"#).unwrap();

        let manifest = parse_manifest(&path).unwrap();
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.dev_dependencies.is_empty());
    }

    #[test]
    fn missing_manifest_is_fatal() {
        let dir = TempDir::new().unwrap();
        let result = parse_manifest(&dir.path().join("package.json"));
        assert!(matches!(result, Err(HarnessError::MissingManifest(_))));
    }

    #[test]
    fn malformed_manifest_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "not json").unwrap();
        let result = parse_manifest(&path);
        assert!(matches!(result, Err(HarnessError::MalformedManifest { .. })));
    }

    #[test]
    fn resolves_only_installed_dependencies() {
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join("node_modules/present")).unwrap();

        let mut manifest = PackageManifest::default();
        manifest
            .dependencies
            .insert("present".to_string(), "1.0.0".to_string());
        manifest
            .dev_dependencies
            .insert("absent".to_string(), "2.0.0".to_string());

        let deps = resolve_dependencies(&manifest, project.path(), DEFAULT_DEPENDENCY_ROOT);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name, "present");
        assert_eq!(deps[0].remap, "present=node_modules/present");
    }

    #[test]
    fn duplicate_names_collapse() {
        let project = TempDir::new().unwrap();
        fs::create_dir_all(project.path().join("node_modules/shared")).unwrap();

        let mut manifest = PackageManifest::default();
        manifest
            .dependencies
            .insert("shared".to_string(), "1.0.0".to_string());
        manifest
            .dev_dependencies
            .insert("shared".to_string(), "1.0.1".to_string());

        let deps = resolve_dependencies(&manifest, project.path(), DEFAULT_DEPENDENCY_ROOT);
        assert_eq!(deps.len(), 1);
    }
}
