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

//! Per-run result aggregation

use regex::Regex;
use std::sync::LazyLock;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("static pattern"));

/// Remove terminal color escape sequences.
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Count lines that look like compiler error reports: after stripping color
/// escapes, a trimmed line whose lower-cased form starts with `error:`.
/// Heuristic only; it tracks how the supported tools happen to phrase
/// errors and is not validated against anything stronger.
pub fn count_error_lines(stderr: &str) -> usize {
    strip_ansi(stderr)
        .lines()
        .filter(|line| line.trim().to_lowercase().starts_with("error:"))
        .count()
}

/// The recorded result of running one tool against one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success {
        stdout: String,
        stderr: String,
    },
    Failure {
        stdout: String,
        stderr: String,
        error_count: usize,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn stdout(&self) -> &str {
        match self {
            Outcome::Success { stdout, .. } | Outcome::Failure { stdout, .. } => stdout,
        }
    }

    pub fn stderr(&self) -> &str {
        match self {
            Outcome::Success { stderr, .. } | Outcome::Failure { stderr, .. } => stderr,
        }
    }
}

/// Accumulated outcomes for a single tool run, in run order. Owns
/// everything the report writer later persists.
#[derive(Debug)]
pub struct ToolRunData {
    pub tool_name: String,
    pub import_paths: Vec<String>,
    pub import_maps: Vec<String>,
    /// Every source the run was asked to process. On an early halt only a
    /// prefix of these has an outcome.
    pub sources: Vec<String>,
    outcomes: Vec<(String, Outcome)>,
}

impl ToolRunData {
    pub fn new(
        tool_name: String,
        import_paths: Vec<String>,
        import_maps: Vec<String>,
        sources: Vec<String>,
    ) -> Self {
        Self {
            tool_name,
            import_paths,
            import_maps,
            sources,
            outcomes: Vec::new(),
        }
    }

    pub fn add_success(&mut self, source: &str, stderr: &str, stdout: &str) {
        self.outcomes.push((
            source.to_string(),
            Outcome::Success {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        ));
    }

    pub fn add_failure(&mut self, source: &str, stderr: &str, stdout: &str) {
        self.outcomes.push((
            source.to_string(),
            Outcome::Failure {
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
                error_count: count_error_lines(stderr),
            },
        ));
    }

    pub fn outcomes(&self) -> &[(String, Outcome)] {
        &self.outcomes
    }

    pub fn successes(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|(_, o)| o.is_success())
            .map(|(s, _)| s.as_str())
    }

    /// Failed sources with their heuristic error counts.
    pub fn failures(&self) -> impl Iterator<Item = (&str, usize)> {
        self.outcomes.iter().filter_map(|(s, o)| match o {
            Outcome::Failure { error_count, .. } => Some((s.as_str(), *error_count)),
            Outcome::Success { .. } => None,
        })
    }

    pub fn num_sources(&self) -> usize {
        self.sources.len()
    }

    pub fn num_successes(&self) -> usize {
        self.successes().count()
    }

    pub fn num_failures(&self) -> usize {
        self.failures().count()
    }

    /// Percentage of sources that succeeded. An empty run vacuously
    /// succeeded, which also keeps the division well-defined.
    pub fn success_rate(&self) -> f64 {
        if self.sources.is_empty() {
            return 100.0;
        }
        100.0 * self.num_successes() as f64 / self.num_sources() as f64
    }

    /// Render the success/failure listing to stdout. Display only; the
    /// stored outcomes are not touched.
    pub fn print_summary(&self) {
        let num_successes = self.num_successes();
        let num_failures = self.num_failures();
        let total = num_successes + num_failures;

        if num_successes > 0 {
            println!("Successes for {}:", self.tool_name);
            for source in self.successes() {
                println!("    [\x1b[32;1m + \x1b[0m] {source}");
            }
        }
        if num_failures > 0 {
            println!("Failures:");
            for (source, error_count) in self.failures() {
                println!("    [\x1b[31;1m - \x1b[0m] {source} ({error_count} errors)");
            }
        }
        if total == 0 {
            println!("No outcomes recorded for {}", self.tool_name);
            return;
        }
        println!(
            "    {} / {} successes ({:.2}%)",
            num_successes,
            total,
            100.0 * num_successes as f64 / total as f64
        );
        println!(
            "    {} / {} failures ({:.2}%)",
            num_failures,
            total,
            100.0 * num_failures as f64 / total as f64
        );
    }
}
