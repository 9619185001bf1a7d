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

//! In-place progress bar
//!
//! Cosmetic only: the runner ticks it once per processed source and nothing
//! reads it back. Redraws are rate-limited for large runs so the bar does
//! not dominate terminal output.

use std::io::Write;

const BAR_WIDTH: usize = 60;

/// A `[████....] j/total (pp.pp%)` bar redrawn in place with `\r`.
pub struct ProgressBar<W: Write> {
    total: usize,
    count: usize,
    /// Redraw every `inc` ticks.
    inc: usize,
    out: W,
}

impl<W: Write> ProgressBar<W> {
    pub fn new(total: usize, mut out: W) -> Self {
        let inc = if total > 1000 { total / 100 } else { 1 };
        if total == 0 {
            let _ = writeln!(out, "[{}] 0/0 (100.00%)", "█".repeat(BAR_WIDTH));
        }
        let mut bar = Self {
            total,
            count: 0,
            inc,
            out,
        };
        if total > 0 {
            bar.draw();
        }
        bar
    }

    /// Record one completed item and redraw if due.
    pub fn tick(&mut self) {
        self.count = (self.count + 1).min(self.total);
        if self.count % self.inc == 0 {
            self.draw();
        }
    }

    /// Move past the in-place line so subsequent output starts fresh.
    pub fn finish(mut self) {
        if self.total > 0 {
            self.draw();
            let _ = writeln!(self.out);
        }
    }

    fn draw(&mut self) {
        let filled = BAR_WIDTH * self.count / self.total.max(1);
        let _ = write!(
            self.out,
            "\r[{}{}] {}/{} ({:.2}%)",
            "█".repeat(filled),
            ".".repeat(BAR_WIDTH - filled),
            self.count,
            self.total,
            100.0 * self.count as f64 / self.total.max(1) as f64
        );
        let _ = self.out.flush();
    }
}
