//! Diagnostic grouping by line.
//!
//! The index is a derived, disposable view: it owns a copy of the diagnostics it groups and
//! is discarded and rebuilt whenever the scanner re-runs. Within a line, insertion order is
//! preserved (insertion order = detection order).

use glint_core::{Diagnostic, Severity};
use std::collections::HashMap;

/// Diagnostics grouped by 1-based line number for O(1) render-time lookup.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticIndex {
    by_line: HashMap<u32, Vec<Diagnostic>>,
    total: usize,
}

impl DiagnosticIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group diagnostics by line, preserving input order within each group.
    pub fn from_diagnostics(diagnostics: impl IntoIterator<Item = Diagnostic>) -> Self {
        let mut by_line: HashMap<u32, Vec<Diagnostic>> = HashMap::new();
        let mut total = 0;
        for diagnostic in diagnostics {
            by_line.entry(diagnostic.line).or_default().push(diagnostic);
            total += 1;
        }
        Self { by_line, total }
    }

    /// All diagnostics on a 1-based line, in detection order. Empty for clean lines.
    pub fn get(&self, line: u32) -> &[Diagnostic] {
        self.by_line.get(&line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The 1-based line numbers that carry diagnostics, ascending.
    pub fn lines(&self) -> Vec<u32> {
        let mut lines: Vec<u32> = self.by_line.keys().copied().collect();
        lines.sort_unstable();
        lines
    }

    /// Total diagnostic count across all lines.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Returns `true` if no diagnostics are indexed.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// `(errors, warnings)` tallies, for problems panels and status bars.
    pub fn severity_counts(&self) -> (usize, usize) {
        let mut errors = 0;
        let mut warnings = 0;
        for diagnostic in self.by_line.values().flatten() {
            match diagnostic.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
            }
        }
        (errors, warnings)
    }
}
