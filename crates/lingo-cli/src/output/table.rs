//! Table formatting utilities for CLI output.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language code (e.g., "es", "fr").
    pub language: String,
    /// Number of messages with a non-empty translation.
    pub translated: usize,
    /// Source messages without a translation.
    pub missing: Vec<String>,
}

impl LanguageCoverage {
    fn percent(&self, total: usize) -> f64 {
        if total == 0 {
            100.0
        } else {
            self.translated as f64 * 100.0 / total as f64
        }
    }
}

/// Format coverage data as an ASCII table, one row per language.
pub fn format_coverage_table(total: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Translated", "Missing", "Coverage"]);

    for lang in coverage {
        table.add_row(vec![
            Cell::new(&lang.language),
            Cell::new(format!("{}/{}", lang.translated, total))
                .set_alignment(CellAlignment::Right),
            Cell::new(lang.missing.len().to_string()).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}%", lang.percent(total)))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
