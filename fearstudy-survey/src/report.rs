//! Report generation and formatting
//!
//! CLI text for prompts and results, plus the JSON export of a finished run.

use crate::catalog::FearCatalog;
use crate::error::Result;
use crate::filter::FilterMode;
use crate::success::{SuccessEntry, SuccessTable};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Results of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessReport {
    /// Report creation timestamp (RFC 3339)
    pub generated_at: String,

    /// Dataset the subjects were loaded from
    pub dataset: PathBuf,

    /// Number of subjects loaded
    pub subject_count: usize,

    /// Filter applied before computing success, if any
    pub filter_mode: Option<FilterMode>,

    /// Success figures in catalog order
    pub entries: SuccessTable,
}

impl SuccessReport {
    pub fn new(
        dataset: PathBuf,
        subject_count: usize,
        filter_mode: Option<FilterMode>,
        entries: SuccessTable,
    ) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            dataset,
            subject_count,
            filter_mode,
            entries,
        }
    }

    /// Export report to JSON file
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Import report from JSON file
    pub fn import_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let report: SuccessReport = serde_json::from_reader(file)?;
        Ok(report)
    }
}

/// CLI formatter for prompts and results
pub struct CliFormatter;

impl CliFormatter {
    /// Filter mode prompt
    pub fn format_mode_prompt() -> String {
        let mut output = String::new();
        output.push_str("0 = exclude selected fears, 1 = include only selected fears\n");
        output.push_str("Empty input with exclude selected filter mode will select all of the fears.\n");
        output.push_str("Select a filter mode : ");
        output
    }

    /// Catalog listing with positions, followed by the selection prompt
    ///
    /// Example line: ` 2 : Public Speaking`
    pub fn format_selection_prompt(catalog: &FearCatalog) -> String {
        let mut output = String::new();

        output.push_str("All known fears in this survey are listed below. You can select a mode and filter the fears.\n");
        output.push_str("-------------------------\n");
        for (position, fear) in catalog.iter().enumerate() {
            output.push_str(&format!(" {} : {}\n", position, fear));
        }
        output.push_str("-------------------------\n");
        output.push_str("(Example Input : 1,5,4,12,6) - Select fears with comma between them : ");

        output
    }

    /// One result line
    ///
    /// Example: `Fear, Overcome Success = Spiders , 50.00%`
    pub fn format_result_line(entry: &SuccessEntry) -> String {
        format!(
            "Fear, Overcome Success = {} , {:.2}%",
            entry.fear, entry.success_percent
        )
    }

    /// All result lines, one per retained fear
    pub fn format_results(table: &SuccessTable) -> String {
        let mut output = String::new();
        for entry in table.entries() {
            output.push_str(&Self::format_result_line(entry));
            output.push('\n');
        }
        output
    }
}
