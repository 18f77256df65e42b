// ============================================================
// ANALYSIS CONFIGURATION
// ============================================================
// Tunables for extraction, analysis and report export

use serde::{Deserialize, Serialize};

/// Tokens read as missing values in CSV input
pub const DEFAULT_NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Configuration for one analysis session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of entries in the word-frequency list (default: 10)
    pub top_words_limit: usize,

    /// Rows shown in the table preview (default: 5)
    pub preview_rows: usize,

    /// CSV field delimiter (default: ',')
    pub csv_delimiter: char,

    /// Cell contents treated as missing in CSV input
    pub null_markers: Vec<String>,

    /// Download name for the filtered report
    pub export_file_name: String,

    /// Worksheet name inside the exported report
    pub export_sheet_name: String,

    /// Tracing filter used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words_limit: 10,
            preview_rows: 5,
            csv_delimiter: ',',
            null_markers: DEFAULT_NULL_MARKERS.iter().map(|s| s.to_string()).collect(),
            export_file_name: "analysis_report.xlsx".to_string(),
            export_sheet_name: "Sheet1".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.top_words_limit == 0 {
            return Err("top_words_limit must be > 0".to_string());
        }
        if self.preview_rows == 0 {
            return Err("preview_rows must be > 0".to_string());
        }
        if !self.csv_delimiter.is_ascii() || self.csv_delimiter == '"' {
            return Err("csv_delimiter must be a single ASCII character other than '\"'".to_string());
        }
        if self.export_sheet_name.trim().is_empty() {
            return Err("export_sheet_name must not be empty".to_string());
        }
        if self.export_sheet_name.chars().count() > 31 {
            return Err("export_sheet_name must be at most 31 characters".to_string());
        }
        if !self.export_file_name.to_lowercase().ends_with(".xlsx") {
            return Err("export_file_name must end with .xlsx".to_string());
        }
        Ok(())
    }

    pub fn is_null_marker(&self, value: &str) -> bool {
        self.null_markers.iter().any(|m| m == value)
    }
}
