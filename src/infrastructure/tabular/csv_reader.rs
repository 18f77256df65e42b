// ============================================================
// CSV READER
// ============================================================
// Decode CSV bytes and load them into a typed table

use csv::{ReaderBuilder, Trim};
use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::{debug, warn};

use super::schema::{build_table, RawCell};
use crate::domain::analysis_config::AnalysisConfig;
use crate::domain::error::{AppError, Result};
use crate::domain::table::{CellValue, Table};

const TRUE_TOKENS: &[&str] = &["True", "TRUE", "true"];
const FALSE_TOKENS: &[&str] = &["False", "FALSE", "false"];

/// CSV reader with encoding fallback and missing-value detection
pub struct CsvTableReader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Source of the missing-value markers
    config: AnalysisConfig,
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

impl CsvTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            delimiter: config.csv_delimiter as u8,
            config: config.clone(),
        }
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse CSV bytes; the header row names the columns
    pub fn read(&self, bytes: &[u8]) -> Result<Table> {
        let content = decode_text(bytes);

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(Trim::None)
            .flexible(false)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
            return Err(AppError::ParseError("No columns to parse from file".to_string()));
        }

        let mut columns: Vec<Vec<RawCell>> = vec![Vec::new(); headers.len()];

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            for (column, field) in columns.iter_mut().zip(record.iter()) {
                column.push(self.classify(field));
            }
        }

        debug!(
            columns = headers.len(),
            rows = columns.first().map(|c| c.len()).unwrap_or(0),
            "CSV parsed"
        );

        build_table(&headers, columns)
    }

    fn classify(&self, field: &str) -> RawCell {
        if self.config.is_null_marker(field) {
            return RawCell::null();
        }

        let trimmed = field.trim();
        let value = if let Ok(number) = trimmed.parse::<f64>() {
            CellValue::Number(number)
        } else if TRUE_TOKENS.contains(&trimmed) {
            CellValue::Bool(true)
        } else if FALSE_TOKENS.contains(&trimmed) {
            CellValue::Bool(false)
        } else {
            CellValue::Text(field.to_string())
        };

        RawCell::new(value, field)
    }
}

/// UTF-8 first (BOM stripped), Windows-1252 for anything else
fn decode_text(bytes: &[u8]) -> String {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text.into_owned();
    }

    warn!("CSV is not valid UTF-8, decoding as Windows-1252");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text.into_owned()
}
