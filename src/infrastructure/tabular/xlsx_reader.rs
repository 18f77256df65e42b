use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use tracing::debug;

use super::schema::{build_table, RawCell};
use crate::domain::analysis_config::AnalysisConfig;
use crate::domain::error::{AppError, Result};
use crate::domain::table::{CellValue, Table};

/// Loads the first worksheet of an XLSX workbook
#[derive(Debug, Default)]
pub struct XlsxTableReader {
    config: AnalysisConfig,
}

impl XlsxTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn read(&self, bytes: &[u8]) -> Result<Table> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes.to_vec()))
            .map_err(|e| AppError::ParseError(format!("Failed to open Excel file: {}", e)))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AppError::ParseError("No worksheet found".to_string()))?
            .map_err(|e| AppError::ParseError(format!("Failed to read Excel range: {}", e)))?;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row.iter().map(header_text).collect(),
            None => return Ok(Table::default()),
        };

        let mut columns: Vec<Vec<RawCell>> = vec![Vec::new(); headers.len()];
        for row in rows {
            for (column, cell) in columns.iter_mut().zip(row.iter()) {
                column.push(self.raw_cell(cell));
            }
        }

        debug!(
            columns = headers.len(),
            rows = range.height().saturating_sub(1),
            "Excel sheet parsed"
        );

        build_table(&headers, columns)
    }

    /// Empty strings are how exported nulls come back
    fn raw_cell(&self, cell: &Data) -> RawCell {
        match cell {
            Data::Empty | Data::Error(_) => RawCell::null(),
            Data::String(s) if s.is_empty() || self.config.is_null_marker(s) => RawCell::null(),
            Data::Int(i) => RawCell::new(CellValue::Number(*i as f64), i.to_string()),
            Data::Float(f) => RawCell::new(CellValue::Number(*f), CellValue::Number(*f).to_string()),
            Data::Bool(b) => RawCell::new(CellValue::Bool(*b), CellValue::Bool(*b).to_string()),
            Data::String(s) => RawCell::new(CellValue::Text(s.clone()), s.clone()),
            Data::DateTime(dt) => RawCell::temporal(
                dt.as_datetime()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| dt.to_string()),
            ),
            Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::temporal(s.clone()),
        }
    }
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => format!("{}", other),
    }
}
