// ============================================================
// SPREADSHEET EXPORT
// ============================================================
// Filtered table to a single-sheet XLSX byte stream

use rust_xlsxwriter::{Formula, Workbook, XlsxError};
use serde::Serialize;

use crate::domain::analysis_config::{AnalysisConfig, XLSX_MIME_TYPE};
use crate::domain::error::{AppError, Result};
use crate::domain::table::{CellValue, Table};

/// Downloadable report
#[derive(Debug, Clone, Serialize)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub size_bytes: usize,
}

pub struct SpreadsheetExporter {
    sheet_name: String,
}

impl SpreadsheetExporter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    /// Header row then raw values, columns in table order.
    /// Nulls are written as `=""` with an empty cached result so that
    /// trailing all-null rows still occupy the sheet.
    pub fn to_bytes(&self, table: &Table) -> Result<Vec<u8>> {
        self.write(table).map_err(|e| AppError::ExportError(e.to_string()))
    }

    fn write(&self, table: &Table) -> std::result::Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.sheet_name.as_str())?;
        worksheet.set_formula_result_default("");

        for (col_idx, column) in table.columns().iter().enumerate() {
            let col = col_idx as u16;
            worksheet.write_string(0, col, column.name.as_str())?;

            for (row_idx, value) in column.values.iter().enumerate() {
                let row = row_idx as u32 + 1;
                match value {
                    CellValue::Null => {
                        worksheet.write_formula(row, col, Formula::new("=\"\""))?;
                    }
                    CellValue::Number(n) => {
                        worksheet.write_number(row, col, *n)?;
                    }
                    CellValue::Bool(b) => {
                        worksheet.write_boolean(row, col, *b)?;
                    }
                    CellValue::Text(s) => {
                        worksheet.write_string(row, col, s.as_str())?;
                    }
                }
            }
        }

        workbook.save_to_buffer()
    }
}

/// Build the download artifact using the configured names
pub fn export_report(table: &Table, config: &AnalysisConfig) -> Result<ExportArtifact> {
    let bytes = SpreadsheetExporter::new(config.export_sheet_name.clone()).to_bytes(table)?;
    Ok(ExportArtifact {
        file_name: config.export_file_name.clone(),
        mime_type: XLSX_MIME_TYPE.to_string(),
        size_bytes: bytes.len(),
        bytes,
    })
}
