// ============================================================
// TABULAR EXTRACTION
// ============================================================
// CSV and XLSX bytes into typed tables

mod csv_reader;
mod schema;
mod xlsx_reader;

pub use csv_reader::CsvTableReader;
pub use xlsx_reader::XlsxTableReader;

use crate::domain::analysis_config::AnalysisConfig;
use crate::domain::error::Result;
use crate::domain::table::Table;
use crate::domain::upload::TabularFormat;

/// Header row becomes column names; source column order is preserved
pub fn extract_table(bytes: &[u8], format: TabularFormat, config: &AnalysisConfig) -> Result<Table> {
    match format {
        TabularFormat::Csv => CsvTableReader::from_config(config).read(bytes),
        TabularFormat::Xlsx => XlsxTableReader::from_config(config).read(bytes),
    }
}
