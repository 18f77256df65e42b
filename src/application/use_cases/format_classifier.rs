use crate::domain::error::{AppError, Result};
use crate::domain::upload::{DocumentFormat, FileKind, TabularFormat};

/// Route a file by the lower-cased text after its last `.`
pub fn classify(file_name: &str) -> Result<FileKind> {
    let extension = file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "csv" => Ok(FileKind::Tabular(TabularFormat::Csv)),
        "xlsx" => Ok(FileKind::Tabular(TabularFormat::Xlsx)),
        "pdf" => Ok(FileKind::Document(DocumentFormat::Pdf)),
        "docx" => Ok(FileKind::Document(DocumentFormat::Docx)),
        _ => Err(AppError::UnsupportedFormat(extension)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert_eq!(classify("sales.csv").unwrap(), FileKind::Tabular(TabularFormat::Csv));
        assert_eq!(classify("Q1.Report.XLSX").unwrap(), FileKind::Tabular(TabularFormat::Xlsx));
        assert_eq!(classify("scan.Pdf").unwrap(), FileKind::Document(DocumentFormat::Pdf));
        assert_eq!(classify("memo.docx").unwrap(), FileKind::Document(DocumentFormat::Docx));
    }

    #[test]
    fn test_unsupported_extensions() {
        assert_eq!(
            classify("report.zip"),
            Err(AppError::UnsupportedFormat("zip".to_string()))
        );
        assert!(matches!(classify("legacy.xls"), Err(AppError::UnsupportedFormat(_))));
        assert!(matches!(classify("README"), Err(AppError::UnsupportedFormat(_))));
        assert!(matches!(classify("archive.csv.gz"), Err(AppError::UnsupportedFormat(_))));
    }
}
