use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppError {
    UnsupportedFormat(String),
    ParseError(String),
    EmptySelection,
    UnknownColumn(String),
    ChartValidation(String),
    ExportError(String),
    ConfigError(String),
    IoError(String),
}

impl AppError {
    /// Stable tag for the presentation layer to branch on.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::UnsupportedFormat(_) => "unsupported_format",
            AppError::ParseError(_) => "parse_error",
            AppError::EmptySelection => "empty_selection",
            AppError::UnknownColumn(_) => "unknown_column",
            AppError::ChartValidation(_) => "chart_validation",
            AppError::ExportError(_) => "export_error",
            AppError::ConfigError(_) => "config_error",
            AppError::IoError(_) => "io_error",
        }
    }

    /// Short message suitable for showing to the person who uploaded the file.
    pub fn user_message(&self) -> String {
        match self {
            AppError::UnsupportedFormat(ext) => {
                format!("Unsupported file format: '{}'. Upload a CSV, XLSX, PDF or DOCX file.", ext)
            }
            AppError::ParseError(msg) => format!("The file could not be read: {}", msg),
            AppError::EmptySelection => "Please select at least one column.".to_string(),
            AppError::UnknownColumn(name) => format!("Column '{}' does not exist.", name),
            AppError::ChartValidation(msg) => format!("Chart cannot be drawn: {}", msg),
            AppError::ExportError(msg) => format!("Report export failed: {}", msg),
            AppError::ConfigError(msg) => format!("Invalid configuration: {}", msg),
            AppError::IoError(msg) => format!("File access failed: {}", msg),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnsupportedFormat(ext) => write!(f, "Unsupported format: {}", ext),
            AppError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            AppError::EmptySelection => write!(f, "Empty column selection"),
            AppError::UnknownColumn(name) => write!(f, "Unknown column: {}", name),
            AppError::ChartValidation(msg) => write!(f, "Chart validation error: {}", msg),
            AppError::ExportError(msg) => write!(f, "Export error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.kind(), "io_error");
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_user_message_mentions_extension() {
        let err = AppError::UnsupportedFormat("zip".to_string());
        assert!(err.user_message().contains("'zip'"));
        assert_eq!(err.kind(), "unsupported_format");
    }
}
