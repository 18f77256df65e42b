mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
mod interfaces;

pub use app::run;
pub use application::{AnalysisOutcome, FileAnalysisUseCase, SelectionOutcome, TextOutcome};
pub use domain::analysis_config::AnalysisConfig;
pub use domain::chart::{ChartKind, ChartRequest, ChartSeries};
pub use domain::error::{AppError, Result};
pub use domain::table::{CellValue, Column, ColumnType, Table};
pub use domain::upload::UploadedFile;
pub use infrastructure::config::ConfigService;
pub use infrastructure::export::ExportArtifact;
