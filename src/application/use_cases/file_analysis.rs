use serde::Serialize;
use tracing::{error, info, warn};

use super::{chart_validator, format_classifier, tabular_analyzer, text_analyzer};
use crate::domain::analysis_config::AnalysisConfig;
use crate::domain::chart::{ChartRequest, ChartSeries};
use crate::domain::error::{AppError, Result};
use crate::domain::summary::{KpiCard, KpiSet, TabularSummary, TextSummary};
use crate::domain::table::{ColumnType, Table};
use crate::domain::upload::{DocumentFormat, FileDetails, FileKind, TabularFormat, UploadedFile};
use crate::infrastructure::document::extract_text;
use crate::infrastructure::export::{export_report, ExportArtifact};
use crate::infrastructure::tabular::extract_table;

pub const EMPTY_SELECTION_WARNING: &str = "Please select at least one column.";
pub const NO_TEXT_WARNING: &str =
    "No meaningful text could be extracted. The content may be an image or a scanned document.";

/// Everything the presentation layer needs for one upload
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Tabular(TabularReport),
    Document(DocumentReport),
    Failed(FailureReport),
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    pub file: FileDetails,
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabularReport {
    pub file: FileDetails,
    pub format: TabularFormat,
    pub summary: TabularSummary,
    pub preview: Table,
    pub all_columns: Vec<String>,
    pub selection: SelectionOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectionOutcome {
    Selected(SelectionReport),
    EmptySelection { warning: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectionReport {
    pub table: Table,
    pub kpis: KpiSet,
    pub kpi_cards: Vec<KpiCard>,
    pub numeric_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub y_axis_candidates: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    pub file: FileDetails,
    pub format: DocumentFormat,
    pub text: TextOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TextOutcome {
    Content {
        raw_text: String,
        summary: TextSummary,
        word_chart: ChartSeries,
    },
    NoExtractableText {
        warning: String,
    },
}

/// Format detection, extraction, statistics and payload assembly for one upload
pub struct FileAnalysisUseCase {
    config: AnalysisConfig,
}

impl Default for FileAnalysisUseCase {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl FileAnalysisUseCase {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Never fails: errors come back as `AnalysisOutcome::Failed`.
    /// `selection = None` selects every column.
    pub fn analyze(&self, upload: &UploadedFile, selection: Option<&[String]>) -> AnalysisOutcome {
        info!(
            file = %upload.name(),
            size_bytes = upload.size_bytes(),
            "Starting analysis"
        );

        match self.try_analyze(upload, selection) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(file = %upload.name(), error = %err, "Analysis failed");
                AnalysisOutcome::Failed(FailureReport {
                    file: upload.details(),
                    kind: err.kind().to_string(),
                    message: err.user_message(),
                })
            }
        }
    }

    fn try_analyze(&self, upload: &UploadedFile, selection: Option<&[String]>) -> Result<AnalysisOutcome> {
        let kind = format_classifier::classify(upload.name())?;
        info!(file = %upload.name(), kind = kind.extension(), "Format detected");

        match kind {
            FileKind::Tabular(format) => self
                .analyze_tabular(upload, format, selection)
                .map(AnalysisOutcome::Tabular),
            FileKind::Document(format) => self
                .analyze_document(upload, format)
                .map(AnalysisOutcome::Document),
        }
    }

    fn analyze_tabular(
        &self,
        upload: &UploadedFile,
        format: TabularFormat,
        selection: Option<&[String]>,
    ) -> Result<TabularReport> {
        let table = extract_table(upload.raw_bytes(), format, &self.config)?;
        let mut summary = tabular_analyzer::summarize(&table);

        info!(
            rows = summary.row_count,
            columns = summary.column_count,
            nulls = summary.null_cell_count,
            "Table loaded"
        );

        let all_columns = table.column_names();
        let selected = selection.map(|s| s.to_vec()).unwrap_or_else(|| all_columns.clone());

        let selection = match tabular_analyzer::filter(&table, &selected) {
            Ok(filtered) => {
                let kpis = tabular_analyzer::compute_kpis(&filtered);
                summary.kpis = Some(kpis.clone());
                SelectionOutcome::Selected(SelectionReport {
                    kpi_cards: kpis.cards(),
                    kpis,
                    numeric_columns: filtered.names_of_type(ColumnType::Numeric),
                    categorical_columns: filtered.names_of_type(ColumnType::Text),
                    y_axis_candidates: chart_validator::y_axis_candidates(&filtered),
                    table: filtered,
                })
            }
            Err(AppError::EmptySelection) => {
                warn!(file = %upload.name(), "No columns selected, skipping KPIs and charts");
                SelectionOutcome::EmptySelection {
                    warning: EMPTY_SELECTION_WARNING.to_string(),
                }
            }
            Err(err) => return Err(err),
        };

        Ok(TabularReport {
            file: upload.details(),
            format,
            summary,
            preview: table.head(self.config.preview_rows),
            all_columns,
            selection,
        })
    }

    fn analyze_document(&self, upload: &UploadedFile, format: DocumentFormat) -> Result<DocumentReport> {
        let document = extract_text(upload.raw_bytes(), format)?;
        let limit = self.config.top_words_limit;

        let text = match text_analyzer::summarize(&document, limit) {
            Some(summary) => {
                info!(
                    words = summary.word_count,
                    chars = summary.char_count,
                    "Text extracted"
                );
                TextOutcome::Content {
                    word_chart: chart_validator::word_frequency_chart(&summary.top_words, limit),
                    raw_text: document.raw_text,
                    summary,
                }
            }
            None => {
                warn!(file = %upload.name(), "Document has no extractable text");
                TextOutcome::NoExtractableText {
                    warning: NO_TEXT_WARNING.to_string(),
                }
            }
        };

        Ok(DocumentReport {
            file: upload.details(),
            format,
            text,
        })
    }

    /// Chart data for user-chosen axes on the filtered table
    pub fn chart(&self, table: &Table, request: &ChartRequest) -> Result<ChartSeries> {
        chart_validator::build_chart(table, request).map_err(|err| {
            warn!(error = %err, "Chart request rejected");
            err
        })
    }

    /// Spreadsheet download for the filtered table
    pub fn export(&self, table: &Table) -> Result<ExportArtifact> {
        let artifact = export_report(table, &self.config)?;
        info!(
            file_name = %artifact.file_name,
            size_bytes = artifact.size_bytes,
            "Report exported"
        );
        Ok(artifact)
    }
}
