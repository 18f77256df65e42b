use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use crate::application::use_cases::format_classifier;
use crate::application::{
    AnalysisOutcome, FileAnalysisUseCase, SelectionOutcome, SelectionReport, TabularReport,
    TextOutcome,
};
use crate::domain::chart::{ChartKind, ChartRequest, ChartSeries};
use crate::domain::error::{AppError, Result};
use crate::domain::table::Table;
use crate::domain::upload::UploadedFile;
use crate::infrastructure::export::ExportArtifact;

#[derive(Parser, Debug)]
#[command(name = "file-insight")]
#[command(about = "Summaries, KPIs and word statistics for CSV, Excel, PDF and Word files")]
#[command(version)]
pub struct Cli {
    /// File to analyse (.csv, .xlsx, .pdf or .docx)
    pub file: PathBuf,

    /// Columns to keep, comma separated (default: all). Pass "" to select none.
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Column for the chart x axis
    #[arg(long, requires = "chart_y")]
    pub chart_x: Option<String>,

    /// Column for the chart y axis (must be numeric)
    #[arg(long, requires = "chart_x")]
    pub chart_y: Option<String>,

    /// Chart type: bar, line or scatter
    #[arg(long, default_value = "bar")]
    pub chart_kind: ChartKind,

    /// Directory to write the filtered XLSX report into
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Print the full payload as JSON
    #[arg(long)]
    pub json: bool,

    /// TOML file with analysis settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Serialize)]
struct CliReport<'a> {
    analysis: &'a AnalysisOutcome,
    chart: Option<ChartSeries>,
    chart_error: Option<String>,
    export: Option<ExportArtifact>,
}

/// Runs one analysis and prints it. Returns whether the file could be analysed.
pub fn run_cli(cli: &Cli, use_case: &FileAnalysisUseCase) -> Result<bool> {
    let bytes = std::fs::read(&cli.file)?;
    let name = cli
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type = format_classifier::classify(&name)
        .map(|kind| kind.mime_type())
        .unwrap_or("application/octet-stream");
    let upload = UploadedFile::new(name, mime_type, bytes);

    let selection: Option<Vec<String>> = cli.columns.as_ref().map(|cols| {
        cols.iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect()
    });

    let outcome = use_case.analyze(&upload, selection.as_deref());

    let mut report = CliReport {
        analysis: &outcome,
        chart: None,
        chart_error: None,
        export: None,
    };

    if let Some(filtered) = selected_table(&outcome) {
        if let (Some(x), Some(y)) = (&cli.chart_x, &cli.chart_y) {
            let request = ChartRequest::new(x.clone(), y.clone(), cli.chart_kind);
            match use_case.chart(filtered, &request) {
                Ok(series) => report.chart = Some(series),
                Err(err) => report.chart_error = Some(err.user_message()),
            }
        }

        if let Some(dir) = &cli.export_dir {
            let artifact = use_case.export(filtered)?;
            let path = dir.join(&artifact.file_name);
            std::fs::write(&path, &artifact.bytes)?;
            info!(path = %path.display(), "Report written");
            report.export = Some(artifact);
        }
    } else if cli.chart_x.is_some() || cli.export_dir.is_some() {
        warn!("Chart and export need a tabular file with at least one selected column");
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::IoError(e.to_string()))?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(!matches!(outcome, AnalysisOutcome::Failed(_)))
}

fn selected_table(outcome: &AnalysisOutcome) -> Option<&Table> {
    match outcome {
        AnalysisOutcome::Tabular(TabularReport {
            selection: SelectionOutcome::Selected(SelectionReport { table, .. }),
            ..
        }) => Some(table),
        _ => None,
    }
}

fn render_text(report: &CliReport<'_>) -> String {
    let mut out = String::new();

    match report.analysis {
        AnalysisOutcome::Failed(failure) => {
            let _ = writeln!(out, "Error: {}", failure.message);
        }
        AnalysisOutcome::Tabular(tabular) => {
            let _ = writeln!(out, "{} ({})", tabular.file.name, tabular.file.size_label);
            let _ = writeln!(
                out,
                "Rows: {}  Columns: {}  Empty cells: {}",
                tabular.summary.row_count, tabular.summary.column_count, tabular.summary.null_cell_count
            );
            let _ = writeln!(out, "\nPreview:");
            render_table(&tabular.preview, &mut out);

            match &tabular.selection {
                SelectionOutcome::EmptySelection { warning } => {
                    let _ = writeln!(out, "\nWarning: {}", warning);
                }
                SelectionOutcome::Selected(selected) => {
                    let _ = writeln!(out);
                    for card in &selected.kpi_cards {
                        let _ = writeln!(out, "{}: {}", card.label, card.value);
                    }
                    let _ = writeln!(out, "Y axis options: {}", selected.y_axis_candidates.join(", "));
                }
            }
        }
        AnalysisOutcome::Document(document) => {
            let _ = writeln!(out, "{} ({})", document.file.name, document.file.size_label);
            match &document.text {
                TextOutcome::NoExtractableText { warning } => {
                    let _ = writeln!(out, "Warning: {}", warning);
                }
                TextOutcome::Content { summary, .. } => {
                    let _ = writeln!(
                        out,
                        "Words: {}  Characters: {}",
                        summary.word_count, summary.char_count
                    );
                    let _ = writeln!(out, "\nMost frequent words:");
                    for word in &summary.top_words {
                        let _ = writeln!(out, "  {:<20} {}", word.word, word.count);
                    }
                }
            }
        }
    }

    if let Some(chart) = &report.chart {
        let _ = writeln!(out, "\n{} ({} chart, {} points)", chart.title, chart.kind, chart.points.len());
    }
    if let Some(err) = &report.chart_error {
        let _ = writeln!(out, "\n{}", err);
    }
    if let Some(export) = &report.export {
        let _ = writeln!(out, "\nReport saved: {} ({} bytes)", export.file_name, export.size_bytes);
    }

    out
}

fn render_table(table: &Table, out: &mut String) {
    let _ = writeln!(out, "  {}", table.column_names().join(" | "));
    for row in table.rows() {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        let _ = writeln!(out, "  {}", cells.join(" | "));
    }
}
