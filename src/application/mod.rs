pub mod use_cases;

pub use use_cases::file_analysis::{
    AnalysisOutcome, DocumentReport, FailureReport, FileAnalysisUseCase, SelectionOutcome,
    SelectionReport, TabularReport, TextOutcome,
};
