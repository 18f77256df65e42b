pub mod chart_validator;
pub mod file_analysis;
pub mod format_classifier;
pub mod tabular_analyzer;
pub mod text_analyzer;
