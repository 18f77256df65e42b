pub mod analysis_config;
pub mod chart;
pub mod error;
pub mod summary;
pub mod table;
pub mod upload;
