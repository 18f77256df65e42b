use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::AppError;
use super::table::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
}

impl ChartKind {
    /// Every supported kind plots a magnitude on the y axis
    pub fn requires_numeric_y(&self) -> bool {
        match self {
            ChartKind::Bar | ChartKind::Line | ChartKind::Scatter => true,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Line => write!(f, "line"),
            ChartKind::Scatter => write!(f, "scatter"),
        }
    }
}

impl FromStr for ChartKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "scatter" => Ok(ChartKind::Scatter),
            other => Err(AppError::ChartValidation(format!(
                "unknown chart type '{}'",
                other
            ))),
        }
    }
}

/// Axis and chart type chosen by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub x_column: String,
    pub y_column: String,
    pub chart_kind: ChartKind,
}

impl ChartRequest {
    pub fn new(x_column: impl Into<String>, y_column: impl Into<String>, chart_kind: ChartKind) -> Self {
        Self {
            x_column: x_column.into(),
            y_column: y_column.into(),
            chart_kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: CellValue,
    pub y: Option<f64>,
}

/// Validated data series handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chart_kind() {
        assert_eq!("Bar".parse::<ChartKind>().unwrap(), ChartKind::Bar);
        assert_eq!(" line ".parse::<ChartKind>().unwrap(), ChartKind::Line);
        assert!("pie".parse::<ChartKind>().is_err());
    }
}
