use crate::domain::chart::{ChartKind, ChartPoint, ChartRequest, ChartSeries};
use crate::domain::error::{AppError, Result};
use crate::domain::summary::WordFrequency;
use crate::domain::table::{CellValue, ColumnType, Table};

/// Check the requested axes against the table schema
pub fn validate(table: &Table, request: &ChartRequest) -> Result<()> {
    if table.column(&request.x_column).is_none() {
        return Err(AppError::ChartValidation(format!(
            "x axis column '{}' is not in the table",
            request.x_column
        )));
    }

    let y = table.column(&request.y_column).ok_or_else(|| {
        AppError::ChartValidation(format!(
            "y axis column '{}' is not in the table",
            request.y_column
        ))
    })?;

    if request.chart_kind.requires_numeric_y() && y.column_type != ColumnType::Numeric {
        return Err(AppError::ChartValidation(format!(
            "{} chart needs a numeric y axis, '{}' is {}",
            request.chart_kind, y.name, y.column_type
        )));
    }

    Ok(())
}

/// Validated series for the renderer, titled `<x> vs <y>`
pub fn build_chart(table: &Table, request: &ChartRequest) -> Result<ChartSeries> {
    validate(table, request)?;

    let (Some(x), Some(y)) = (table.column(&request.x_column), table.column(&request.y_column))
    else {
        return Err(AppError::ChartValidation("axis column disappeared".to_string()));
    };

    let points = x
        .values
        .iter()
        .zip(&y.values)
        .map(|(x_value, y_value)| ChartPoint {
            x: x_value.clone(),
            y: y_value.as_number(),
        })
        .collect();

    Ok(ChartSeries {
        kind: request.chart_kind,
        title: format!("{} vs {}", request.x_column, request.y_column),
        x_label: request.x_column.clone(),
        y_label: request.y_column.clone(),
        points,
    })
}

/// Numeric columns, or every column when none is numeric
pub fn y_axis_candidates(table: &Table) -> Vec<String> {
    let numeric = table.names_of_type(ColumnType::Numeric);
    if numeric.is_empty() {
        table.column_names()
    } else {
        numeric
    }
}

/// Bar series for the word-frequency panel
pub fn word_frequency_chart(words: &[WordFrequency], limit: usize) -> ChartSeries {
    ChartSeries {
        kind: ChartKind::Bar,
        title: format!("Top {} Words", limit),
        x_label: "Word".to_string(),
        y_label: "Frequency".to_string(),
        points: words
            .iter()
            .map(|w| ChartPoint {
                x: CellValue::Text(w.word.clone()),
                y: Some(w.count as f64),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::Column;

    fn table() -> Table {
        Table::new(vec![
            Column::new(
                "month",
                ColumnType::Text,
                vec![CellValue::Text("Jan".into()), CellValue::Text("Feb".into())],
            ),
            Column::new(
                "revenue",
                ColumnType::Numeric,
                vec![CellValue::Number(100.0), CellValue::Null],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_valid_request_builds_series() {
        let request = ChartRequest::new("month", "revenue", ChartKind::Line);
        let series = build_chart(&table(), &request).unwrap();

        assert_eq!(series.title, "month vs revenue");
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].y, Some(100.0));
        assert_eq!(series.points[1].y, None);
    }

    #[test]
    fn test_rejects_missing_columns() {
        let missing_x = ChartRequest::new("week", "revenue", ChartKind::Bar);
        assert!(matches!(validate(&table(), &missing_x), Err(AppError::ChartValidation(_))));

        let missing_y = ChartRequest::new("month", "profit", ChartKind::Bar);
        assert!(matches!(validate(&table(), &missing_y), Err(AppError::ChartValidation(_))));
    }

    #[test]
    fn test_rejects_text_y_for_every_kind() {
        for kind in [ChartKind::Bar, ChartKind::Line, ChartKind::Scatter] {
            let request = ChartRequest::new("revenue", "month", kind);
            assert!(build_chart(&table(), &request).is_err());
        }
    }

    #[test]
    fn test_y_axis_candidates() {
        assert_eq!(y_axis_candidates(&table()), vec!["revenue"]);

        let text_only = Table::new(vec![Column::new("a", ColumnType::Text, vec![])]).unwrap();
        assert_eq!(y_axis_candidates(&text_only), vec!["a"]);
    }

    #[test]
    fn test_word_frequency_chart() {
        let words = vec![WordFrequency {
            word: "cat".into(),
            count: 3,
        }];
        let series = word_frequency_chart(&words, 10);
        assert_eq!(series.title, "Top 10 Words");
        assert_eq!(series.points[0].y, Some(3.0));
    }
}
