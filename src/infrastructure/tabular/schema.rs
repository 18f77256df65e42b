// ============================================================
// SCHEMA INFERENCE
// ============================================================
// Header hygiene and one-shot column type decisions

use crate::domain::error::Result;
use crate::domain::table::{CellValue, Column, ColumnType, Table};

/// A cell as read from the source, before its column type is known.
/// `text` is the rendering used if the column turns out to be textual.
#[derive(Debug, Clone)]
pub struct RawCell {
    pub value: CellValue,
    pub text: String,
    pub temporal: bool,
}

impl RawCell {
    pub fn null() -> Self {
        Self {
            value: CellValue::Null,
            text: String::new(),
            temporal: false,
        }
    }

    pub fn new(value: CellValue, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
            temporal: false,
        }
    }

    /// Date, time or duration cell rendered as text
    pub fn temporal(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: CellValue::Text(text.clone()),
            text,
            temporal: true,
        }
    }
}

/// Blank headers become `Unnamed: <idx>`, repeats become `name.1`, `name.2`, ...
pub fn normalize_headers(raw: &[String]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(raw.len());

    for (idx, header) in raw.iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            header.clone()
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while names.contains(&candidate) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        names.push(candidate);
    }

    names
}

/// Decide a column's type from its non-null cells.
/// All-null columns are numeric, matching how missing values load as NaN.
/// Booleans with gaps fall back to text, as an object column would.
pub fn infer_column_type(cells: &[RawCell]) -> ColumnType {
    let mut present = cells.iter().filter(|c| !c.value.is_null()).peekable();

    if present.peek().is_none() {
        return ColumnType::Numeric;
    }

    let mut all_numbers = true;
    let mut all_bools = true;
    let mut all_temporal = true;
    for cell in present {
        if !cell.temporal {
            all_temporal = false;
        }
        match cell.value {
            CellValue::Number(_) => all_bools = false,
            CellValue::Bool(_) => all_numbers = false,
            _ => {
                all_numbers = false;
                all_bools = false;
            }
        }
    }

    let has_nulls = cells.iter().any(|c| c.value.is_null());
    if all_numbers {
        ColumnType::Numeric
    } else if all_temporal {
        ColumnType::DateTime
    } else if all_bools && !has_nulls {
        ColumnType::Boolean
    } else {
        ColumnType::Text
    }
}

/// Assemble a typed table from column-major raw cells
pub fn build_table(headers: &[String], columns: Vec<Vec<RawCell>>) -> Result<Table> {
    let names = normalize_headers(headers);

    let typed = names
        .into_iter()
        .zip(columns)
        .map(|(name, cells)| {
            let column_type = infer_column_type(&cells);
            let values = cells
                .into_iter()
                .map(|cell| match (column_type, cell.value) {
                    (_, CellValue::Null) => CellValue::Null,
                    (ColumnType::Text | ColumnType::DateTime, _) => CellValue::Text(cell.text),
                    (_, value) => value,
                })
                .collect();
            Column::new(name, column_type, values)
        })
        .collect();

    Table::new(typed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: f64) -> RawCell {
        RawCell::new(CellValue::Number(v), v.to_string())
    }

    fn text(s: &str) -> RawCell {
        RawCell::new(CellValue::Text(s.to_string()), s)
    }

    #[test]
    fn test_normalize_headers() {
        let raw = vec!["a".to_string(), "".to_string(), "a".to_string(), "a".to_string()];
        assert_eq!(normalize_headers(&raw), vec!["a", "Unnamed: 1", "a.1", "a.2"]);
    }

    #[test]
    fn test_infer_types() {
        assert_eq!(infer_column_type(&[num(1.0), RawCell::null()]), ColumnType::Numeric);
        assert_eq!(infer_column_type(&[num(1.0), text("x")]), ColumnType::Text);
        assert_eq!(
            infer_column_type(&[RawCell::new(CellValue::Bool(true), "True")]),
            ColumnType::Boolean
        );
        assert_eq!(infer_column_type(&[RawCell::null(), RawCell::null()]), ColumnType::Numeric);
        assert_eq!(infer_column_type(&[]), ColumnType::Numeric);
    }

    #[test]
    fn test_boolean_with_gaps_is_text() {
        let table = build_table(
            &["flag".to_string()],
            vec![vec![
                RawCell::new(CellValue::Bool(true), "True"),
                RawCell::null(),
                RawCell::new(CellValue::Bool(true), "True"),
            ]],
        )
        .unwrap();

        let column = &table.columns()[0];
        assert_eq!(column.column_type, ColumnType::Text);
        assert_eq!(column.values[0], CellValue::Text("True".into()));
        assert_eq!(column.values[1], CellValue::Null);
    }

    #[test]
    fn test_temporal_cells() {
        let dates = [RawCell::temporal("2024-01-05 00:00:00"), RawCell::null()];
        assert_eq!(infer_column_type(&dates), ColumnType::DateTime);

        let mixed = [RawCell::temporal("2024-01-05 00:00:00"), text("soon")];
        assert_eq!(infer_column_type(&mixed), ColumnType::Text);
    }

    #[test]
    fn test_mixed_column_keeps_source_text() {
        let table = build_table(
            &["v".to_string()],
            vec![vec![RawCell::new(CellValue::Number(1.5), "1.50"), text("n/a-ish")]],
        )
        .unwrap();

        let column = &table.columns()[0];
        assert_eq!(column.column_type, ColumnType::Text);
        assert_eq!(column.values[0], CellValue::Text("1.50".into()));
    }
}
