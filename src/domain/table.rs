// ============================================================
// TABLE TYPES
// ============================================================
// Row/column dataset with a typed, ordered schema

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{AppError, Result};

/// Type tag decided once at extraction time and carried in the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Numeric,
    Text,
    Boolean,
    /// Spreadsheet date/time cells, kept as their rendered text
    DateTime,
}

impl ColumnType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }

    /// Text columns are the categorical ones for KPI purposes
    pub fn is_categorical(&self) -> bool {
        matches!(self, ColumnType::Text)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Boolean => write!(f, "boolean"),
            ColumnType::DateTime => write!(f, "datetime"),
        }
    }
}

/// A single cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Number(f64),
    Bool(bool),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{:.0}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A named column holding cells of one declared type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            column_type,
            values,
        }
    }

    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}

/// In-memory dataset. All columns have the same number of rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table, rejecting ragged columns and duplicate names
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(|c| c.values.len()).unwrap_or(0);

        for column in &columns {
            if column.values.len() != row_count {
                return Err(AppError::ParseError(format!(
                    "column '{}' has {} rows, expected {}",
                    column.name,
                    column.values.len(),
                    row_count
                )));
            }
        }

        for (idx, column) in columns.iter().enumerate() {
            if columns[..idx].iter().any(|c| c.name == column.name) {
                return Err(AppError::ParseError(format!(
                    "duplicate column name '{}'",
                    column.name
                )));
            }
        }

        Ok(Self { columns, row_count })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// First `n` rows as a new table
    pub fn head(&self, n: usize) -> Table {
        let take = n.min(self.row_count);
        let columns = self
            .columns
            .iter()
            .map(|c| Column::new(c.name.clone(), c.column_type, c.values[..take].to_vec()))
            .collect();
        Table {
            columns,
            row_count: take,
        }
    }

    /// Row-major view, mostly for rendering
    pub fn rows(&self) -> Vec<Vec<&CellValue>> {
        (0..self.row_count)
            .map(|row| self.columns.iter().map(|c| &c.values[row]).collect())
            .collect()
    }

    pub fn names_of_type(&self, column_type: ColumnType) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.column_type == column_type)
            .map(|c| c.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[f64]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::Number(*v)).collect()
    }

    #[test]
    fn test_rejects_ragged_columns() {
        let result = Table::new(vec![
            Column::new("a", ColumnType::Numeric, numbers(&[1.0, 2.0])),
            Column::new("b", ColumnType::Numeric, numbers(&[1.0])),
        ]);
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = Table::new(vec![
            Column::new("a", ColumnType::Numeric, numbers(&[1.0])),
            Column::new("a", ColumnType::Numeric, numbers(&[2.0])),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_head_and_rows() {
        let table = Table::new(vec![
            Column::new("a", ColumnType::Numeric, numbers(&[1.0, 2.0, 3.0])),
            Column::new(
                "b",
                ColumnType::Text,
                vec![
                    CellValue::Text("x".into()),
                    CellValue::Null,
                    CellValue::Text("z".into()),
                ],
            ),
        ])
        .unwrap();

        let head = table.head(2);
        assert_eq!(head.row_count(), 2);
        assert_eq!(head.column_count(), 2);
        assert_eq!(table.head(10).row_count(), 3);

        let rows = table.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][1], &CellValue::Null);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::Number(6.0).to_string(), "6");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Bool(true).to_string(), "True");
        assert_eq!(CellValue::Null.to_string(), "");
    }
}
