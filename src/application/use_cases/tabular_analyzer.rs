use std::collections::HashMap;

use crate::domain::error::{AppError, Result};
use crate::domain::summary::{KpiSet, TabularSummary, MODE_PLACEHOLDER};
use crate::domain::table::{CellValue, Column, Table};

/// Shape and missing-cell count. KPIs are attached later, per selection.
pub fn summarize(table: &Table) -> TabularSummary {
    TabularSummary {
        row_count: table.row_count(),
        column_count: table.column_count(),
        null_cell_count: table.columns().iter().map(Column::null_count).sum(),
        kpis: None,
    }
}

/// New table with only the selected columns, in the order given.
/// Repeated names keep their first position.
pub fn filter(table: &Table, selected_columns: &[String]) -> Result<Table> {
    if selected_columns.is_empty() {
        return Err(AppError::EmptySelection);
    }

    let mut picked: Vec<Column> = Vec::with_capacity(selected_columns.len());
    for name in selected_columns {
        if picked.iter().any(|c| &c.name == name) {
            continue;
        }
        let column = table
            .column(name)
            .ok_or_else(|| AppError::UnknownColumn(name.clone()))?;
        picked.push(column.clone());
    }

    Table::new(picked)
}

pub fn compute_kpis(filtered: &Table) -> KpiSet {
    let numeric = filtered.columns().iter().find(|c| c.column_type.is_numeric());
    let categorical = filtered.columns().iter().find(|c| c.column_type.is_categorical());

    KpiSet {
        record_count: filtered.row_count(),
        first_numeric_column_name: numeric.map(|c| c.name.clone()),
        first_numeric_sum: numeric.map(column_sum),
        first_categorical_column_name: categorical.map(|c| c.name.clone()),
        first_categorical_mode: categorical
            .map(|c| column_mode(c).unwrap_or_else(|| MODE_PLACEHOLDER.to_string())),
    }
}

/// Sum of non-null values; an all-null column sums to zero
fn column_sum(column: &Column) -> f64 {
    column.values.iter().filter_map(CellValue::as_number).sum()
}

/// Most frequent non-null value, ties going to the first one seen
fn column_mode(column: &Column) -> Option<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for value in column.values.iter().filter(|v| !v.is_null()) {
        let key = value.to_string();
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push(key);
        }
        *count += 1;
    }

    let mut best: Option<(&String, usize)> = None;
    for key in &order {
        let count = counts[key];
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((key, count));
        }
    }

    best.map(|(key, _)| key.clone())
}
