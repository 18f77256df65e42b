use serde::{Deserialize, Serialize};

/// Placeholder shown when a mode cannot be computed
pub const MODE_PLACEHOLDER: &str = "-";

/// Shape and missing-value count of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub null_cell_count: usize,
    /// Filled in once a non-empty column selection exists
    pub kpis: Option<KpiSet>,
}

/// Derived metrics for a filtered table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSet {
    pub record_count: usize,
    pub first_numeric_column_name: Option<String>,
    pub first_numeric_sum: Option<f64>,
    pub first_categorical_column_name: Option<String>,
    pub first_categorical_mode: Option<String>,
}

/// Label/value pair ready for a metric widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
}

impl KpiSet {
    pub fn cards(&self) -> Vec<KpiCard> {
        let mut cards = vec![KpiCard {
            label: "Total records".to_string(),
            value: self.record_count.to_string(),
        }];

        cards.push(match (&self.first_numeric_column_name, self.first_numeric_sum) {
            (Some(name), Some(sum)) => KpiCard {
                label: format!("Total {}", name),
                value: format_amount(sum),
            },
            _ => KpiCard {
                label: "Numeric data".to_string(),
                value: "None".to_string(),
            },
        });

        cards.push(match &self.first_categorical_column_name {
            Some(name) => KpiCard {
                label: format!("Most frequent: {}", name),
                value: self
                    .first_categorical_mode
                    .clone()
                    .unwrap_or_else(|| MODE_PLACEHOLDER.to_string()),
            },
            None => KpiCard {
                label: "Categorical data".to_string(),
                value: "None".to_string(),
            },
        });

        cards
    }
}

/// Two decimals with thousands separators, e.g. `1,234.50`
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Plain text pulled from a document, in source order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextDocument {
    pub raw_text: String,
}

impl TextDocument {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
        }
    }

    /// True for empty or whitespace-only text (e.g. scanned images)
    pub fn is_blank(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSummary {
    pub word_count: usize,
    pub char_count: usize,
    pub top_words: Vec<WordFrequency>,
}
