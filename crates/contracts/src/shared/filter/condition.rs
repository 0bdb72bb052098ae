use serde::{Deserialize, Serialize};

use super::{FieldValue, Filterable};

/// Sentinel select value meaning "no constraint on this dimension".
pub const SENTINEL_ALL: &str = "all";

/// A single filter criterion. Active criteria are AND-combined by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// Case-insensitive substring over the record's search fields (OR).
    Search { term: String },

    /// Case-sensitive equality on one field; `"all"` or empty is a no-op.
    Equals { field: String, value: String },

    /// Inclusive numeric range on one field.
    Range {
        field: String,
        min: Option<f64>,
        max: Option<f64>,
    },
}

impl Condition {
    pub fn search(term: impl Into<String>) -> Self {
        Condition::Search { term: term.into() }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn range(field: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Condition::Range {
            field: field.into(),
            min,
            max,
        }
    }

    /// Whether the condition constrains anything. Sentinel values make a
    /// condition inactive so select defaults can be passed through as-is.
    pub fn is_active(&self) -> bool {
        match self {
            Condition::Search { term } => !term.trim().is_empty(),
            Condition::Equals { value, .. } => !value.is_empty() && value != SENTINEL_ALL,
            Condition::Range { min, max, .. } => min.is_some() || max.is_some(),
        }
    }

    /// Match one record. Inactive conditions match everything; a record
    /// missing the probed field never matches an active equality/range.
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        if !self.is_active() {
            return true;
        }
        match self {
            Condition::Search { term } => {
                let needle = term.trim().to_lowercase();
                record.search_fields().iter().any(|field| {
                    match record.field_value(field) {
                        Some(FieldValue::Text(text)) => text.to_lowercase().contains(&needle),
                        Some(other) => other.as_group_key().to_lowercase().contains(&needle),
                        None => false,
                    }
                })
            }
            Condition::Equals { field, value } => record
                .field_value(field)
                .map(|v| v.as_group_key() == *value)
                .unwrap_or(false),
            Condition::Range { field, min, max } => {
                match record.field_value(field).and_then(|v| v.as_number()) {
                    Some(n) => {
                        min.map(|lo| n >= lo).unwrap_or(true) && max.map(|hi| n <= hi).unwrap_or(true)
                    }
                    None => false,
                }
            }
        }
    }

    /// Human-readable chip text for the active-filter badges.
    pub fn display_text(&self, field_label: &str) -> String {
        match self {
            Condition::Search { term } => format!("{}: {}", field_label, term.trim()),
            Condition::Equals { value, .. } => format!("{}: {}", field_label, value),
            Condition::Range { min, max, .. } => match (min, max) {
                (Some(lo), Some(hi)) => format!("{}: {} - {}", field_label, lo, hi),
                (Some(lo), None) => format!("{} >= {}", field_label, lo),
                (None, Some(hi)) => format!("{} <= {}", field_label, hi),
                (None, None) => format!("{}: any", field_label),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort request applied after filtering. The sort is stable; records missing
/// the field sort last in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,

    /// Compare by |value|. Used by variance columns where the largest
    /// deviation in either sign comes first.
    #[serde(default)]
    pub by_absolute: bool,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
            by_absolute: false,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
            by_absolute: false,
        }
    }

    pub fn by_absolute_descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
            by_absolute: true,
        }
    }
}
