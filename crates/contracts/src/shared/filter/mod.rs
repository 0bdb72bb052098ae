mod condition;
mod engine;
mod summary;

pub use condition::{Condition, SortDirection, SortSpec, SENTINEL_ALL};
pub use engine::{apply_filters, FilterCriteria, FilterOutput};
pub use summary::{AggregateSummary, NumericSummary, NONE_BUCKET};

/// Scalar value of a record field, as seen by the filter engine.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text used for equality matching and for grouping buckets.
    pub fn as_group_key(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Record shape the filter engine operates on.
///
/// Implementors expose the fields probed by the free-text search and a
/// by-name scalar accessor. A record returning `None` for a field is a
/// non-match for equality/range criteria on it and sorts last.
pub trait Filterable {
    /// Field names checked by `Condition::Search`, OR-combined.
    fn search_fields(&self) -> &'static [&'static str];

    /// Value of the named field, `None` when the record has no such field.
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}
