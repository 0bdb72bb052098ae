use std::collections::BTreeMap;

/// Bucket key used when a grouped record has no value for the group field.
/// Keeping such records in a bucket preserves the count-sum invariant.
pub const NONE_BUCKET: &str = "(none)";

/// Derived statistics over the visible (post-filter) set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateSummary {
    /// Size of the visible set.
    pub total: usize,

    /// Count per value of the grouping field. Empty when no grouping was
    /// requested. BTreeMap keeps chip/legend order deterministic.
    pub counts: BTreeMap<String, usize>,

    /// Sum/average over the requested numeric field, when any.
    pub numeric: Option<NumericSummary>,
}

impl AggregateSummary {
    /// Count for one group value, zero when the bucket is absent.
    pub fn count_of(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub field: String,
    pub sum: f64,
    pub average: f64,
}
