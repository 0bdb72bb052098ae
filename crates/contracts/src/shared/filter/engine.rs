use std::cmp::Ordering;

use super::condition::{Condition, SortDirection, SortSpec};
use super::summary::{AggregateSummary, NumericSummary, NONE_BUCKET};
use super::{FieldValue, Filterable};

/// Everything a page asks of the engine in one pass: which records to show,
/// in what order, and which derived statistics to compute over them.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Active conditions are AND-combined; inactive ones are no-ops.
    pub conditions: Vec<Condition>,

    pub sort: Option<SortSpec>,

    /// Field to group the visible set by for per-bucket counts.
    pub group_by: Option<String>,

    /// Numeric field to sum/average over the visible set.
    pub aggregate: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_group_by(mut self, field: impl Into<String>) -> Self {
        self.group_by = Some(field.into());
        self
    }

    pub fn with_aggregate(mut self, field: impl Into<String>) -> Self {
        self.aggregate = Some(field.into());
        self
    }

    fn matches<T: Filterable>(&self, record: &T) -> bool {
        self.conditions.iter().all(|c| c.matches(record))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutput<T> {
    pub visible: Vec<T>,
    pub summary: AggregateSummary,
}

/// Compute the displayable subset and its summary. Pure: same inputs always
/// produce the same output, and `records` is left untouched.
pub fn apply_filters<T: Filterable + Clone>(
    records: &[T],
    criteria: &FilterCriteria,
) -> FilterOutput<T> {
    let mut visible: Vec<T> = records
        .iter()
        .filter(|r| criteria.matches(*r))
        .cloned()
        .collect();

    if let Some(sort) = &criteria.sort {
        sort_records(&mut visible, sort);
    }

    let summary = summarize(&visible, criteria);

    FilterOutput { visible, summary }
}

/// Stable sort by the named field. Records without the field sort last in
/// either direction.
fn sort_records<T: Filterable>(records: &mut [T], sort: &SortSpec) {
    records.sort_by(|a, b| {
        let va = sort_key(a, sort);
        let vb = sort_key(b, sort);
        match (va, vb) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => {
                let ord = compare_values(&x, &y);
                match sort.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            }
        }
    });
}

fn sort_key<T: Filterable>(record: &T, sort: &SortSpec) -> Option<FieldValue> {
    let value = record.field_value(&sort.field)?;
    if sort.by_absolute {
        // Non-numeric values fall back to their plain ordering.
        if let Some(n) = value.as_number() {
            return Some(FieldValue::Number(n.abs()));
        }
    }
    Some(value)
}

fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(y),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        // Mixed types should not happen for a well-formed field; order by
        // textual form so the result is at least deterministic.
        _ => a.as_group_key().cmp(&b.as_group_key()),
    }
}

fn summarize<T: Filterable>(visible: &[T], criteria: &FilterCriteria) -> AggregateSummary {
    let mut summary = AggregateSummary {
        total: visible.len(),
        ..Default::default()
    };

    if let Some(group_field) = &criteria.group_by {
        for record in visible {
            let bucket = record
                .field_value(group_field)
                .map(|v| v.as_group_key())
                .unwrap_or_else(|| NONE_BUCKET.to_string());
            *summary.counts.entry(bucket).or_insert(0) += 1;
        }
    }

    if let Some(aggregate_field) = &criteria.aggregate {
        let values: Vec<f64> = visible
            .iter()
            .filter_map(|r| r.field_value(aggregate_field).and_then(|v| v.as_number()))
            .collect();
        if !values.is_empty() {
            let sum: f64 = values.iter().sum();
            summary.numeric = Some(NumericSummary {
                field: aggregate_field.clone(),
                sum,
                average: sum / values.len() as f64,
            });
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::SENTINEL_ALL;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        status: Option<String>,
        variance: Option<f64>,
    }

    impl Row {
        fn new(id: &str, name: &str, status: &str, variance: f64) -> Self {
            Self {
                id: id.into(),
                name: name.into(),
                status: Some(status.into()),
                variance: Some(variance),
            }
        }
    }

    impl Filterable for Row {
        fn search_fields(&self) -> &'static [&'static str] {
            &["id", "name"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "id" => Some(FieldValue::Text(self.id.clone())),
                "name" => Some(FieldValue::Text(self.name.clone())),
                "status" => self.status.clone().map(FieldValue::Text),
                "variance" => self.variance.map(FieldValue::Number),
                _ => None,
            }
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            Row::new("SKU-001", "Aspirin 100mg", "normal", 4.2),
            Row::new("SKU-002", "Metformin 500mg", "warning", -25.8),
            Row::new("SKU-003", "Losartan 50mg", "critical", -100.0),
            Row::new("SKU-004", "Omeprazole 20mg", "normal", -3.3),
            Row::new("SKU-005", "Salbutamol inhaler", "warning", 14.3),
        ]
    }

    #[test]
    fn sentinel_criteria_are_no_ops() {
        let rows = sample();
        let criteria = FilterCriteria::new()
            .with_condition(Condition::search(""))
            .with_condition(Condition::equals("status", SENTINEL_ALL))
            .with_condition(Condition::range("variance", None, None));
        let out = apply_filters(&rows, &criteria);
        assert_eq!(out.visible, rows);
        assert_eq!(out.summary.total, rows.len());
    }

    #[test]
    fn search_is_case_insensitive_or_across_fields() {
        let rows = sample();
        let criteria = FilterCriteria::new().with_condition(Condition::search("aspirin"));
        let out = apply_filters(&rows, &criteria);
        assert_eq!(out.visible.len(), 1);
        assert_eq!(out.visible[0].id, "SKU-001");

        // Term matching the id field instead of the name.
        let criteria = FilterCriteria::new().with_condition(Condition::search("sku-00"));
        assert_eq!(apply_filters(&rows, &criteria).visible.len(), 5);
    }

    #[test]
    fn active_conditions_are_and_combined() {
        let rows = sample();
        let criteria = FilterCriteria::new()
            .with_condition(Condition::search("m"))
            .with_condition(Condition::equals("status", "warning"));
        let out = apply_filters(&rows, &criteria);
        assert!(out
            .visible
            .iter()
            .all(|r| r.status.as_deref() == Some("warning")));
        assert_eq!(out.visible.len(), 2);
    }

    #[test]
    fn equality_is_case_sensitive() {
        let rows = sample();
        let criteria = FilterCriteria::new().with_condition(Condition::equals("status", "Warning"));
        assert!(apply_filters(&rows, &criteria).visible.is_empty());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let rows = sample();
        let criteria =
            FilterCriteria::new().with_condition(Condition::range("variance", Some(-3.3), Some(4.2)));
        let out = apply_filters(&rows, &criteria);
        let ids: Vec<&str> = out.visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["SKU-001", "SKU-004"]);
    }

    #[test]
    fn missing_field_never_matches_equality() {
        let mut rows = sample();
        rows[0].status = None;
        let criteria = FilterCriteria::new().with_condition(Condition::equals("status", "normal"));
        let out = apply_filters(&rows, &criteria);
        assert_eq!(out.visible.len(), 1);
        assert_eq!(out.visible[0].id, "SKU-004");
    }

    #[test]
    fn unknown_field_is_treated_as_missing_not_a_panic() {
        let rows = sample();
        let criteria = FilterCriteria::new()
            .with_condition(Condition::equals("no_such_field", "x"))
            .with_sort(SortSpec::ascending("also_missing"))
            .with_group_by("still_missing");
        let out = apply_filters(&rows, &criteria);
        assert!(out.visible.is_empty());
    }

    #[test]
    fn summary_counts_sum_to_visible_len() {
        let rows = sample();
        let criteria = FilterCriteria::new()
            .with_condition(Condition::search("m"))
            .with_group_by("status");
        let out = apply_filters(&rows, &criteria);
        let total: usize = out.summary.counts.values().sum();
        assert_eq!(total, out.visible.len());
        assert_eq!(out.summary.total, out.visible.len());
    }

    #[test]
    fn records_without_group_field_land_in_none_bucket() {
        let mut rows = sample();
        rows[2].status = None;
        let criteria = FilterCriteria::new().with_group_by("status");
        let out = apply_filters(&rows, &criteria);
        assert_eq!(out.summary.count_of(NONE_BUCKET), 1);
        let total: usize = out.summary.counts.values().sum();
        assert_eq!(total, out.visible.len());
    }

    #[test]
    fn numeric_aggregate_sum_and_average() {
        let rows = vec![
            Row::new("A", "a", "normal", 10.0),
            Row::new("B", "b", "normal", 20.0),
            Row::new("C", "c", "normal", 30.0),
        ];
        let criteria = FilterCriteria::new().with_aggregate("variance");
        let summary = apply_filters(&rows, &criteria).summary;
        let numeric = summary.numeric.unwrap();
        assert_eq!(numeric.sum, 60.0);
        assert_eq!(numeric.average, 20.0);
    }

    #[test]
    fn refiltering_visible_set_is_idempotent() {
        let rows = sample();
        let criteria = FilterCriteria::new()
            .with_condition(Condition::search("m"))
            .with_condition(Condition::equals("status", "warning"))
            .with_sort(SortSpec::ascending("name"));
        let first = apply_filters(&rows, &criteria);
        let second = apply_filters(&first.visible, &criteria);
        assert_eq!(first.visible, second.visible);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn sort_by_absolute_variance_descending() {
        let rows = sample();
        let criteria =
            FilterCriteria::new().with_sort(SortSpec::by_absolute_descending("variance"));
        let out = apply_filters(&rows, &criteria);
        let variances: Vec<f64> = out.visible.iter().map(|r| r.variance.unwrap()).collect();
        assert_eq!(variances, vec![-100.0, -25.8, 14.3, 4.2, -3.3]);
    }

    #[test]
    fn records_missing_sort_field_go_last() {
        let mut rows = sample();
        rows[0].variance = None;
        let criteria = FilterCriteria::new().with_sort(SortSpec::ascending("variance"));
        let out = apply_filters(&rows, &criteria);
        assert_eq!(out.visible.last().unwrap().id, "SKU-001");

        let criteria = FilterCriteria::new().with_sort(SortSpec::descending("variance"));
        let out = apply_filters(&rows, &criteria);
        assert_eq!(out.visible.last().unwrap().id, "SKU-001");
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let rows = vec![
            Row::new("A", "first", "normal", 1.0),
            Row::new("B", "second", "normal", 1.0),
            Row::new("C", "third", "normal", 1.0),
        ];
        let criteria = FilterCriteria::new().with_sort(SortSpec::descending("variance"));
        let out = apply_filters(&rows, &criteria);
        let ids: Vec<&str> = out.visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn condition_display_text() {
        assert_eq!(
            Condition::search(" aspirin ").display_text("Search"),
            "Search: aspirin"
        );
        assert_eq!(
            Condition::equals("status", "warning").display_text("Status"),
            "Status: warning"
        );
        assert_eq!(
            Condition::range("accuracy", Some(80.0), Some(90.0)).display_text("Accuracy"),
            "Accuracy: 80 - 90"
        );
        assert_eq!(
            Condition::range("accuracy", Some(90.0), None).display_text("Accuracy"),
            "Accuracy >= 90"
        );
    }
}
