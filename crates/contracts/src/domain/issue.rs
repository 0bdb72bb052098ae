use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{IssuePriority, IssueType};
use crate::shared::filter::{FieldValue, Filterable};

/// A stock/quality incident raised against a SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub id: String,
    pub title: String,
    pub sku: String,

    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub priority: IssuePriority,

    pub assignee: String,
    pub description: String,

    #[serde(rename = "affectedQuantity")]
    pub affected_quantity: i64,

    /// Absent for issues with no planned restock (returns, quality claims).
    #[serde(rename = "expectedRestock")]
    pub expected_restock: Option<NaiveDate>,

    #[serde(rename = "createdDate")]
    pub created_date: NaiveDate,
}

impl Filterable for IssueRecord {
    fn search_fields(&self) -> &'static [&'static str] {
        &["title", "sku"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "sku" => Some(self.sku.as_str().into()),
            "type" => Some(self.issue_type.as_str().into()),
            "priority" => Some(self.priority.as_str().into()),
            "assignee" => Some(self.assignee.as_str().into()),
            "affectedQuantity" => Some(self.affected_quantity.into()),
            "expectedRestock" => self
                .expected_restock
                .map(|d| d.to_string().as_str().into()),
            // Derived: whether a restock date has been planned. Lets the
            // restocking views filter on schedule state directly.
            "restockStatus" => Some(
                if self.expected_restock.is_some() {
                    "scheduled"
                } else {
                    "unscheduled"
                }
                .into(),
            ),
            "createdDate" => Some(self.created_date.to_string().as_str().into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_probes_title_and_sku_only() {
        let issue = IssueRecord {
            id: "ISS-001".into(),
            title: "Galaxy phone out of stock".into(),
            sku: "SKU-A001".into(),
            issue_type: IssueType::OutOfStock,
            priority: IssuePriority::High,
            assignee: "Kim".into(),
            description: "Urgent restock needed".into(),
            affected_quantity: 0,
            expected_restock: NaiveDate::from_ymd_opt(2024, 7, 28),
            created_date: NaiveDate::from_ymd_opt(2024, 7, 25).unwrap(),
        };
        assert_eq!(issue.search_fields(), &["title", "sku"]);
        assert_eq!(issue.field_value("priority"), Some("high".into()));
        // Missing optional date reads as an absent field.
        let mut no_restock = issue.clone();
        no_restock.expected_restock = None;
        assert_eq!(no_restock.field_value("expectedRestock"), None);
    }

    #[test]
    fn restock_status_follows_the_planned_date() {
        let mut issue = IssueRecord {
            id: "ISS-002".into(),
            title: "Low stock".into(),
            sku: "SKU-A002".into(),
            issue_type: IssueType::LowStock,
            priority: IssuePriority::Medium,
            assignee: "Lee".into(),
            description: "Below safety stock".into(),
            affected_quantity: 15,
            expected_restock: NaiveDate::from_ymd_opt(2024, 7, 26),
            created_date: NaiveDate::from_ymd_opt(2024, 7, 24).unwrap(),
        };
        assert_eq!(issue.field_value("restockStatus"), Some("scheduled".into()));
        issue.expected_restock = None;
        assert_eq!(
            issue.field_value("restockStatus"),
            Some("unscheduled".into())
        );
    }
}
