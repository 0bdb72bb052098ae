use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::SkuStatus;
use crate::shared::filter::{FieldValue, Filterable};

/// One stock-keeping unit of the master data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuRecord {
    pub id: String,
    pub name: String,

    /// International Nonproprietary Name attached to the SKU.
    pub inn: String,

    pub category: String,

    /// Therapeutic category code, e.g. `TCA-001`.
    pub tca: String,
    #[serde(rename = "tcaName")]
    pub tca_name: String,

    pub assignee: String,
    pub status: SkuStatus,

    #[serde(rename = "currentStock")]
    pub current_stock: i64,
    #[serde(rename = "reorderPoint")]
    pub reorder_point: i64,
    #[serde(rename = "forecastQty")]
    pub forecast_qty: i64,

    /// Forecast accuracy in percent.
    pub accuracy: f64,

    #[serde(default)]
    pub discontinued: bool,

    #[serde(rename = "createdDate")]
    pub created_date: NaiveDate,
    #[serde(rename = "lastModified")]
    pub last_modified: NaiveDate,
}

impl SkuRecord {
    /// Restocking is due once stock falls to the reorder point.
    pub fn needs_restock(&self) -> bool {
        self.current_stock <= self.reorder_point
    }
}

impl Filterable for SkuRecord {
    fn search_fields(&self) -> &'static [&'static str] {
        &["id", "name", "category", "tca"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "inn" => Some(self.inn.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "tca" => Some(self.tca.as_str().into()),
            "tcaName" => Some(self.tca_name.as_str().into()),
            "assignee" => Some(self.assignee.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "currentStock" => Some(self.current_stock.into()),
            "reorderPoint" => Some(self.reorder_point.into()),
            "forecastQty" => Some(self.forecast_qty.into()),
            "accuracy" => Some(self.accuracy.into()),
            "discontinued" => Some(self.discontinued.into()),
            "createdDate" => Some(self.created_date.to_string().as_str().into()),
            "lastModified" => Some(self.last_modified.to_string().as_str().into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SkuRecord {
        SkuRecord {
            id: "SKU-001".into(),
            name: "Aspirin 100mg".into(),
            inn: "INN-001".into(),
            category: "Prescription".into(),
            tca: "TCA-001".into(),
            tca_name: "Cardiovascular".into(),
            assignee: "Kim".into(),
            status: SkuStatus::Normal,
            current_stock: 1250,
            reorder_point: 500,
            forecast_qty: 1420,
            accuracy: 98.5,
            discontinued: false,
            created_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            last_modified: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn restock_threshold_is_inclusive() {
        let mut sku = sample();
        assert!(!sku.needs_restock());
        sku.current_stock = 500;
        assert!(sku.needs_restock());
        sku.current_stock = 499;
        assert!(sku.needs_restock());
    }

    #[test]
    fn field_access_covers_filter_dimensions() {
        let sku = sample();
        assert_eq!(sku.field_value("status"), Some("normal".into()));
        assert_eq!(sku.field_value("accuracy"), Some(98.5.into()));
        assert_eq!(sku.field_value("tca"), Some("TCA-001".into()));
        assert_eq!(sku.field_value("bogus"), None);
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("currentStock").is_some());
        assert!(json.get("reorderPoint").is_some());
        assert!(json.get("tcaName").is_some());
    }
}
