use serde::{Deserialize, Serialize};

use crate::enums::SkuStatus;
use crate::shared::filter::{FieldValue, Filterable};

/// Aggregate forecast row for one therapeutic category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TcaSummaryRow {
    pub code: String,
    pub name: String,

    #[serde(rename = "currentStock")]
    pub current_stock: i64,
    #[serde(rename = "forecast3M")]
    pub forecast_3m: i64,
    #[serde(rename = "forecast6M")]
    pub forecast_6m: i64,
    #[serde(rename = "forecast12M")]
    pub forecast_12m: i64,

    pub status: SkuStatus,
    pub accuracy: f64,
}

impl Filterable for TcaSummaryRow {
    fn search_fields(&self) -> &'static [&'static str] {
        &["code", "name"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "code" => Some(self.code.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "currentStock" => Some(self.current_stock.into()),
            "forecast3M" => Some(self.forecast_3m.into()),
            "forecast6M" => Some(self.forecast_6m.into()),
            "forecast12M" => Some(self.forecast_12m.into()),
            "status" => Some(self.status.as_str().into()),
            "accuracy" => Some(self.accuracy.into()),
            _ => None,
        }
    }
}
