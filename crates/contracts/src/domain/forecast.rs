use serde::{Deserialize, Serialize};

use crate::shared::filter::{FieldValue, Filterable};

/// One point of a forecast series. Future periods have no actual value yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub period: String,

    #[serde(rename = "actualValue")]
    pub actual_value: Option<f64>,

    #[serde(rename = "forecastValue")]
    pub forecast_value: f64,
}

impl ForecastPoint {
    pub fn is_actual(&self) -> bool {
        self.actual_value.is_some()
    }
}

impl Filterable for ForecastPoint {
    fn search_fields(&self) -> &'static [&'static str] {
        &["period"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "period" => Some(self.period.as_str().into()),
            "actualValue" => self.actual_value.map(FieldValue::Number),
            "forecastValue" => Some(self.forecast_value.into()),
            _ => None,
        }
    }
}

/// Actual-vs-forecast comparison row for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarianceRow {
    pub period: String,
    pub actual: f64,
    pub forecast: f64,

    /// Signed deviation of actual from forecast, in percent.
    #[serde(rename = "variancePercent")]
    pub variance_percent: f64,
}

impl VarianceRow {
    pub fn new(period: impl Into<String>, actual: f64, forecast: f64) -> Self {
        let variance_percent = if forecast == 0.0 {
            0.0
        } else {
            (actual - forecast) / forecast * 100.0
        };
        Self {
            period: period.into(),
            actual,
            forecast,
            variance_percent,
        }
    }
}

impl Filterable for VarianceRow {
    fn search_fields(&self) -> &'static [&'static str] {
        &["period"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "period" => Some(self.period.as_str().into()),
            "actual" => Some(self.actual.into()),
            "forecast" => Some(self.forecast.into()),
            "variancePercent" => Some(self.variance_percent.into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variance_percent_is_signed() {
        let over = VarianceRow::new("2024-05", 1042.0, 1000.0);
        assert!((over.variance_percent - 4.2).abs() < 1e-9);
        let under = VarianceRow::new("2024-06", 742.0, 1000.0);
        assert!((under.variance_percent + 25.8).abs() < 1e-9);
        let missed = VarianceRow::new("2024-07", 0.0, 1000.0);
        assert_eq!(missed.variance_percent, -100.0);
    }

    #[test]
    fn zero_forecast_does_not_divide_by_zero() {
        assert_eq!(VarianceRow::new("2024-08", 10.0, 0.0).variance_percent, 0.0);
    }
}
