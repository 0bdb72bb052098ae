use serde::{Deserialize, Serialize};

/// Stock/forecast health of a SKU or a whole TCA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkuStatus {
    Normal,
    Warning,
    Critical,
}

impl SkuStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkuStatus::Normal => "normal",
            SkuStatus::Warning => "warning",
            SkuStatus::Critical => "critical",
        }
    }

    /// Display label for UI
    pub fn label(&self) -> &'static str {
        match self {
            SkuStatus::Normal => "Normal",
            SkuStatus::Warning => "Warning",
            SkuStatus::Critical => "Critical",
        }
    }

    pub fn all() -> &'static [SkuStatus] {
        &[SkuStatus::Normal, SkuStatus::Warning, SkuStatus::Critical]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuePriority {
    High,
    Medium,
    Low,
}

impl IssuePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssuePriority::High => "high",
            IssuePriority::Medium => "medium",
            IssuePriority::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssuePriority::High => "Urgent",
            IssuePriority::Medium => "Medium",
            IssuePriority::Low => "Low",
        }
    }

    pub fn all() -> &'static [IssuePriority] {
        &[IssuePriority::High, IssuePriority::Medium, IssuePriority::Low]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    OutOfStock,
    LowStock,
    HighReturns,
    QualityIssue,
    ExpiryWarning,
    SupplierDelay,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::OutOfStock => "out_of_stock",
            IssueType::LowStock => "low_stock",
            IssueType::HighReturns => "high_returns",
            IssueType::QualityIssue => "quality_issue",
            IssueType::ExpiryWarning => "expiry_warning",
            IssueType::SupplierDelay => "supplier_delay",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IssueType::OutOfStock => "Out of stock",
            IssueType::LowStock => "Low stock",
            IssueType::HighReturns => "High returns",
            IssueType::QualityIssue => "Quality issue",
            IssueType::ExpiryWarning => "Expiry warning",
            IssueType::SupplierDelay => "Supplier delay",
        }
    }

    pub fn all() -> &'static [IssueType] {
        &[
            IssueType::OutOfStock,
            IssueType::LowStock,
            IssueType::HighReturns,
            IssueType::QualityIssue,
            IssueType::ExpiryWarning,
            IssueType::SupplierDelay,
        ]
    }

    /// Issue types that feed the restocking plan.
    pub fn is_stock_related(&self) -> bool {
        matches!(
            self,
            IssueType::OutOfStock | IssueType::LowStock | IssueType::SupplierDelay
        )
    }
}

/// Forecast-accuracy bucket used as a derived range criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccuracyBand {
    High,
    Medium,
    Low,
}

impl AccuracyBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccuracyBand::High => "high",
            AccuracyBand::Medium => "medium",
            AccuracyBand::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccuracyBand::High => "90% and above",
            AccuracyBand::Medium => "80-90%",
            AccuracyBand::Low => "Below 80%",
        }
    }

    /// Inclusive bounds of the band, as (min, max).
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self {
            AccuracyBand::High => (Some(90.0), None),
            AccuracyBand::Medium => (Some(80.0), Some(90.0)),
            AccuracyBand::Low => (None, Some(80.0)),
        }
    }

    pub fn all() -> &'static [AccuracyBand] {
        &[AccuracyBand::High, AccuracyBand::Medium, AccuracyBand::Low]
    }

    pub fn parse(value: &str) -> Option<AccuracyBand> {
        Self::all().iter().copied().find(|b| b.as_str() == value)
    }
}

/// Forecast horizon / date-range bucket shown in the period selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatePeriod {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "12M")]
    TwelveMonths,
    #[serde(rename = "24M")]
    TwentyFourMonths,
}

impl DatePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePeriod::OneMonth => "1M",
            DatePeriod::ThreeMonths => "3M",
            DatePeriod::SixMonths => "6M",
            DatePeriod::TwelveMonths => "12M",
            DatePeriod::TwentyFourMonths => "24M",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatePeriod::OneMonth => "1 month",
            DatePeriod::ThreeMonths => "3 months",
            DatePeriod::SixMonths => "6 months",
            DatePeriod::TwelveMonths => "12 months",
            DatePeriod::TwentyFourMonths => "24 months",
        }
    }

    pub fn months(&self) -> usize {
        match self {
            DatePeriod::OneMonth => 1,
            DatePeriod::ThreeMonths => 3,
            DatePeriod::SixMonths => 6,
            DatePeriod::TwelveMonths => 12,
            DatePeriod::TwentyFourMonths => 24,
        }
    }

    pub fn all() -> &'static [DatePeriod] {
        &[
            DatePeriod::OneMonth,
            DatePeriod::ThreeMonths,
            DatePeriod::SixMonths,
            DatePeriod::TwelveMonths,
            DatePeriod::TwentyFourMonths,
        ]
    }

    pub fn parse(value: &str) -> Option<DatePeriod> {
        Self::all().iter().copied().find(|p| p.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_band_bounds() {
        assert_eq!(AccuracyBand::High.bounds(), (Some(90.0), None));
        assert_eq!(AccuracyBand::Medium.bounds(), (Some(80.0), Some(90.0)));
        assert_eq!(AccuracyBand::Low.bounds(), (None, Some(80.0)));
    }

    #[test]
    fn issue_type_serde_round_trip() {
        let json = serde_json::to_string(&IssueType::OutOfStock).unwrap();
        assert_eq!(json, "\"out_of_stock\"");
        let back: IssueType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IssueType::OutOfStock);
    }

    #[test]
    fn stock_related_types() {
        assert!(IssueType::OutOfStock.is_stock_related());
        assert!(IssueType::SupplierDelay.is_stock_related());
        assert!(!IssueType::QualityIssue.is_stock_related());
    }
}
