//! In-memory mock datasets backing every screen. Deterministic so the pages
//! render the same on every load.

use chrono::NaiveDate;
use contracts::domain::{ForecastPoint, IssueRecord, SkuRecord, TcaSummaryRow, VarianceRow};
use contracts::enums::{IssuePriority, IssueType, SkuStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid mock date")
}

/// TCA codes with their display names, in select order.
pub fn tca_options() -> Vec<(&'static str, &'static str)> {
    vec![
        ("TCA-001", "Cardiovascular"),
        ("TCA-002", "Gastrointestinal"),
        ("TCA-003", "Respiratory"),
        ("TCA-004", "Nervous system"),
        ("TCA-005", "Endocrine"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sku(
    id: &str,
    name: &str,
    inn: &str,
    category: &str,
    tca: &str,
    tca_name: &str,
    assignee: &str,
    status: SkuStatus,
    current_stock: i64,
    reorder_point: i64,
    forecast_qty: i64,
    accuracy: f64,
    discontinued: bool,
    last_modified: NaiveDate,
) -> SkuRecord {
    SkuRecord {
        id: id.into(),
        name: name.into(),
        inn: inn.into(),
        category: category.into(),
        tca: tca.into(),
        tca_name: tca_name.into(),
        assignee: assignee.into(),
        status,
        current_stock,
        reorder_point,
        forecast_qty,
        accuracy,
        discontinued,
        created_date: date(2023, 3, 1),
        last_modified,
    }
}

pub fn mock_skus() -> Vec<SkuRecord> {
    vec![
        sku(
            "SKU-001",
            "Aspirin 100mg",
            "INN-001",
            "Prescription",
            "TCA-001",
            "Cardiovascular",
            "Kim",
            SkuStatus::Normal,
            1250,
            500,
            1420,
            98.5,
            false,
            date(2024, 1, 15),
        ),
        sku(
            "SKU-002",
            "Metformin 500mg",
            "INN-002",
            "Prescription",
            "TCA-005",
            "Endocrine",
            "Lee",
            SkuStatus::Warning,
            890,
            600,
            950,
            96.2,
            false,
            date(2024, 1, 14),
        ),
        sku(
            "SKU-003",
            "Losartan 50mg",
            "INN-003",
            "Prescription",
            "TCA-001",
            "Cardiovascular",
            "Park",
            SkuStatus::Critical,
            450,
            500,
            520,
            94.8,
            false,
            date(2024, 1, 13),
        ),
        sku(
            "SKU-004",
            "Omeprazole 20mg",
            "INN-004",
            "OTC",
            "TCA-002",
            "Gastrointestinal",
            "Choi",
            SkuStatus::Normal,
            760,
            300,
            780,
            99.1,
            false,
            date(2024, 1, 15),
        ),
        sku(
            "SKU-005",
            "Salbutamol inhaler",
            "INN-005",
            "Prescription",
            "TCA-003",
            "Respiratory",
            "Jung",
            SkuStatus::Warning,
            320,
            250,
            380,
            92.3,
            false,
            date(2024, 1, 12),
        ),
        sku(
            "SKU-006",
            "Ibuprofen 200mg",
            "INN-006",
            "OTC",
            "TCA-004",
            "Nervous system",
            "Kim",
            SkuStatus::Normal,
            2100,
            800,
            1950,
            91.4,
            false,
            date(2024, 1, 11),
        ),
        sku(
            "SKU-007",
            "Amlodipine 5mg",
            "INN-007",
            "Prescription",
            "TCA-001",
            "Cardiovascular",
            "Lee",
            SkuStatus::Normal,
            980,
            400,
            1020,
            88.6,
            false,
            date(2024, 1, 10),
        ),
        sku(
            "SKU-008",
            "Ranitidine 150mg",
            "INN-008",
            "Prescription",
            "TCA-002",
            "Gastrointestinal",
            "Park",
            SkuStatus::Critical,
            0,
            200,
            0,
            76.2,
            true,
            date(2023, 11, 2),
        ),
    ]
}

fn issue(
    id: &str,
    title: &str,
    sku: &str,
    issue_type: IssueType,
    priority: IssuePriority,
    assignee: &str,
    description: &str,
    affected_quantity: i64,
    expected_restock: Option<NaiveDate>,
    created_date: NaiveDate,
) -> IssueRecord {
    IssueRecord {
        id: id.into(),
        title: title.into(),
        sku: sku.into(),
        issue_type,
        priority,
        assignee: assignee.into(),
        description: description.into(),
        affected_quantity,
        expected_restock,
        created_date,
    }
}

pub fn mock_issues() -> Vec<IssueRecord> {
    vec![
        issue(
            "ISS-001",
            "Aspirin 100mg out of stock",
            "SKU-001",
            IssueType::OutOfStock,
            IssuePriority::High,
            "Kim",
            "High-demand item sold out, urgent restock required",
            0,
            Some(date(2024, 7, 28)),
            date(2024, 7, 25),
        ),
        issue(
            "ISS-002",
            "Metformin bulk returns",
            "SKU-002",
            IssueType::HighReturns,
            IssuePriority::Medium,
            "Lee",
            "Return rate spiked after packaging change",
            45,
            None,
            date(2024, 7, 24),
        ),
        issue(
            "ISS-003",
            "Salbutamol low stock warning",
            "SKU-005",
            IssueType::LowStock,
            IssuePriority::Medium,
            "Park",
            "15 units left, below the safety stock level",
            15,
            Some(date(2024, 7, 26)),
            date(2024, 7, 24),
        ),
        issue(
            "ISS-004",
            "Omeprazole quality claim",
            "SKU-004",
            IssueType::QualityIssue,
            IssuePriority::High,
            "Choi",
            "Customer complaints received, batch review needed",
            28,
            None,
            date(2024, 7, 23),
        ),
        issue(
            "ISS-005",
            "Ibuprofen expiry approaching",
            "SKU-006",
            IssueType::ExpiryWarning,
            IssuePriority::Low,
            "Jung",
            "Lot expires within 30 days",
            120,
            Some(date(2024, 7, 30)),
            date(2024, 7, 23),
        ),
        issue(
            "ISS-006",
            "Losartan supplier delay",
            "SKU-003",
            IssueType::SupplierDelay,
            IssuePriority::Medium,
            "Kim",
            "Inbound shipment postponed by the manufacturer",
            200,
            Some(date(2024, 8, 5)),
            date(2024, 7, 22),
        ),
    ]
}

pub fn mock_tca_summary() -> Vec<TcaSummaryRow> {
    vec![
        TcaSummaryRow {
            code: "TCA-001".into(),
            name: "Cardiovascular".into(),
            current_stock: 45200,
            forecast_3m: 52000,
            forecast_6m: 98500,
            forecast_12m: 185300,
            status: SkuStatus::Normal,
            accuracy: 94.5,
        },
        TcaSummaryRow {
            code: "TCA-002".into(),
            name: "Gastrointestinal".into(),
            current_stock: 23150,
            forecast_3m: 28400,
            forecast_6m: 54200,
            forecast_12m: 102800,
            status: SkuStatus::Warning,
            accuracy: 87.2,
        },
        TcaSummaryRow {
            code: "TCA-003".into(),
            name: "Respiratory".into(),
            current_stock: 12800,
            forecast_3m: 15200,
            forecast_6m: 29600,
            forecast_12m: 56100,
            status: SkuStatus::Critical,
            accuracy: 76.8,
        },
        TcaSummaryRow {
            code: "TCA-004".into(),
            name: "Nervous system".into(),
            current_stock: 31400,
            forecast_3m: 33800,
            forecast_6m: 66200,
            forecast_12m: 128400,
            status: SkuStatus::Normal,
            accuracy: 91.3,
        },
        TcaSummaryRow {
            code: "TCA-005".into(),
            name: "Endocrine".into(),
            current_stock: 18650,
            forecast_3m: 21500,
            forecast_6m: 42300,
            forecast_12m: 81200,
            status: SkuStatus::Warning,
            accuracy: 85.9,
        },
    ]
}

/// Monthly series: six months of actuals followed by forecast-only periods.
pub fn mock_forecast_series(tca: &str) -> Vec<ForecastPoint> {
    // Per-TCA base volume so the chart moves when the filter changes.
    let base: f64 = match tca {
        "TCA-001" => 15000.0,
        "TCA-002" => 9500.0,
        "TCA-003" => 5200.0,
        "TCA-004" => 11000.0,
        "TCA-005" => 7300.0,
        _ => 48000.0,
    };

    (0..12)
        .map(|i| {
            let month = i + 1;
            let season = 1.0 + 0.08 * ((month as f64) * 0.9).sin();
            let forecast_value = (base * season).round();
            let actual_value = if i < 6 {
                Some((base * season * (0.97 + 0.01 * (i as f64))).round())
            } else {
                None
            };
            ForecastPoint {
                period: format!("2024-{:02}", month),
                actual_value,
                forecast_value,
            }
        })
        .collect()
}

/// Actual-vs-forecast rows for the SKU variance table.
pub fn mock_variance_rows() -> Vec<VarianceRow> {
    vec![
        VarianceRow::new("2024-02", 1042.0, 1000.0),
        VarianceRow::new("2024-03", 742.0, 1000.0),
        VarianceRow::new("2024-04", 0.0, 1000.0),
        VarianceRow::new("2024-05", 967.0, 1000.0),
        VarianceRow::new("2024-06", 1143.0, 1000.0),
    ]
}

/// Headline numbers for the master-data screen.
pub struct MasterStats {
    pub total_skus: usize,
    pub active_skus: usize,
    pub discontinued_skus: usize,
    pub inn_codes: usize,
}

pub fn master_stats(skus: &[SkuRecord]) -> MasterStats {
    let discontinued = skus.iter().filter(|s| s.discontinued).count();
    MasterStats {
        total_skus: skus.len(),
        active_skus: skus.len() - discontinued,
        discontinued_skus: discontinued,
        inn_codes: skus.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_are_consistent() {
        let skus = mock_skus();
        assert!(!skus.is_empty());
        // Every issue references a known SKU.
        let issues = mock_issues();
        assert!(issues
            .iter()
            .all(|i| skus.iter().any(|s| s.id == i.sku)));
        // One summary row per TCA option.
        assert_eq!(mock_tca_summary().len(), tca_options().len());
    }

    #[test]
    fn forecast_series_has_actuals_then_forecast_only() {
        let series = mock_forecast_series("TCA-001");
        assert_eq!(series.len(), 12);
        assert!(series[..6].iter().all(|p| p.is_actual()));
        assert!(series[6..].iter().all(|p| !p.is_actual()));
    }

    #[test]
    fn master_stats_add_up() {
        let skus = mock_skus();
        let stats = master_stats(&skus);
        assert_eq!(stats.total_skus, stats.active_skus + stats.discontinued_skus);
    }
}
