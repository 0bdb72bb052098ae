pub mod forecast;
pub mod issue;
pub mod sku;
pub mod tca;

pub use forecast::{ForecastPoint, VarianceRow};
pub use issue::IssueRecord;
pub use sku::SkuRecord;
pub use tca::TcaSummaryRow;
