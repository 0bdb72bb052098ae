pub mod dashboard;
pub mod issues;
pub mod master;
pub mod sku_forecast;
pub mod tca_forecast;
pub mod upload;
