mod page;

pub use page::SkuForecastPage;
