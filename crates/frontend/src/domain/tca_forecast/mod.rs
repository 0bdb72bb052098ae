mod page;

pub use page::TcaForecastPage;
