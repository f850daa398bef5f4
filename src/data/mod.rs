pub mod connectors;
pub mod price_series;

pub use connectors::{CsvConnector, DataValidator, RequiredColumn};
pub use price_series::PriceSeries;
