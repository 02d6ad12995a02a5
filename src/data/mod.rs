pub mod cache;
pub mod connectors;
pub mod preview;
pub mod series;
pub mod source;

pub use cache::FetchCache;
pub use connectors::{CsvConnector, PriceBar, YahooConnector};
pub use preview::{ColumnStats, DataPreview, DatasetMetadata};
pub use series::{PriceSeries, CLOSE_COLUMN, DATE_COLUMN};
pub use source::{DataRequest, MarketDataService, QuoteSource};
