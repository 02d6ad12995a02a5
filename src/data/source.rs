use crate::config::FetchConfig;
use crate::data::cache::FetchCache;
use crate::data::connectors::{CsvConnector, PriceBar, YahooConnector};
use crate::data::series::PriceSeries;
use crate::error::{Result, SignalboardError};
use crate::types::FetchKey;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;

/// Remote provider of daily bars
pub trait QuoteSource: Send + Sync {
    fn name(&self) -> &str;

    /// Bars for `symbol` from `start` (inclusive) to `end` (exclusive)
    fn fetch_daily(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<PriceBar>>;
}

/// Where a run takes its prices from
#[derive(Debug, Clone, PartialEq)]
pub enum DataRequest {
    Upload(PathBuf),
    Remote(FetchKey),
}

impl DataRequest {
    /// Short name for headings
    pub fn label(&self) -> String {
        match self {
            Self::Upload(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Remote(key) => key.symbol.clone(),
        }
    }
}

/// Resolves a `DataRequest` to a `PriceSeries`, caching remote fetches.
pub struct MarketDataService {
    source: Arc<dyn QuoteSource>,
    cache: Arc<FetchCache>,
}

impl MarketDataService {
    pub fn new(source: Arc<dyn QuoteSource>, cache: Arc<FetchCache>) -> Self {
        Self { source, cache }
    }

    /// Yahoo-backed service with a cache sized from `config`
    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        let source = YahooConnector::new(config)?;
        let cache = FetchCache::new(config.cache_capacity, config.cache_ttl());
        Ok(Self::new(Arc::new(source), Arc::new(cache)))
    }

    pub fn cache(&self) -> &Arc<FetchCache> {
        &self.cache
    }

    pub fn fetch(&self, key: &FetchKey) -> Result<PriceSeries> {
        if let Some(series) = self.cache.get(key) {
            log::debug!("Cache hit for {}", key);
            return Ok(series);
        }

        log::info!("Fetching {} from {}", key, self.source.name());
        let bars = self.source.fetch_daily(&key.symbol, key.start, key.end)?;
        if bars.is_empty() {
            return Err(SignalboardError::DataUnavailable(format!(
                "No price data returned for {}",
                key
            )));
        }

        let series = PriceSeries::from_bars(&bars)?;
        self.cache.insert(key.clone(), series.clone());
        Ok(series)
    }

    pub fn load(&self, request: &DataRequest) -> Result<PriceSeries> {
        match request {
            DataRequest::Upload(path) => CsvConnector::load_price_series(path),
            DataRequest::Remote(key) => self.fetch(key),
        }
    }
}
