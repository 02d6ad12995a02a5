//! Daily quotes from the Yahoo Finance v8 chart endpoint.

use crate::config::FetchConfig;
use crate::data::source::QuoteSource;
use crate::error::{Result, SignalboardError};
use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::Deserialize;
use super::types::PriceBar;

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

pub struct YahooConnector {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooConnector {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                SignalboardError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Chart URL for `[start, end)` at daily interval
    pub fn chart_url(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/{}?period1={}&period2={}&interval=1d&events=history",
            self.base_url,
            symbol,
            Self::unix_midnight(start),
            Self::unix_midnight(end)
        )
    }

    fn unix_midnight(date: NaiveDate) -> i64 {
        date.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    /// Parse a chart payload into bars. Rows without a close are skipped.
    pub fn parse_chart(body: &str) -> Result<Vec<PriceBar>> {
        let response: ChartResponse = serde_json::from_str(body).map_err(|e| {
            SignalboardError::DataUnavailable(format!("Malformed chart response: {}", e))
        })?;

        if let Some(error) = response.chart.error {
            return Err(SignalboardError::DataUnavailable(format!(
                "{} - {}",
                error.code, error.description
            )));
        }

        let data = response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| SignalboardError::DataUnavailable("No data returned".to_string()))?;

        let quote = data.indicators.quote.into_iter().next().unwrap_or_default();
        let offset = data.meta.gmtoffset;

        let mut bars = Vec::with_capacity(data.timestamp.len());
        for (i, ts) in data.timestamp.iter().enumerate() {
            let Some(close) = quote.close.get(i).copied().flatten() else {
                continue;
            };
            // Exchange-local trading date
            let Some(datetime) = DateTime::from_timestamp(ts + offset, 0) else {
                continue;
            };
            bars.push(PriceBar {
                date: datetime.date_naive(),
                open: quote.open.get(i).copied().flatten(),
                high: quote.high.get(i).copied().flatten(),
                low: quote.low.get(i).copied().flatten(),
                close,
                volume: quote.volume.get(i).copied().flatten(),
            });
        }

        Ok(bars)
    }

    /// Combine the HTTP status with the chart body. A failed status is always
    /// an error, described by the payload when it has one.
    pub fn read_response(status: reqwest::StatusCode, body: &str) -> Result<Vec<PriceBar>> {
        match Self::parse_chart(body) {
            Ok(bars) if status.is_success() => Ok(bars),
            Err(SignalboardError::DataUnavailable(msg)) if !status.is_success() => Err(
                SignalboardError::DataUnavailable(format!("HTTP {}: {}", status, msg)),
            ),
            Ok(_) => Err(SignalboardError::DataUnavailable(format!("HTTP {}", status))),
            Err(e) => Err(e),
        }
    }
}

impl QuoteSource for YahooConnector {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    fn fetch_daily(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<PriceBar>> {
        let url = self.chart_url(symbol, start, end);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().map_err(|e| {
            SignalboardError::DataUnavailable(format!("Request for {} failed: {}", symbol, e))
        })?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            SignalboardError::DataUnavailable(format!("Failed to read response: {}", e))
        })?;

        Self::read_response(status, &body)
    }
}
