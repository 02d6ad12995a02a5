use crate::config::SignalConfig;
use crate::data::{DataPreview, DataRequest, MarketDataService};
use crate::engines::crossover::CrossoverEngine;
use crate::engines::signal_series::{SignalSeries, SignalSummary};
use crate::error::{Result, SignalboardError};
use crate::types::{Exchange, FetchKey};
use chrono::NaiveDate;
use std::path::PathBuf;

/// What the user asked for in one run
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub upload: Option<PathBuf>,
    pub symbol: String,
    pub exchange: Exchange,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalysisRequest {
    /// An uploaded file takes precedence over the symbol.
    pub fn resolve(&self) -> Result<DataRequest> {
        if let Some(path) = &self.upload {
            return Ok(DataRequest::Upload(path.clone()));
        }

        if self.symbol.trim().is_empty() {
            return Err(SignalboardError::MissingInput);
        }
        if self.start > self.end {
            return Err(SignalboardError::InvalidInput(format!(
                "Start date {} is after end date {}",
                self.start, self.end
            )));
        }

        Ok(DataRequest::Remote(FetchKey::new(
            self.exchange.qualify(&self.symbol),
            self.start,
            self.end,
        )))
    }
}

/// Everything the dashboard renders after a successful run
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub request: DataRequest,
    pub title: String,
    pub message: String,
    pub preview: DataPreview,
    pub signals: SignalSeries,
    pub summary: SignalSummary,
}

pub type RunOutcome = std::result::Result<AnalysisReport, String>;

pub fn run_analysis(
    request: &DataRequest,
    market: &MarketDataService,
    config: &SignalConfig,
    preview_rows: usize,
) -> Result<AnalysisReport> {
    let series = market.load(request)?;
    let title = request.label();

    let message = match request {
        DataRequest::Upload(_) => "Using uploaded CSV file for analysis.".to_string(),
        DataRequest::Remote(key) => format!("Fetched data for {}.", key.symbol),
    };

    if series.len() < config.long_window {
        log::warn!(
            "{} has {} rows; the long average needs {}",
            title,
            series.len(),
            config.long_window
        );
    }

    let preview = DataPreview::from_series(&title, &series, preview_rows)?;
    let signals = CrossoverEngine::new(config.clone()).compute(&series)?;
    let summary = signals.summary();

    Ok(AnalysisReport {
        request: request.clone(),
        title,
        message,
        preview,
        signals,
        summary,
    })
}

/// Run end to end, turning any failure into a message for the user.
pub fn run_to_outcome(
    request: &AnalysisRequest,
    market: &MarketDataService,
    config: &SignalConfig,
    preview_rows: usize,
) -> RunOutcome {
    request
        .resolve()
        .and_then(|data_request| run_analysis(&data_request, market, config, preview_rows))
        .map_err(|e| {
            log::error!("Run failed: {}", e);
            user_message(&e)
        })
}

pub fn user_message(error: &SignalboardError) -> String {
    match error {
        SignalboardError::DataUnavailable(msg) => format!("Error fetching data: {}", msg),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(symbol: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> AnalysisRequest {
        AnalysisRequest {
            upload: None,
            symbol: symbol.to_string(),
            exchange: Exchange::Nse,
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn test_resolve_symbol() {
        let resolved = request("sbin", (2024, 1, 1), (2024, 6, 1)).resolve().unwrap();
        match resolved {
            DataRequest::Remote(key) => assert_eq!(key.symbol, "SBIN.NS"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_missing_input() {
        let result = request("  ", (2024, 1, 1), (2024, 6, 1)).resolve();
        assert!(matches!(result, Err(SignalboardError::MissingInput)));
    }

    #[test]
    fn test_resolve_upload_wins() {
        let mut req = request("", (2024, 6, 1), (2024, 1, 1));
        req.upload = Some(PathBuf::from("/tmp/prices.csv"));
        assert_eq!(
            req.resolve().unwrap(),
            DataRequest::Upload(PathBuf::from("/tmp/prices.csv"))
        );
    }

    #[test]
    fn test_resolve_reversed_dates() {
        let result = request("AAPL", (2024, 6, 1), (2024, 1, 1)).resolve();
        assert!(matches!(result, Err(SignalboardError::InvalidInput(_))));
    }

    #[test]
    fn test_user_message() {
        let msg = user_message(&SignalboardError::DataUnavailable("timeout".to_string()));
        assert_eq!(msg, "Error fetching data: timeout");
        assert_eq!(
            user_message(&SignalboardError::MissingInput),
            "Please enter a stock symbol or upload a file."
        );
    }
}
