use crate::config::SignalConfig;
use crate::data::MarketDataService;
use crate::engines::{run_to_outcome, AnalysisRequest, RunOutcome};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// One analysis run on a worker thread, polled from the UI loop.
///
/// Dropping a runner detaches its thread; the result is discarded, which is
/// how a newer run supersedes an older one.
pub struct BacktestRunner {
    handle: Option<JoinHandle<RunOutcome>>,
}

impl BacktestRunner {
    pub fn start(
        request: AnalysisRequest,
        market: Arc<MarketDataService>,
        config: SignalConfig,
        preview_rows: usize,
    ) -> std::io::Result<Self> {
        let handle = thread::Builder::new()
            .name("backtest".to_string())
            .spawn(move || run_to_outcome(&request, &market, &config, preview_rows))?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Take the outcome once the worker is done
    pub fn poll(&mut self) -> Option<RunOutcome> {
        if !self.is_finished() {
            return None;
        }
        let handle = self.handle.take()?;
        Some(
            handle
                .join()
                .unwrap_or_else(|_| Err("Backtest worker panicked".to_string())),
        )
    }
}
