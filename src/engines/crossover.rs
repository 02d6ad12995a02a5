use crate::config::{SignalConfig, WarmupPolicy};
use crate::data::connectors::DataValidator;
use crate::data::{PriceSeries, CLOSE_COLUMN};
use crate::engines::signal_series::{SignalSeries, LONG_MA_COLUMN, SHORT_MA_COLUMN, SIGNAL_COLUMN};
use crate::error::{Result, SignalboardError};
use crate::functions::indicators::SMA;
use crate::functions::traits::{IndicatorArg, VectorizedIndicator};
use crate::types::Signal;
use polars::prelude::*;

/// Dual simple-moving-average crossover.
///
/// Each row is classified on its own: `Buy` when the short average is above
/// the long one, `Sell` otherwise. Rows where either average is still warming
/// up follow the configured `WarmupPolicy`.
pub struct CrossoverEngine {
    config: SignalConfig,
}

impl CrossoverEngine {
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    pub fn compute(&self, series: &PriceSeries) -> Result<SignalSeries> {
        let SignalConfig {
            short_window,
            long_window,
            warmup_policy,
        } = self.config;

        if series.is_empty() {
            return Err(SignalboardError::InvalidInput(
                "Price series is empty".to_string(),
            ));
        }
        if short_window == 0 || long_window == 0 {
            return Err(SignalboardError::InvalidInput(format!(
                "Windows must be positive (short={}, long={})",
                short_window, long_window
            )));
        }
        if short_window >= long_window {
            log::warn!(
                "short_window ({}) >= long_window ({})",
                short_window,
                long_window
            );
        }
        Self::check_finite(series)?;
        DataValidator::validate_window_coverage(
            series.frame(),
            CLOSE_COLUMN,
            short_window.min(long_window),
        )?;

        let frame = series
            .frame()
            .clone()
            .lazy()
            .with_columns([
                Self::moving_average(short_window)?.alias(SHORT_MA_COLUMN),
                Self::moving_average(long_window)?.alias(LONG_MA_COLUMN),
            ])
            .with_column(Self::signal_expr(warmup_policy))
            .collect()?;

        SignalSeries::new(frame, short_window, long_window, warmup_policy)
    }

    fn moving_average(window: usize) -> Result<Expr> {
        SMA::new(window)
            .calculate_vectorized(&[IndicatorArg::Series(col(CLOSE_COLUMN))])
            .map_err(|e| SignalboardError::Computation(e.to_string()))
    }

    // A null comparison falls through to `otherwise`, so under SellDefault
    // warm-up rows come out as Sell.
    fn signal_expr(policy: WarmupPolicy) -> Expr {
        let short_above = col(SHORT_MA_COLUMN).gt(col(LONG_MA_COLUMN));
        let buy = lit(Signal::Buy.value());
        let sell = lit(Signal::Sell.value());

        let expr = match policy {
            WarmupPolicy::SellDefault => when(short_above).then(buy).otherwise(sell),
            WarmupPolicy::Explicit => when(
                col(SHORT_MA_COLUMN)
                    .is_null()
                    .or(col(LONG_MA_COLUMN).is_null()),
            )
            .then(lit(Signal::Undefined.value()))
            .when(short_above)
            .then(buy)
            .otherwise(sell),
        };

        expr.cast(DataType::Int32).alias(SIGNAL_COLUMN)
    }

    fn check_finite(series: &PriceSeries) -> Result<()> {
        let closes = series.frame().column(CLOSE_COLUMN)?.f64()?;
        let bad_row = closes
            .into_iter()
            .position(|value| value.is_some_and(|v| !v.is_finite()));

        match bad_row {
            Some(row) => Err(SignalboardError::InvalidInput(format!(
                "close is not a finite number at row {}",
                row
            ))),
            None => Ok(()),
        }
    }
}

/// Crossover signal with the default warm-up policy
pub fn compute(series: &PriceSeries, short_window: usize, long_window: usize) -> Result<SignalSeries> {
    CrossoverEngine::new(SignalConfig::new(short_window, long_window)).compute(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn series(close: &[f64]) -> PriceSeries {
        let dates: Vec<String> = (0..close.len()).map(|i| format!("2024-01-{:02}", i + 1)).collect();
        PriceSeries::from_frame(df! { "date" => dates, "close" => close }.unwrap()).unwrap()
    }

    #[test]
    fn test_non_finite_close_rejected() {
        let result = compute(&series(&[1.0, f64::NAN, 3.0]), 1, 2);
        assert!(matches!(result, Err(SignalboardError::InvalidInput(_))));
    }

    #[test]
    fn test_gaps_in_every_window_rejected() {
        let df = df! {
            "date" => &["d1", "d2", "d3", "d4", "d5", "d6"],
            "close" => &[Some(1.0), None, Some(2.0), None, Some(3.0), None],
        }
        .unwrap();
        let result = compute(&PriceSeries::from_frame(df).unwrap(), 2, 3);
        assert!(matches!(result, Err(SignalboardError::InvalidData(_))));
    }

    #[test]
    fn test_zero_window_rejected() {
        let result = compute(&series(&[1.0, 2.0]), 0, 2);
        assert!(matches!(result, Err(SignalboardError::InvalidInput(_))));
    }

    #[test]
    fn test_explicit_policy_marks_warmup() {
        let engine = CrossoverEngine::new(
            SignalConfig::new(1, 2).with_warmup_policy(WarmupPolicy::Explicit),
        );
        let out = engine.compute(&series(&[1.0, 2.0, 1.0])).unwrap();
        assert_eq!(
            out.signals(),
            vec![Signal::Undefined, Signal::Buy, Signal::Sell]
        );
    }

    #[test]
    fn test_input_frame_is_untouched() {
        let input = series(&[1.0, 2.0, 3.0]);
        let out = compute(&input, 1, 2).unwrap();
        assert_eq!(input.frame().width(), 2);
        assert_eq!(out.frame().width(), 5);
    }
}
