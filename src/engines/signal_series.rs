use crate::config::WarmupPolicy;
use crate::data::{CLOSE_COLUMN, DATE_COLUMN};
use crate::error::{Result, SignalboardError};
use crate::types::Signal;
use polars::prelude::*;

pub const SHORT_MA_COLUMN: &str = "short_ma";
pub const LONG_MA_COLUMN: &str = "long_ma";
pub const SIGNAL_COLUMN: &str = "signal";

#[derive(Debug, Clone, PartialEq)]
pub struct SignalRow {
    pub date: String,
    pub close: Option<f64>,
    pub short_ma: Option<f64>,
    pub long_ma: Option<f64>,
    pub signal: Signal,
}

impl SignalRow {
    pub fn has_averages(&self) -> bool {
        self.short_ma.is_some() && self.long_ma.is_some()
    }
}

/// Row where the signal flipped with both averages defined on both sides
#[derive(Debug, Clone, PartialEq)]
pub struct Crossover {
    pub index: usize,
    pub date: String,
    pub signal: Signal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalSummary {
    pub rows: usize,
    pub buy_rows: usize,
    pub sell_rows: usize,
    pub undefined_rows: usize,
    pub latest: Option<Signal>,
    pub crossovers: Vec<Crossover>,
}

/// Price table plus `short_ma`, `long_ma` and `signal`, row-aligned with the
/// input series.
#[derive(Debug, Clone)]
pub struct SignalSeries {
    frame: DataFrame,
    rows: Vec<SignalRow>,
    short_window: usize,
    long_window: usize,
    warmup_policy: WarmupPolicy,
}

impl SignalSeries {
    pub(crate) fn new(
        frame: DataFrame,
        short_window: usize,
        long_window: usize,
        warmup_policy: WarmupPolicy,
    ) -> Result<Self> {
        let rows = Self::extract_rows(&frame)?;
        Ok(Self {
            frame,
            rows,
            short_window,
            long_window,
            warmup_policy,
        })
    }

    fn extract_rows(frame: &DataFrame) -> Result<Vec<SignalRow>> {
        let dates = frame.column(DATE_COLUMN)?.str()?;
        let closes = frame.column(CLOSE_COLUMN)?.f64()?;
        let short = frame.column(SHORT_MA_COLUMN)?.f64()?;
        let long = frame.column(LONG_MA_COLUMN)?.f64()?;
        let signals = frame.column(SIGNAL_COLUMN)?.i32()?;

        (0..frame.height())
            .map(|i| {
                let value = signals.get(i).ok_or_else(|| {
                    SignalboardError::Computation(format!("Missing signal at row {}", i))
                })?;
                Ok(SignalRow {
                    date: dates.get(i).unwrap_or_default().to_string(),
                    close: closes.get(i),
                    short_ma: short.get(i),
                    long_ma: long.get(i),
                    signal: Signal::from_value(value)?,
                })
            })
            .collect()
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn rows(&self) -> &[SignalRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn short_window(&self) -> usize {
        self.short_window
    }

    pub fn long_window(&self) -> usize {
        self.long_window
    }

    pub fn warmup_policy(&self) -> WarmupPolicy {
        self.warmup_policy
    }

    pub fn short_ma(&self) -> Vec<Option<f64>> {
        self.rows.iter().map(|row| row.short_ma).collect()
    }

    pub fn long_ma(&self) -> Vec<Option<f64>> {
        self.rows.iter().map(|row| row.long_ma).collect()
    }

    pub fn signals(&self) -> Vec<Signal> {
        self.rows.iter().map(|row| row.signal).collect()
    }

    pub fn crossovers(&self) -> Vec<Crossover> {
        self.rows
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| {
                pair[0].has_averages() && pair[1].has_averages() && pair[0].signal != pair[1].signal
            })
            .map(|(i, pair)| Crossover {
                index: i + 1,
                date: pair[1].date.clone(),
                signal: pair[1].signal,
            })
            .collect()
    }

    pub fn summary(&self) -> SignalSummary {
        let count = |signal: Signal| self.rows.iter().filter(|row| row.signal == signal).count();
        SignalSummary {
            rows: self.rows.len(),
            buy_rows: count(Signal::Buy),
            sell_rows: count(Signal::Sell),
            undefined_rows: count(Signal::Undefined),
            latest: self.rows.last().map(|row| row.signal),
            crossovers: self.crossovers(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engines::crossover::compute;
    use crate::data::PriceSeries;
    use crate::types::Signal;
    use polars::df;

    #[test]
    fn test_crossovers_skip_warmup_flip() {
        // short=1, long=2: warm-up row 0 is Sell, then Buy, Buy, Sell, Buy
        let df = df! {
            "date" => &["d1", "d2", "d3", "d4", "d5"],
            "close" => &[1.0, 2.0, 3.0, 1.0, 4.0],
        }
        .unwrap();
        let out = compute(&PriceSeries::from_frame(df).unwrap(), 1, 2).unwrap();
        assert_eq!(
            out.signals(),
            vec![Signal::Sell, Signal::Buy, Signal::Buy, Signal::Sell, Signal::Buy]
        );

        let crossovers = out.crossovers();
        assert_eq!(crossovers.len(), 2);
        assert_eq!(crossovers[0].index, 3);
        assert_eq!(crossovers[0].date, "d4");
        assert_eq!(crossovers[0].signal, Signal::Sell);
        assert_eq!(crossovers[1].signal, Signal::Buy);

        let summary = out.summary();
        assert_eq!(summary.rows, 5);
        assert_eq!(summary.buy_rows, 3);
        assert_eq!(summary.sell_rows, 2);
        assert_eq!(summary.undefined_rows, 0);
        assert_eq!(summary.latest, Some(Signal::Buy));
    }
}
