use crate::functions::traits::{Indicator, IndicatorArg, VectorizedIndicator};
use anyhow::{bail, Result};
use polars::lazy::dsl;
use polars::prelude::RollingOptionsFixedWindow;

// --- SMA ---
pub struct SMA {
    pub period: usize,
}

impl SMA {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for SMA {
    fn ui_name(&self) -> &'static str {
        "Simple Moving Average"
    }

    fn alias(&self) -> &'static str {
        "SMA"
    }

    fn warmup(&self) -> usize {
        self.period.saturating_sub(1)
    }
}

impl VectorizedIndicator for SMA {
    fn calculate_vectorized(&self, args: &[IndicatorArg]) -> Result<dsl::Expr> {
        if self.period == 0 {
            bail!("SMA: period must be positive");
        }

        let series = match args.first() {
            Some(IndicatorArg::Series(expr)) => expr.clone(),
            _ => bail!("SMA: first arg must be series"),
        };

        // A window containing a null stays null: every value must be present.
        let options = RollingOptionsFixedWindow {
            window_size: self.period,
            min_periods: self.period,
            ..Default::default()
        };

        Ok(series.rolling_mean(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;
    use polars::prelude::*;

    fn sma_values(close: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
        let df = df! { "close" => close }.unwrap();
        let expr = SMA::new(period)
            .calculate_vectorized(&[IndicatorArg::Series(col("close"))])
            .unwrap();
        let out = df.lazy().select([expr.alias("sma")]).collect().unwrap();
        out.column("sma").unwrap().f64().unwrap().into_iter().collect()
    }

    #[test]
    fn test_sma_warmup_rows_are_null() {
        let values = sma_values(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0)], 3);
        assert_eq!(values, vec![None, None, Some(2.0), Some(3.0)]);
        assert_eq!(SMA::new(3).warmup(), 2);
    }

    #[test]
    fn test_sma_null_inside_window() {
        let values = sma_values(&[None, Some(2.0), Some(4.0), Some(6.0)], 2);
        assert_eq!(values, vec![None, None, Some(3.0), Some(5.0)]);
    }

    #[test]
    fn test_sma_rejects_scalar_argument() {
        let result = SMA::new(3).calculate_vectorized(&[IndicatorArg::Scalar(3.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sma_rejects_zero_period() {
        let result = SMA::new(0).calculate_vectorized(&[IndicatorArg::Series(col("close"))]);
        assert!(result.is_err());
    }
}
