use polars::prelude::*;
use anyhow::Result;

/// Base trait for all indicators
pub trait Indicator: Send + Sync {
    /// Display name
    fn ui_name(&self) -> &'static str;

    /// Short alias used for column names and chart legends
    fn alias(&self) -> &'static str;

    /// Number of leading rows without a defined value
    fn warmup(&self) -> usize;
}

/// Trait for vectorized indicators
pub trait VectorizedIndicator: Indicator {
    /// Calculate over entire series using Polars expressions
    fn calculate_vectorized(&self, args: &[IndicatorArg]) -> Result<Expr>;
}

/// Flexible argument for indicator calls
#[derive(Debug, Clone)]
pub enum IndicatorArg {
    Series(Expr),   // Polars expression
    Scalar(f64),    // Period, threshold, etc.
}
