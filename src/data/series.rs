use crate::data::connectors::{DataValidator, PriceBar, PriceColumn};
use crate::error::{Result, SignalboardError};
use polars::df;
use polars::prelude::*;

pub const DATE_COLUMN: &str = "date";
pub const CLOSE_COLUMN: &str = "close";
const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

/// Date-ordered price table with a string `date` and a `Float64` `close`.
///
/// Every other column the source supplied is carried along untouched. The
/// frame is never mutated after construction; derived tables are new frames.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    frame: DataFrame,
}

impl PriceSeries {
    /// Normalise a raw table: rename aliased price columns to their standard
    /// names, order rows by date and coerce `close` to `Float64`.
    ///
    /// Temporal and numeric date columns are sorted. Dates that could not be
    /// parsed stay strings and keep the source order, since a lexical sort of
    /// formats like `01/02/2024` would scramble them.
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        let column_map = DataValidator::resolve_columns(&frame)?;

        let mut frame = frame;
        for (column, actual_name) in column_map {
            let standard_name = column.as_str();
            if actual_name != standard_name {
                frame.rename(&actual_name, standard_name.into()).map_err(|e| {
                    SignalboardError::InvalidData(format!("Failed to rename column: {}", e))
                })?;
            }
        }

        let date_dtype = frame.column(DATE_COLUMN)?.dtype().clone();
        let temporal = matches!(date_dtype, DataType::Date | DataType::Datetime(_, _));
        let sortable = temporal || DataValidator::is_numeric(&date_dtype);

        // Daily bars: parsed timestamps are labelled by calendar day only
        let date_label = if temporal {
            col(DATE_COLUMN).dt().strftime(DATE_LABEL_FORMAT)
        } else {
            col(DATE_COLUMN).cast(DataType::String)
        };

        let mut lazy = frame.lazy();
        if sortable {
            lazy = lazy.sort(
                [DATE_COLUMN],
                SortMultipleOptions::default().with_maintain_order(true),
            );
        }
        let frame = lazy
            .with_columns([
                date_label,
                col(CLOSE_COLUMN).cast(DataType::Float64),
            ])
            .collect()?;

        Ok(Self { frame })
    }

    /// Build a series from remote bars; bars may arrive in any order.
    pub fn from_bars(bars: &[PriceBar]) -> Result<Self> {
        let mut bars = bars.to_vec();
        bars.sort_by_key(|bar| bar.date);

        let dates: Vec<String> = bars
            .iter()
            .map(|bar| bar.date.format(DATE_LABEL_FORMAT).to_string())
            .collect();
        let open: Vec<Option<f64>> = bars.iter().map(|bar| bar.open).collect();
        let high: Vec<Option<f64>> = bars.iter().map(|bar| bar.high).collect();
        let low: Vec<Option<f64>> = bars.iter().map(|bar| bar.low).collect();
        let close: Vec<f64> = bars.iter().map(|bar| bar.close).collect();
        let volume: Vec<Option<f64>> = bars.iter().map(|bar| bar.volume).collect();

        let frame = df! {
            PriceColumn::Date.as_str() => dates,
            PriceColumn::Open.as_str() => open,
            PriceColumn::High.as_str() => high,
            PriceColumn::Low.as_str() => low,
            PriceColumn::Close.as_str() => close,
            PriceColumn::Volume.as_str() => volume,
        }?;

        Ok(Self { frame })
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn dates(&self) -> Result<Vec<String>> {
        let dates = self.frame.column(DATE_COLUMN)?.str()?;
        Ok(dates
            .into_iter()
            .map(|date| date.unwrap_or_default().to_string())
            .collect())
    }

    pub fn closes(&self) -> Result<Vec<Option<f64>>> {
        let closes = self.frame.column(CLOSE_COLUMN)?.f64()?;
        Ok(closes.into_iter().collect())
    }
}
