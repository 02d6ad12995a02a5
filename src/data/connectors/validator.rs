use crate::error::{Result, SignalboardError};
use polars::prelude::*;
use super::types::PriceColumn;
use std::collections::HashMap;

pub struct DataValidator;

impl DataValidator {
    /// Map every recognised price column to its name in `df`. Date and close
    /// must be present, and close must be numeric.
    pub fn resolve_columns(df: &DataFrame) -> Result<HashMap<PriceColumn, String>> {
        let mut column_map = HashMap::new();

        for column in PriceColumn::all() {
            match Self::find_column(df, &column) {
                Some(col_name) => {
                    column_map.insert(column, col_name.to_string());
                }
                None if column.is_required() => {
                    return Err(SignalboardError::InvalidData(format!(
                        "Missing required column: {} (tried aliases: {:?})",
                        column.as_str(),
                        column.aliases()
                    )));
                }
                None => {}
            }
        }

        if let Some(close_name) = column_map.get(&PriceColumn::Close) {
            let series = df.column(close_name)?;
            if !Self::is_numeric(series.dtype()) {
                return Err(SignalboardError::InvalidData(format!(
                    "Column '{}' (close) must be numeric, found {:?}",
                    close_name,
                    series.dtype()
                )));
            }
        }

        Ok(column_map)
    }

    /// Find column by checking aliases
    fn find_column(df: &DataFrame, column: &PriceColumn) -> Option<&'static str> {
        let columns = df.get_column_names();
        for alias in column.aliases() {
            if columns.iter().any(|col| col.as_str() == alias) {
                return Some(alias);
            }
        }
        None
    }

    pub fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float64
                | DataType::Float32
                | DataType::Int64
                | DataType::Int32
                | DataType::Int16
                | DataType::Int8
                | DataType::UInt64
                | DataType::UInt32
                | DataType::UInt16
                | DataType::UInt8
        )
    }

    /// A close column with no values at all cannot produce a single average.
    pub fn validate_close_values(df: &DataFrame, close_name: &str) -> Result<()> {
        let close = df.column(close_name)?;
        if df.height() > 0 && close.null_count() == df.height() {
            return Err(SignalboardError::InvalidData(format!(
                "Column '{}' contains no values",
                close_name
            )));
        }
        Ok(())
    }

    /// Some run of `window` consecutive closes must be present. Series shorter
    /// than `window` pass; they are short, not gapped.
    pub fn validate_window_coverage(df: &DataFrame, close_name: &str, window: usize) -> Result<()> {
        if window == 0 || df.height() < window {
            return Ok(());
        }

        let close = df.column(close_name)?.cast(&DataType::Float64)?;
        let mut run = 0;
        let mut longest = 0;
        for value in close.f64()?.into_iter() {
            match value {
                Some(_) => {
                    run += 1;
                    longest = longest.max(run);
                }
                None => run = 0,
            }
        }

        if longest < window {
            return Err(SignalboardError::InvalidData(format!(
                "Column '{}' has no {} consecutive values (longest run: {}); every average would be undefined",
                close_name, window, longest
            )));
        }
        Ok(())
    }

    /// Check for minimum required rows
    pub fn validate_minimum_rows(df: &DataFrame, min_rows: usize) -> Result<()> {
        if df.height() < min_rows {
            return Err(SignalboardError::InvalidData(format!(
                "Insufficient data: {} rows, minimum {} required",
                df.height(),
                min_rows
            )));
        }
        Ok(())
    }

    /// Check for null values in every column
    pub fn check_nulls(df: &DataFrame) -> Result<Vec<(String, usize)>> {
        let mut null_report = Vec::new();

        for col_name in df.get_column_names() {
            let series = df.column(col_name)?;
            let null_count = series.null_count();
            if null_count > 0 {
                null_report.push((col_name.to_string(), null_count));
            }
        }

        Ok(null_report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_window_coverage() {
        let gapped = df! {
            "close" => &[Some(1.0), None, Some(2.0), None, Some(3.0), None],
        }
        .unwrap();
        assert!(matches!(
            DataValidator::validate_window_coverage(&gapped, "close", 2),
            Err(SignalboardError::InvalidData(_))
        ));
        assert!(DataValidator::validate_window_coverage(&gapped, "close", 1).is_ok());

        let tail_run = df! {
            "close" => &[None, Some(1.0), None, Some(2.0), Some(3.0), Some(4.0)],
        }
        .unwrap();
        assert!(DataValidator::validate_window_coverage(&tail_run, "close", 3).is_ok());
        assert!(DataValidator::validate_window_coverage(&tail_run, "close", 4).is_err());

        // Fewer rows than the window: short, not gapped
        assert!(DataValidator::validate_window_coverage(&tail_run, "close", 50).is_ok());
    }

    #[test]
    fn test_resolve_good_data() {
        let df = df! {
            "date" => &["2024-01-01", "2024-01-02", "2024-01-03"],
            "open" => &[100.0, 101.0, 102.0],
            "close" => &[100.5, 102.0, 103.0],
        }
        .unwrap();

        let map = DataValidator::resolve_columns(&df).unwrap();
        assert_eq!(map.get(&PriceColumn::Close).map(String::as_str), Some("close"));
        assert_eq!(map.get(&PriceColumn::Open).map(String::as_str), Some("open"));
        assert!(!map.contains_key(&PriceColumn::Volume));
    }

    #[test]
    fn test_missing_close_column() {
        let df = df! {
            "date" => &["2024-01-01", "2024-01-02"],
            "open" => &[100.0, 101.0],
        }
        .unwrap();

        let result = DataValidator::resolve_columns(&df);
        assert!(matches!(result, Err(SignalboardError::InvalidData(_))));
    }

    #[test]
    fn test_missing_date_column() {
        let df = df! {
            "close" => &[100.0, 101.0],
        }
        .unwrap();

        let result = DataValidator::resolve_columns(&df);
        assert!(matches!(result, Err(SignalboardError::InvalidData(_))));
    }

    #[test]
    fn test_non_numeric_close() {
        let df = df! {
            "Date" => &["2024-01-01", "2024-01-02"],
            "Close" => &["abc", "def"],
        }
        .unwrap();

        let result = DataValidator::resolve_columns(&df);
        assert!(matches!(result, Err(SignalboardError::InvalidData(_))));
    }

    #[test]
    fn test_column_aliases() {
        let df = df! {
            "Date" => &["2024-01-01", "2024-01-02"],
            "HIGH" => &[101.0, 103.0],
            "Close" => &[100.5, 102.0],
            "Vol" => &[1000.0, 1500.0],
        }
        .unwrap();

        let map = DataValidator::resolve_columns(&df).unwrap();
        assert_eq!(map.get(&PriceColumn::Date).map(String::as_str), Some("Date"));
        assert_eq!(map.get(&PriceColumn::High).map(String::as_str), Some("HIGH"));
        assert_eq!(map.get(&PriceColumn::Volume).map(String::as_str), Some("Vol"));
    }

    #[test]
    fn test_all_null_close() {
        let df = df! {
            "date" => &["2024-01-01", "2024-01-02"],
            "close" => &[None::<f64>, None],
        }
        .unwrap();

        assert!(DataValidator::validate_close_values(&df, "close").is_err());
        let report = DataValidator::check_nulls(&df).unwrap();
        assert_eq!(report, vec![("close".to_string(), 2)]);
    }
}
