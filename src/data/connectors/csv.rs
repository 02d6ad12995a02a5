use crate::data::series::{PriceSeries, CLOSE_COLUMN};
use crate::error::{Result, SignalboardError};
use polars::prelude::*;
use std::path::Path;
use super::validator::DataValidator;

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_parse_options(CsvParseOptions::default().with_try_parse_dates(true))
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))
            .map_err(|e| SignalboardError::InvalidData(format!("Failed to open CSV: {}", e)))?
            .finish()
            .map_err(|e| SignalboardError::InvalidData(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load, validate and normalise an uploaded price file
    pub fn load_price_series<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
        let df = Self::load(&path)?;
        DataValidator::validate_minimum_rows(&df, 1)?;

        // Warn about nulls but don't fail
        let null_report = DataValidator::check_nulls(&df)?;
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        let series = PriceSeries::from_frame(df)?;
        DataValidator::validate_close_values(series.frame(), CLOSE_COLUMN)?;

        log::info!(
            "Loaded {} rows from {}",
            series.len(),
            path.as_ref().display()
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_price_series_sorts_dates() {
        let file = write_csv(
            "Date,Open,Close,Volume\n\
             2024-01-03,102.0,103.0,1200\n\
             2024-01-01,100.0,100.5,1000\n\
             2024-01-02,101.0,102.0,1500\n",
        );

        let series = CsvConnector::load_price_series(file.path()).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(
            series.dates().unwrap(),
            vec!["2024-01-01", "2024-01-02", "2024-01-03"]
        );
        assert_eq!(
            series.closes().unwrap(),
            vec![Some(100.5), Some(102.0), Some(103.0)]
        );
    }

    #[test]
    fn test_timestamp_dates_labelled_by_day() {
        let file = write_csv(
            "Date,Close\n\
             2024-01-03 00:00:00,11.0\n\
             2024-01-02 00:00:00,10.0\n",
        );

        let series = CsvConnector::load_price_series(file.path()).unwrap();
        assert_eq!(series.dates().unwrap(), vec!["2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn test_missing_close_column() {
        let file = write_csv("Date,Open\n2024-01-01,1.0\n2024-01-02,2.0\n");
        let result = CsvConnector::load_price_series(file.path());
        assert!(matches!(result, Err(SignalboardError::InvalidData(_))));
    }

    #[test]
    fn test_header_only_file() {
        let file = write_csv("Date,Close\n");
        let result = CsvConnector::load_price_series(file.path());
        assert!(matches!(result, Err(SignalboardError::InvalidData(_))));
    }

    #[test]
    fn test_non_numeric_close() {
        let file = write_csv("Date,Close\n2024-01-01,abc\n2024-01-02,def\n");
        let result = CsvConnector::load_price_series(file.path());
        assert!(matches!(result, Err(SignalboardError::InvalidData(_))));
    }

    #[test]
    fn test_leading_missing_close_allowed() {
        let file = write_csv("Date,Close\n2024-01-01,\n2024-01-02,5.0\n2024-01-03,6.0\n");
        let series = CsvConnector::load_price_series(file.path()).unwrap();
        assert_eq!(series.closes().unwrap(), vec![None, Some(5.0), Some(6.0)]);
    }
}
