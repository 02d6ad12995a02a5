use crate::data::connectors::DataValidator;
use crate::data::series::{PriceSeries, CLOSE_COLUMN, DATE_COLUMN};
use crate::error::Result;
use polars::prelude::*;

/// Metadata about a loaded price table
#[derive(Debug, Clone)]
pub struct DatasetMetadata {
    pub source: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
    pub date_range: Option<(String, String)>,
    pub price_range: (f64, f64), // (min, max) of close
}

/// Data preview for UI display
#[derive(Debug, Clone)]
pub struct DataPreview {
    pub metadata: DatasetMetadata,
    pub first_rows: Vec<Vec<String>>,
    pub column_stats: Vec<ColumnStats>,
}

#[derive(Debug, Clone)]
pub struct ColumnStats {
    pub name: String,
    pub dtype: String,
    pub null_count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl DataPreview {
    /// Render the first `max_rows` rows as strings and summarise each column.
    pub fn from_series(source: &str, series: &PriceSeries, max_rows: usize) -> Result<Self> {
        let df = series.frame();
        let metadata = Self::metadata(source, series)?;

        let num_preview_rows = max_rows.min(df.height());
        let mut first_rows = Vec::with_capacity(num_preview_rows);
        for i in 0..num_preview_rows {
            let mut row = Vec::with_capacity(df.width());
            for column in df.get_columns() {
                row.push(format_cell(column.get(i)?));
            }
            first_rows.push(row);
        }

        let mut column_stats = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let (min, max, mean) = if DataValidator::is_numeric(column.dtype()) {
                let values = column.cast(&DataType::Float64)?;
                let values = values.f64()?;
                (values.min(), values.max(), values.mean())
            } else {
                (None, None, None)
            };

            column_stats.push(ColumnStats {
                name: column.name().to_string(),
                dtype: format!("{:?}", column.dtype()),
                null_count: column.null_count(),
                min,
                max,
                mean,
            });
        }

        Ok(Self {
            metadata,
            first_rows,
            column_stats,
        })
    }

    fn metadata(source: &str, series: &PriceSeries) -> Result<DatasetMetadata> {
        let df = series.frame();

        let close = df.column(CLOSE_COLUMN)?.f64()?;
        let price_range = (close.min().unwrap_or(0.0), close.max().unwrap_or(0.0));

        let dates = df.column(DATE_COLUMN)?.str()?;
        let first = dates.into_iter().flatten().next();
        let last = dates.into_iter().flatten().last();
        let date_range = first
            .zip(last)
            .map(|(first, last)| (first.to_string(), last.to_string()));

        Ok(DatasetMetadata {
            source: source.to_string(),
            num_rows: df.height(),
            num_columns: df.width(),
            columns: series.column_names(),
            date_range,
            price_range,
        })
    }
}

fn format_cell(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::Float64(v) => format!("{:.4}", v),
        AnyValue::Float32(v) => format!("{:.4}", v),
        AnyValue::String(v) => v.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_create_preview() {
        let df = df! {
            "date" => &["2024-01-01", "2024-01-02", "2024-01-03"],
            "open" => &[100.0, 101.0, 102.0],
            "close" => &[100.5, 102.0, 103.0],
            "volume" => &[1000i64, 1500, 1200],
        }
        .unwrap();
        let series = PriceSeries::from_frame(df).unwrap();

        let preview = DataPreview::from_series("test.csv", &series, 2).unwrap();
        assert_eq!(preview.first_rows.len(), 2);
        assert_eq!(preview.first_rows[0][0], "2024-01-01");
        assert_eq!(preview.first_rows[0][2], "100.5000");
        assert_eq!(preview.metadata.num_rows, 3);
        assert_eq!(preview.metadata.price_range, (100.5, 103.0));
        assert_eq!(
            preview.metadata.date_range,
            Some(("2024-01-01".to_string(), "2024-01-03".to_string()))
        );

        let volume = preview
            .column_stats
            .iter()
            .find(|s| s.name == "volume")
            .unwrap();
        assert_eq!(volume.max, Some(1500.0));
        let date = preview.column_stats.iter().find(|s| s.name == "date").unwrap();
        assert!(date.mean.is_none());
    }
}
