use crate::data::DataPreview;
use super::table_row_height;

const COLUMN_WIDTH: f32 = 90.0;

/// Raw price table as loaded, before any derived columns
pub struct DataTable;

impl DataTable {
    pub fn show(ui: &mut egui::Ui, preview: &DataPreview) {
        let metadata = &preview.metadata;
        ui.label(format!(
            "{} rows x {} columns",
            metadata.num_rows, metadata.num_columns
        ));
        if preview.first_rows.len() < metadata.num_rows {
            ui.small(format!("Showing the first {} rows", preview.first_rows.len()));
        }

        let row_height = table_row_height(ui);
        let spacing = [8.0, ui.spacing().item_spacing.y];

        egui::ScrollArea::horizontal()
            .id_salt("raw_data_columns")
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    // Header stays outside show_rows so every scrolled row has the same height
                    egui::Grid::new("raw_data_header")
                        .spacing(spacing)
                        .min_col_width(COLUMN_WIDTH)
                        .max_col_width(COLUMN_WIDTH)
                        .show(ui, |ui| {
                            for col_name in &metadata.columns {
                                ui.strong(col_name);
                            }
                            ui.end_row();
                        });

                    egui::ScrollArea::vertical()
                        .id_salt("raw_data_table")
                        .max_height(220.0)
                        .show_rows(ui, row_height, preview.first_rows.len(), |ui, range| {
                            egui::Grid::new("raw_data_grid")
                                .striped(true)
                                .spacing(spacing)
                                .min_row_height(row_height)
                                .min_col_width(COLUMN_WIDTH)
                                .max_col_width(COLUMN_WIDTH)
                                .show(ui, |ui| {
                                    for row in &preview.first_rows[range] {
                                        for cell in row {
                                            ui.add(egui::Label::new(cell.as_str()).truncate());
                                        }
                                        ui.end_row();
                                    }
                                });
                        });
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PriceSeries;
    use polars::df;

    #[test]
    fn test_renders_preview_headless() {
        let close: Vec<f64> = (0..1_000).map(|i| i as f64).collect();
        let dates: Vec<String> = (0..close.len()).map(|i| format!("row-{:05}", i)).collect();
        let series = PriceSeries::from_frame(df! { "date" => dates, "close" => close }.unwrap()).unwrap();
        let preview = DataPreview::from_series("test", &series, 500).unwrap();

        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    DataTable::show(ui, &preview);
                });
            });
        }
    }
}
