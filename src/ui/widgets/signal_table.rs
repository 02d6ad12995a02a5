use crate::config::WarmupPolicy;
use crate::engines::SignalSeries;
use crate::types::Signal;
use super::table_row_height;

const COLUMN_WIDTH: f32 = 90.0;

pub struct SignalTable;

impl SignalTable {
    pub fn show(ui: &mut egui::Ui, signals: &SignalSeries) {
        let legend = match signals.warmup_policy() {
            WarmupPolicy::SellDefault => "Signal Values (1 = Buy, -1 = Sell):",
            WarmupPolicy::Explicit => "Signal Values (1 = Buy, -1 = Sell, 0 = Undefined):",
        };
        ui.label(legend);

        let rows = signals.rows();
        let row_height = table_row_height(ui);
        let spacing = [10.0, ui.spacing().item_spacing.y];

        // Header stays outside show_rows so every scrolled row has the same height
        egui::Grid::new("signal_header")
            .spacing(spacing)
            .min_col_width(COLUMN_WIDTH)
            .max_col_width(COLUMN_WIDTH)
            .show(ui, |ui| {
                for title in ["Date", "Close", "Short MA", "Long MA", "Signal"] {
                    ui.strong(title);
                }
                ui.end_row();
            });

        egui::ScrollArea::vertical()
            .id_salt("signal_table")
            .max_height(320.0)
            .show_rows(ui, row_height, rows.len(), |ui, range| {
                egui::Grid::new("signal_grid")
                    .striped(true)
                    .spacing(spacing)
                    .min_row_height(row_height)
                    .min_col_width(COLUMN_WIDTH)
                    .max_col_width(COLUMN_WIDTH)
                    .show(ui, |ui| {
                        for row in &rows[range] {
                            // Truncated cells keep every row one line high
                            ui.add(egui::Label::new(row.date.as_str()).truncate());
                            ui.add(egui::Label::new(Self::format_value(row.close)).truncate());
                            ui.add(egui::Label::new(Self::format_value(row.short_ma)).truncate());
                            ui.add(egui::Label::new(Self::format_value(row.long_ma)).truncate());
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(row.signal.to_string())
                                        .color(Self::signal_color(row.signal)),
                                )
                                .truncate(),
                            );
                            ui.end_row();
                        }
                    });
            });
    }

    fn format_value(value: Option<f64>) -> String {
        value.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "-".to_string())
    }

    fn signal_color(signal: Signal) -> egui::Color32 {
        match signal {
            Signal::Buy => egui::Color32::from_rgb(0, 160, 0),
            Signal::Sell => egui::Color32::from_rgb(200, 0, 0),
            Signal::Undefined => egui::Color32::GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PriceSeries;
    use crate::engines::compute;
    use polars::df;

    #[test]
    fn test_renders_long_table_headless() {
        let close: Vec<f64> = (0..2_000).map(|i| 100.0 + (i % 17) as f64).collect();
        let dates: Vec<String> = (0..close.len()).map(|i| format!("row-{:05}", i)).collect();
        let series = PriceSeries::from_frame(df! { "date" => dates, "close" => close }.unwrap()).unwrap();
        let signals = compute(&series, 5, 20).unwrap();

        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    SignalTable::show(ui, &signals);
                });
            });
        }
    }
}
