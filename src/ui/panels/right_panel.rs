use crate::ui::state::AppState;

pub struct RightPanel;

impl Default for RightPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl RightPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.heading("Details");

        ui.separator();

        let Some(report) = &state.report else {
            ui.centered_and_justified(|ui| {
                ui.label("Run a backtest to view details");
            });
            return;
        };

        let metadata = &report.preview.metadata;
        let summary = &report.summary;

        // Signal Card
        ui.group(|ui| {
            ui.heading("Signal");
            ui.horizontal(|ui| {
                ui.label("Windows:");
                ui.label(format!(
                    "{} / {}",
                    report.signals.short_window(),
                    report.signals.long_window()
                ));
            });
            ui.horizontal(|ui| {
                ui.label("Latest:");
                ui.label(summary.latest.map(|s| s.to_string()).unwrap_or_default());
            });
            ui.horizontal(|ui| {
                ui.label("Buy rows:");
                ui.label(format!("{}", summary.buy_rows));
            });
            ui.horizontal(|ui| {
                ui.label("Sell rows:");
                ui.label(format!("{}", summary.sell_rows));
            });
            if summary.undefined_rows > 0 {
                ui.horizontal(|ui| {
                    ui.label("Undefined rows:");
                    ui.label(format!("{}", summary.undefined_rows));
                });
            }
        });

        ui.separator();

        ui.collapsing(format!("Crossovers ({})", summary.crossovers.len()), |ui| {
            egui::Grid::new("crossover_grid").striped(true).show(ui, |ui| {
                for crossover in &summary.crossovers {
                    ui.label(&crossover.date);
                    ui.label(crossover.signal.to_string());
                    ui.end_row();
                }
            });
        });

        ui.separator();

        // Dataset Card
        ui.group(|ui| {
            ui.heading("Dataset");
            ui.label(format!("Source: {}", metadata.source));
            ui.label(format!("Rows: {}", metadata.num_rows));
            if let Some((first, last)) = &metadata.date_range {
                ui.label(format!("Dates: {} to {}", first, last));
            }
            ui.label(format!(
                "Close range: {:.2} - {:.2}",
                metadata.price_range.0, metadata.price_range.1
            ));
        });

        ui.collapsing("Column Statistics", |ui| {
            egui::Grid::new("column_stats_grid").striped(true).show(ui, |ui| {
                ui.strong("Column");
                ui.strong("Nulls");
                ui.strong("Min");
                ui.strong("Max");
                ui.strong("Mean");
                ui.end_row();

                let fmt = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_default();
                for stats in &report.preview.column_stats {
                    ui.label(&stats.name).on_hover_text(&stats.dtype);
                    ui.label(format!("{}", stats.null_count));
                    ui.label(fmt(stats.min));
                    ui.label(fmt(stats.max));
                    ui.label(fmt(stats.mean));
                    ui.end_row();
                }
            });
        });
    }
}
