use crate::ui::state::{AppState, StatusKind};
use crate::ui::widgets::{DataTable, PriceChart, SignalTable};

pub struct MainPanel;

impl Default for MainPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.heading("Stock Backtesting Engine");

        ui.separator();

        let color = match state.status.kind {
            StatusKind::Info => ui.visuals().text_color(),
            StatusKind::Success => egui::Color32::from_rgb(0, 160, 0),
            StatusKind::Error => egui::Color32::from_rgb(200, 0, 0),
        };
        ui.colored_label(color, &state.status.text);

        ui.separator();

        let Some(report) = &state.report else {
            ui.centered_and_justified(|ui| {
                ui.label("Configure and click 'Run Backtest' to view results.");
            });
            return;
        };

        egui::ScrollArea::vertical()
            .id_salt("main_scroll")
            .show(ui, |ui| {
                ui.collapsing(format!("Stock Data for {}", report.title), |ui| {
                    DataTable::show(ui, &report.preview);
                });

                ui.separator();

                ui.heading("Backtesting Results");
                PriceChart::show(ui, &report.signals);

                ui.separator();

                SignalTable::show(ui, &report.signals);
            });
    }
}
