use crate::config::{ConfigManifest, ConfigSection, SignalConfig, WarmupPolicy};
use crate::functions::indicators::SMA;
use crate::functions::traits::Indicator;
use crate::ui::state::AppState;
use crate::ui::widgets::{DataSelector, SymbolSelector};

pub struct LeftPanel {
    signal_manifest: ConfigManifest,
}

impl Default for LeftPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl LeftPanel {
    pub fn new() -> Self {
        Self {
            signal_manifest: SignalConfig::default().to_manifest(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        // 1. Symbol
        ui.heading("1. Select Country & Stock Data");
        SymbolSelector::show(ui, state);

        ui.separator();

        // 2. Optional upload
        ui.heading("2. Upload Data (Optional)");
        DataSelector::show(ui, state);

        ui.separator();

        // 3. Dates and windows
        ui.heading("3. Backtest Configuration");
        self.show_backtest_config(ui, state);

        ui.separator();

        Self::show_control_buttons(ui, state);

        ui.add_space(12.0);
        ui.separator();
        ui.small("Developed with ❤️ using egui.");
    }

    fn show_backtest_config(&self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label("Start Date:");
            ui.add(
                egui::TextEdit::singleline(&mut state.start_date)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(100.0),
            );
        });

        ui.horizontal(|ui| {
            ui.label("End Date:");
            ui.add(
                egui::TextEdit::singleline(&mut state.end_date)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(100.0),
            );
        });

        let average = SMA::new(state.short_window).ui_name();
        let (short_min, short_max) = self.signal_manifest.int_range("short_window", (1, 500));
        ui.horizontal(|ui| {
            ui.label("Short Window:").on_hover_text(average);
            ui.add(egui::DragValue::new(&mut state.short_window).range(short_min..=short_max));
        });

        let (long_min, long_max) = self.signal_manifest.int_range("long_window", (1, 500));
        ui.horizontal(|ui| {
            ui.label("Long Window:").on_hover_text(average);
            ui.add(egui::DragValue::new(&mut state.long_window).range(long_min..=long_max));
        });

        if state.short_window >= state.long_window {
            ui.colored_label(
                egui::Color32::YELLOW,
                "Short window should be smaller than long window",
            );
        }

        ui.horizontal(|ui| {
            ui.label("Warm-up:");
            egui::ComboBox::from_id_salt("warmup_policy")
                .selected_text(state.warmup_policy.label())
                .show_ui(ui, |ui| {
                    for policy in [WarmupPolicy::SellDefault, WarmupPolicy::Explicit] {
                        ui.selectable_value(&mut state.warmup_policy, policy, policy.label());
                    }
                });
        });
    }

    fn show_control_buttons(ui: &mut egui::Ui, state: &mut AppState) {
        ui.vertical_centered(|ui| {
            let run_button = ui.add_enabled(!state.is_running, egui::Button::new("▶ Run Backtest"));
            if run_button.clicked() {
                // The actual start is handled in app.rs
                state.run_requested = true;
            }

            if state.is_running {
                ui.spinner();
            }
        });
    }
}
