use crate::types::Country;
use crate::ui::state::AppState;

pub struct SymbolSelector;

impl SymbolSelector {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label("Country:");
            egui::ComboBox::from_id_salt("country")
                .selected_text(state.country.label())
                .show_ui(ui, |ui| {
                    for country in Country::all() {
                        ui.selectable_value(&mut state.country, country, country.label());
                    }
                });
        });

        let exchanges = state.country.exchanges();
        if !exchanges.contains(&state.exchange) {
            if let Some(first) = exchanges.first() {
                state.exchange = *first;
            }
        }

        ui.horizontal(|ui| {
            ui.label("Exchange:");
            egui::ComboBox::from_id_salt("exchange")
                .selected_text(state.exchange.label())
                .show_ui(ui, |ui| {
                    for exchange in exchanges {
                        ui.selectable_value(&mut state.exchange, exchange, exchange.label());
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label("Symbol:");
            ui.add(
                egui::TextEdit::singleline(&mut state.symbol)
                    .hint_text("e.g., SBIN.NS, AAPL")
                    .desired_width(140.0),
            );
        });

        if !state.symbol.trim().is_empty() {
            ui.small(format!("Ticker: {}", state.exchange.qualify(&state.symbol)));
        }
    }
}
