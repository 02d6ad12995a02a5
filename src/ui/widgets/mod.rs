pub mod data_selector;
pub mod data_table;
pub mod price_chart;
pub mod signal_table;
pub mod symbol_selector;

pub use data_selector::DataSelector;
pub use data_table::DataTable;
pub use price_chart::PriceChart;
pub use signal_table::SignalTable;
pub use symbol_selector::SymbolSelector;

/// Fixed height of one body row in the scrolled tables. Grids use it as their
/// minimum row height so `show_rows` can skip rows by arithmetic.
pub(crate) fn table_row_height(ui: &egui::Ui) -> f32 {
    ui.text_style_height(&egui::TextStyle::Body)
        .max(ui.spacing().interact_size.y)
}
