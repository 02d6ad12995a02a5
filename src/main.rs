use eframe::NativeOptions;
use signalboard::config::{manager::DEFAULT_CONFIG_FILE, ConfigManager};
use signalboard::ui::SignalboardApp;

fn main() -> eframe::Result<()> {
    // RUST_LOG controls verbosity
    env_logger::init();

    let manager = ConfigManager::new();
    if let Err(e) = manager.load_layered(DEFAULT_CONFIG_FILE) {
        log::error!("{}; using defaults", e);
    }
    let config = manager.get();

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("Signalboard - Moving Average Crossover"),
        ..Default::default()
    };

    eframe::run_native(
        "Signalboard",
        native_options,
        Box::new(|cc| Ok(Box::new(SignalboardApp::new(cc, config)))),
    )
}
