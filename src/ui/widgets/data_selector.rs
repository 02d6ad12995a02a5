use crate::ui::state::AppState;

/// CSV upload picker. The file is only read when a run starts.
pub struct DataSelector;

impl DataSelector {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            if ui.button("Upload CSV File...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV Files", &["csv"])
                    .pick_file()
                {
                    log::info!("Selected upload {}", path.display());
                    state.upload_path = Some(path);
                }
            }

            if state.upload_path.is_some() && ui.button("Clear").clicked() {
                state.upload_path = None;
            }
        });

        match &state.upload_path {
            Some(path) => {
                ui.label(format!(
                    "File: {}",
                    path.file_name().unwrap_or_default().to_string_lossy()
                ));
                ui.small("The uploaded file is used instead of the symbol.");
            }
            None => {
                ui.label("No file selected");
            }
        }
    }
}
