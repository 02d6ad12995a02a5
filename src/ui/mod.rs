mod app;
mod panels;
mod state;
mod widgets;
mod services;

pub use app::SignalboardApp;
pub use state::{AppState, StatusKind, StatusMessage};
pub use services::{BacktestRunner, ConfigBridge};
