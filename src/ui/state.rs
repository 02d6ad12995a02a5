use crate::config::{AppConfig, WarmupPolicy};
use crate::engines::AnalysisReport;
use crate::types::{Country, Exchange};
use chrono::{Days, Local};
use std::path::PathBuf;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, text: text.into() }
    }
}

/// Central application state for the UI
pub struct AppState {
    // Data Source
    pub country: Country,
    pub exchange: Exchange,
    pub symbol: String,
    pub upload_path: Option<PathBuf>,
    pub start_date: String,
    pub end_date: String,

    // Signal Configuration
    pub short_window: usize,
    pub long_window: usize,
    pub warmup_policy: WarmupPolicy,
    pub preview_rows: usize,

    // Execution State
    pub run_requested: bool,
    pub is_running: bool,
    pub status: StatusMessage,

    // Results
    pub report: Option<AnalysisReport>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let today = Local::now().date_naive();
        let year_ago = today.checked_sub_days(Days::new(365)).unwrap_or(today);

        Self {
            // Data Source
            country: config.display.default_country,
            exchange: config.display.default_exchange,
            symbol: String::new(),
            upload_path: None,
            start_date: year_ago.format(DATE_FORMAT).to_string(),
            end_date: today.format(DATE_FORMAT).to_string(),

            // Signal Configuration
            short_window: config.signal.short_window,
            long_window: config.signal.long_window,
            warmup_policy: config.signal.warmup_policy,
            preview_rows: config.display.preview_rows,

            // Execution State
            run_requested: false,
            is_running: false,
            status: StatusMessage::info("Configure and click 'Run Backtest' to view results."),

            // Results
            report: None,
        }
    }
}
