use super::panels::{LeftPanel, MainPanel, RightPanel};
use super::services::{BacktestRunner, ConfigBridge};
use super::state::{AppState, StatusMessage};
use crate::config::AppConfig;
use crate::data::MarketDataService;
use crate::engines::user_message;
use std::sync::Arc;
use std::time::Duration;

pub struct SignalboardApp {
    state: AppState,
    left_panel: LeftPanel,
    main_panel: MainPanel,
    right_panel: RightPanel,
    market: Result<Arc<MarketDataService>, String>,
    runner: Option<BacktestRunner>,
}

impl Default for SignalboardApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl SignalboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(&config)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        // A broken HTTP client only blocks symbol runs; uploads still work.
        let market = MarketDataService::from_config(&config.fetch)
            .map(Arc::new)
            .map_err(|e| {
                log::error!("Market data service unavailable: {}", e);
                user_message(&e)
            });

        Self {
            state: AppState::from_config(config),
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
            right_panel: RightPanel::new(),
            market,
            runner: None,
        }
    }

    fn start_run(&mut self) {
        let prepared = ConfigBridge::to_signal_config(&self.state).and_then(|config| {
            ConfigBridge::to_analysis_request(&self.state).map(|request| (config, request))
        });
        let (config, request) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => return self.fail(user_message(&e)),
        };

        let market = match &self.market {
            Ok(market) => Arc::clone(market),
            Err(msg) => return self.fail(msg.clone()),
        };

        match BacktestRunner::start(request, market, config, self.state.preview_rows) {
            Ok(runner) => {
                // Replacing the runner detaches any run still in flight
                self.runner = Some(runner);
                self.state.is_running = true;
                self.state.status = StatusMessage::info("Running backtest...");
            }
            Err(e) => self.fail(format!("Failed to start backtest: {}", e)),
        }
    }

    fn poll_runner(&mut self) {
        let Some(runner) = self.runner.as_mut() else {
            return;
        };
        let Some(outcome) = runner.poll() else {
            return;
        };

        self.runner = None;
        self.state.is_running = false;
        match outcome {
            Ok(report) => {
                self.state.status = StatusMessage::success(report.message.clone());
                self.state.report = Some(report);
            }
            Err(msg) => self.fail(msg),
        }
    }

    // A failed run leaves no table or chart behind.
    fn fail(&mut self, msg: String) {
        self.state.is_running = false;
        self.state.report = None;
        self.state.status = StatusMessage::error(msg);
    }
}

impl eframe::App for SignalboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_runner();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Signalboard - Moving Average Crossover");
        });

        // Left Panel - Inputs
        egui::SidePanel::left("left_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, &mut self.state);
                });
            });

        // Right Panel - Summary
        egui::SidePanel::right("right_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.right_panel.show(ui, &self.state);
                });
            });

        // Central Panel - Tables and chart
        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &self.state);
        });

        if std::mem::take(&mut self.state.run_requested) {
            self.start_run();
        }

        if self.state.is_running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
