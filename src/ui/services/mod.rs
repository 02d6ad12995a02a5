pub mod backtest_runner;
pub mod config_bridge;

pub use backtest_runner::BacktestRunner;
pub use config_bridge::ConfigBridge;
