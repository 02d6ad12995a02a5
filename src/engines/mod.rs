pub mod analysis;
pub mod crossover;
pub mod signal_series;

pub use analysis::{
    run_analysis, run_to_outcome, user_message, AnalysisReport, AnalysisRequest, RunOutcome,
};
pub use crossover::{compute, CrossoverEngine};
pub use signal_series::{Crossover, SignalRow, SignalSeries, SignalSummary};
