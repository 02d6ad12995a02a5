use crate::config::{ConfigSection, SignalConfig};
use crate::engines::AnalysisRequest;
use crate::error::{Result, SignalboardError};
use crate::ui::state::{AppState, DATE_FORMAT};
use chrono::NaiveDate;

pub struct ConfigBridge;

impl ConfigBridge {
    /// Convert AppState to a validated SignalConfig
    pub fn to_signal_config(state: &AppState) -> Result<SignalConfig> {
        let config = SignalConfig {
            short_window: state.short_window,
            long_window: state.long_window,
            warmup_policy: state.warmup_policy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Convert AppState to an AnalysisRequest
    pub fn to_analysis_request(state: &AppState) -> Result<AnalysisRequest> {
        Ok(AnalysisRequest {
            upload: state.upload_path.clone(),
            symbol: state.symbol.clone(),
            exchange: state.exchange,
            start: Self::parse_date("Start date", &state.start_date)?,
            end: Self::parse_date("End date", &state.end_date)?,
        })
    }

    fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
            SignalboardError::InvalidInput(format!(
                "{} must be YYYY-MM-DD, got '{}'",
                field, value
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_analysis_request() {
        let mut state = AppState::new();
        state.symbol = "AAPL".to_string();
        state.start_date = "2024-01-01".to_string();
        state.end_date = " 2024-06-30 ".to_string();

        let request = ConfigBridge::to_analysis_request(&state).unwrap();
        assert_eq!(request.symbol, "AAPL");
        assert_eq!(request.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(request.end, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
    }

    #[test]
    fn test_bad_date() {
        let mut state = AppState::new();
        state.start_date = "01/02/2024".to_string();
        let result = ConfigBridge::to_analysis_request(&state);
        assert!(matches!(result, Err(SignalboardError::InvalidInput(_))));
    }

    #[test]
    fn test_to_signal_config() {
        let mut state = AppState::new();
        state.short_window = 5;
        state.long_window = 20;
        let config = ConfigBridge::to_signal_config(&state).unwrap();
        assert_eq!(config, SignalConfig::new(5, 20));

        state.short_window = 0;
        assert!(ConfigBridge::to_signal_config(&state).is_err());
    }
}
