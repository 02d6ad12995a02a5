use signalboard::config::{AppConfig, ConfigManager, ConfigSection, SignalConfig, WarmupPolicy};
use signalboard::types::{Country, Exchange};
use signalboard::SignalboardError;
use std::io::Write;

#[test]
fn test_defaults_match_dashboard() {
    let config = AppConfig::default();
    assert_eq!(config.signal.short_window, 10);
    assert_eq!(config.signal.long_window, 50);
    assert_eq!(config.signal.warmup_policy, WarmupPolicy::SellDefault);
    assert_eq!(config.display.default_country, Country::India);
    assert_eq!(config.display.default_exchange, Exchange::Nse);
    assert!(config.validate().is_ok());
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signalboard.toml");

    let manager = ConfigManager::new();
    manager
        .update(|config| {
            config.signal = SignalConfig::new(20, 100).with_warmup_policy(WarmupPolicy::Explicit);
            config.display.preview_rows = 50;
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let reloaded = ConfigManager::new();
    reloaded.load_from_file(&path).unwrap();
    assert_eq!(reloaded.get(), manager.get());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[signal]").unwrap();
    writeln!(file, "short_window = 5").unwrap();
    file.flush().unwrap();

    let manager = ConfigManager::new();
    manager.load_from_file(file.path()).unwrap();

    let config = manager.get();
    assert_eq!(config.signal.short_window, 5);
    assert_eq!(config.signal.long_window, 50);
    assert_eq!(config.fetch, AppConfig::default().fetch);
}

#[test]
fn test_environment_overrides_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[signal]").unwrap();
    writeln!(file, "short_window = 5").unwrap();
    writeln!(file, "long_window = 30").unwrap();
    file.flush().unwrap();

    std::env::set_var("SIGNALBOARD_LAYERED_TEST__SIGNAL__LONG_WINDOW", "40");

    let manager = ConfigManager::new();
    let result = manager.load_layered_with_prefix(file.path(), "SIGNALBOARD_LAYERED_TEST");
    std::env::remove_var("SIGNALBOARD_LAYERED_TEST__SIGNAL__LONG_WINDOW");
    result.unwrap();

    let config = manager.get();
    assert_eq!(config.signal.short_window, 5);
    assert_eq!(config.signal.long_window, 40);
}

#[test]
fn test_missing_layered_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::new();
    manager
        .load_layered_with_prefix(dir.path().join("absent.toml"), "SIGNALBOARD_ABSENT_TEST")
        .unwrap();
    assert_eq!(manager.get(), AppConfig::default());
}

#[test]
fn test_invalid_update_rejected() {
    let manager = ConfigManager::new();
    let result = manager.update(|config| config.signal.short_window = 0);

    assert!(matches!(result, Err(SignalboardError::Configuration(_))));
    assert_eq!(manager.get().signal.short_window, 10);
}

#[test]
fn test_mismatched_exchange_rejected() {
    let mut config = AppConfig::default();
    config.display.default_exchange = Exchange::Nyse;
    assert!(config.display.validate().is_err());
}
