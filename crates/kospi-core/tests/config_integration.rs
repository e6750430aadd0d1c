//! 설정 파일 로드 통합 테스트

use std::path::PathBuf;

use kospi_core::{AppConfig, LogConfig, LogFormat};

/// 테스트마다 고유한 임시 설정 파일을 만듭니다.
fn write_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "kospi_core_{}_{}.toml",
        name,
        std::process::id()
    ));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_overrides_from_file() {
    let path = write_config(
        "overrides",
        r#"
[logging]
level = "debug"
format = "compact"
suppress_warnings = false
with_file = true

[backtest]
lookback_days = 90
"#,
    );

    let config = AppConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.effective_level(), "debug");
    assert_eq!(config.backtest.lookback_days, 90);

    let log_config = LogConfig::from_logging_config(&config.logging);
    assert_eq!(log_config.format, LogFormat::Compact);
    assert!(log_config.with_file);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let path = write_config(
        "partial",
        r#"
[backtest]
lookback_days = 30
"#,
    );

    let config = AppConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.backtest.lookback_days, 30);
    assert_eq!(config.logging.format, "pretty");
    assert!(config.logging.suppress_warnings);
    assert_eq!(config.logging.effective_level(), "error");
}

#[test]
fn test_malformed_file_is_config_error() {
    let path = write_config("malformed", "[backtest]\nlookback_days = \"many\"\n");

    let result = AppConfig::load(&path);
    std::fs::remove_file(&path).ok();

    let err = result.unwrap_err();
    assert!(err.is_user_error());
}
