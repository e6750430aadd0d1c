//! 설정 관리.
//!
//! 기본값, TOML 설정 파일, 환경 변수 순서로 덮어씁니다.
//! 환경 변수는 `KOSPI__BACKTEST__LOOKBACK_DAYS`처럼 `KOSPI__<섹션>__<키>` 형식입니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BacktestResult;
use crate::period::DEFAULT_LOOKBACK_DAYS;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 백테스트 설정
    #[serde(default)]
    pub backtest: BacktestSettings,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
    /// 경고 이하 로그 억제
    pub suppress_warnings: bool,
    /// 로그에 파일명과 줄 번호 포함
    pub with_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            suppress_warnings: true,
            with_file: false,
        }
    }
}

impl LoggingConfig {
    /// 실제로 적용할 로그 레벨.
    ///
    /// 경고 억제가 켜져 있으면 에러만 남깁니다.
    pub fn effective_level(&self) -> &str {
        if self.suppress_warnings {
            "error"
        } else {
            &self.level
        }
    }
}

/// 백테스트 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BacktestSettings {
    /// 시작일이 없을 때 종료일로부터 거슬러 올라갈 일수
    pub lookback_days: i64,
}

impl Default for BacktestSettings {
    fn default() -> Self {
        Self {
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다. 파일이 없으면 에러입니다.
    pub fn load<P: AsRef<Path>>(path: P) -> BacktestResult<Self> {
        Self::build(path.as_ref(), true)
    }

    /// 파일이 없어도 기본값과 환경 변수로 설정을 로드합니다.
    pub fn load_optional<P: AsRef<Path>>(path: P) -> BacktestResult<Self> {
        Self::build(path.as_ref(), false)
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> BacktestResult<Self> {
        Self::load_optional(DEFAULT_CONFIG_PATH)
    }

    fn build(path: &Path, required: bool) -> BacktestResult<Self> {
        let defaults = LoggingConfig::default();

        let builder = config::Config::builder()
            .set_default("logging.level", defaults.level)?
            .set_default("logging.format", defaults.format)?
            .set_default("logging.suppress_warnings", defaults.suppress_warnings)?
            .set_default("logging.with_file", defaults.with_file)?
            .set_default("backtest.lookback_days", DEFAULT_LOOKBACK_DAYS)?
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix("KOSPI")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let logging = LoggingConfig::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "pretty");
        assert!(logging.suppress_warnings);
        assert!(!logging.with_file);
    }

    #[test]
    fn test_effective_level() {
        let mut logging = LoggingConfig {
            level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(logging.effective_level(), "error");

        logging.suppress_warnings = false;
        assert_eq!(logging.effective_level(), "debug");
    }

    #[test]
    fn test_load_optional_missing_file() {
        let config = AppConfig::load_optional("does/not/exist.toml").unwrap();
        assert_eq!(config.backtest.lookback_days, DEFAULT_LOOKBACK_DAYS);
    }

    #[test]
    fn test_load_required_missing_file() {
        assert!(AppConfig::load("does/not/exist.toml").is_err());
    }
}
